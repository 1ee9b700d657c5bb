use instapaper_client::prelude::*;
use serde_json::{Value, json};

fn bookmark_json() -> Value {
    json!({
        "type": "bookmark",
        "bookmark_id": 123,
        "description": "An example page",
        "time": 1554107562,
        "title": "Example",
        "url": "https://example.com/"
    })
}

fn folder_json() -> Value {
    json!({
        "type": "folder",
        "folder_id": 100,
        "title": "research",
        "slug": "research"
    })
}

#[test]
fn bookmark_from_json_round_trip() {
    let bookmark = Bookmark::from_json(&bookmark_json()).unwrap();
    assert_eq!(bookmark.id, Some(ResourceId::Number(123)));
    assert_eq!(bookmark.description.as_deref(), Some("An example page"));
    assert_eq!(bookmark.time, Some(json!(1554107562)));
    assert_eq!(bookmark.title.as_deref(), Some("Example"));
    assert_eq!(bookmark.url.as_deref(), Some("https://example.com/"));
}

#[test]
fn bookmark_from_json_accepts_string_fields() {
    let bookmark = Bookmark::from_json(&json!({
        "bookmark_id": "42",
        "description": "d",
        "time": "t",
        "title": "Title",
        "url": "https://example.com"
    }))
    .unwrap();
    assert_eq!(bookmark.id, Some(ResourceId::Text("42".to_string())));
    assert_eq!(bookmark.title.as_deref(), Some("Title"));
    assert_eq!(bookmark.url.as_deref(), Some("https://example.com"));
}

#[test]
fn bookmark_from_json_requires_every_field() {
    for field in ["bookmark_id", "description", "time", "title", "url"] {
        let mut value = bookmark_json();
        value.as_object_mut().unwrap().remove(field);
        match Bookmark::from_json(&value) {
            Err(AppError::MissingField(name)) => assert_eq!(name, field),
            other => panic!("expected MissingField for `{field}`, got {other:?}"),
        }
    }
}

#[test]
fn bookmark_from_json_keeps_null_metadata_as_none() {
    let bookmark = Bookmark::from_json(&json!({
        "bookmark_id": 7,
        "description": null,
        "time": null,
        "title": null,
        "url": "https://example.com/"
    }))
    .unwrap();
    assert_eq!(bookmark.description, None);
    assert_eq!(bookmark.time, None);
    assert_eq!(bookmark.title, None);
}

#[test]
fn folder_from_json_round_trip() {
    let folder = Folder::from_json(&folder_json()).unwrap();
    assert_eq!(folder.id, Some(ResourceId::Number(100)));
    assert_eq!(folder.title.as_deref(), Some("research"));
    assert_eq!(folder.slug.as_deref(), Some("research"));
}

#[test]
fn folder_from_json_requires_every_field() {
    for field in ["folder_id", "title", "slug"] {
        let mut value = folder_json();
        value.as_object_mut().unwrap().remove(field);
        match Folder::from_json(&value) {
            Err(AppError::MissingField(name)) => assert_eq!(name, field),
            other => panic!("expected MissingField for `{field}`, got {other:?}"),
        }
    }
}

#[test]
fn from_json_rejects_non_objects() {
    assert!(Bookmark::from_json(&json!([1, 2, 3])).is_err());
    assert!(Folder::from_json(&json!("folder")).is_err());
}

#[test]
fn built_in_folders_need_no_round_trip() {
    assert_eq!(UNREAD_FOLDER.id, Some(ResourceId::Number(0)));
    assert_eq!(UNREAD_FOLDER.title.as_deref(), Some("unread"));
    assert_eq!(ARCHIVE_FOLDER.id, Some(ResourceId::Text("archive".to_string())));
    assert_eq!(ARCHIVE_FOLDER.title.as_deref(), Some("archive"));
}

#[test]
fn identity_is_by_id_once_assigned() {
    let a = Bookmark {
        id: Some(1.into()),
        title: Some("a".to_string()),
        ..Bookmark::default()
    };
    let b = Bookmark {
        id: Some(1.into()),
        title: Some("b".to_string()),
        ..Bookmark::default()
    };
    assert_eq!(a, b);

    let c = Bookmark {
        id: Some(2.into()),
        ..a.clone()
    };
    assert_ne!(a, c);

    // records without ids compare field-wise
    assert_eq!(Bookmark::new("https://x/"), Bookmark::new("https://x/"));
    assert_ne!(Bookmark::new("https://x/"), Bookmark::new("https://y/"));
}

#[test]
fn display_quotes_strings_and_marks_absent_fields() {
    let bookmark = Bookmark::from_json(&bookmark_json()).unwrap();
    assert_eq!(
        bookmark.to_string(),
        "Bookmark[id=123, title=\"Example\", url=\"https://example.com/\"]"
    );

    let fresh = Bookmark::new("https://example.com/");
    assert_eq!(
        fresh.to_string(),
        "Bookmark[id=None, title=None, url=\"https://example.com/\"]"
    );

    assert_eq!(UNREAD_FOLDER.to_string(), "Folder[id=0, title=\"unread\"]");
    assert_eq!(
        ARCHIVE_FOLDER.to_string(),
        "Folder[id=archive, title=\"archive\"]"
    );
}

#[test]
fn resource_id_display_and_conversions() {
    assert_eq!(ResourceId::from(42).to_string(), "42");
    assert_eq!(ResourceId::from("archive").to_string(), "archive");
    assert_eq!(ResourceId::from("42".to_string()), ResourceId::Text("42".to_string()));
}
