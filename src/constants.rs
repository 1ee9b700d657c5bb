/// Base URL for the Instapaper REST API, version 1
pub const API_BASE_URL: &str = "https://www.instapaper.com/api/1";

/// Endpoint listing the user's folders
pub const LIST_FOLDERS: &str = "/folders/list";
/// Endpoint creating a folder
pub const ADD_FOLDER: &str = "/folders/add";
/// Endpoint deleting a folder
pub const DELETE_FOLDER: &str = "/folders/delete";
/// Endpoint listing the bookmarks in a folder
pub const LIST_BOOKMARKS: &str = "/bookmarks/list";
/// Endpoint permanently deleting a bookmark
pub const DELETE_BOOKMARK: &str = "/bookmarks/delete";
/// Endpoint moving a bookmark to another folder
pub const MOVE_BOOKMARK: &str = "/bookmarks/move";
/// Endpoint adding a bookmark
pub const ADD_BOOKMARK: &str = "/bookmarks/add";

/// Maximum number of attempts a request is given before it fails
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;
/// Upper bound in seconds for a single attempt, connection included
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;
/// Largest page the server accepts when listing bookmarks
pub const DEFAULT_BOOKMARK_LIMIT: u32 = 500;

/// User agent string identifying this client to the Instapaper API
pub const USER_AGENT: &str = "instapaper-client/0.1.2";

/// Name of the credentials file looked up in the user's home directory
pub const CONFIG_FILE_NAME: &str = ".instapaperrc";
/// Section of the credentials file holding the application consumer pair
pub const APP_SECTION: &str = "instapaper";
