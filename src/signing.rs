/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 26/10/25
******************************************************************************/

//! OAuth 1.0a request signing (RFC 5849, HMAC-SHA1).
//!
//! Instapaper authenticates every API call with a signed `Authorization`
//! header over the request method, URL and form parameters. Obtaining the
//! access token pair is out of scope; this module only signs with it.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rand::Rng;
use rand::distr::Alphanumeric;
use sha1::Sha1;
use url::Url;

type HmacSha1 = Hmac<Sha1>;

/// Characters left untouched by OAuth percent-encoding (RFC 5849 §3.6):
/// ALPHA, DIGIT, `-`, `.`, `_`, `~`. Everything else is escaped.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";
const NONCE_LEN: usize = 32;

/// The four credentials that sign a request: the application consumer pair
/// and the resource owner's token pair.
///
/// Immutable once constructed; rotating credentials means building a new
/// [`Client`](crate::client::Client).
#[derive(Clone)]
pub struct OauthCredentials {
    consumer_key: String,
    consumer_secret: String,
    token: String,
    token_secret: String,
}

impl OauthCredentials {
    /// Creates a signing context from resolved credentials
    #[must_use]
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        token: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token: token.into(),
            token_secret: token_secret.into(),
        }
    }

    /// Builds the `Authorization` header value for one request, using a
    /// fresh nonce and the current time.
    ///
    /// `params` are the form parameters the request body will carry; they
    /// are covered by the signature together with any query parameters of
    /// `url`.
    #[must_use]
    pub fn authorization_header(
        &self,
        method: &str,
        url: &Url,
        params: &[(&str, String)],
    ) -> String {
        let nonce: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(NONCE_LEN)
            .map(char::from)
            .collect();
        let timestamp = Utc::now().timestamp().to_string();
        self.authorization_header_at(method, url, params, &nonce, &timestamp)
    }

    // Deterministic given nonce and timestamp, which keeps the algorithm
    // testable.
    fn authorization_header_at(
        &self,
        method: &str,
        url: &Url,
        params: &[(&str, String)],
        nonce: &str,
        timestamp: &str,
    ) -> String {
        let oauth_params = [
            ("oauth_consumer_key", self.consumer_key.as_str()),
            ("oauth_nonce", nonce),
            ("oauth_signature_method", SIGNATURE_METHOD),
            ("oauth_timestamp", timestamp),
            ("oauth_token", self.token.as_str()),
            ("oauth_version", OAUTH_VERSION),
        ];

        let base = signature_base_string(method, url, params, &oauth_params);
        let key = format!(
            "{}&{}",
            encode(&self.consumer_secret),
            encode(&self.token_secret)
        );
        let mut mac =
            HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC can take key of any size");
        mac.update(base.as_bytes());
        let signature = BASE64.encode(mac.finalize().into_bytes());

        let mut fields: Vec<String> = oauth_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, encode(v)))
            .collect();
        fields.push(format!("oauth_signature=\"{}\"", encode(&signature)));
        format!("OAuth {}", fields.join(", "))
    }
}

impl std::fmt::Debug for OauthCredentials {
    // Secrets stay out of logs
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OauthCredentials")
            .field("consumer_key", &self.consumer_key)
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

/// Assembles the RFC 5849 §3.4.1 signature base string: uppercase method,
/// normalized URL, and the sorted percent-encoded union of oauth, query and
/// form parameters.
fn signature_base_string(
    method: &str,
    url: &Url,
    form_params: &[(&str, String)],
    oauth_params: &[(&str, &str)],
) -> String {
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (k, v) in oauth_params {
        pairs.push((encode(k), encode(v)));
    }
    for (k, v) in form_params {
        pairs.push((encode(k), encode(v)));
    }
    for (k, v) in url.query_pairs() {
        pairs.push((encode(&k), encode(&v)));
    }
    pairs.sort();
    let normalized = pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        encode(&base_url(url)),
        encode(&normalized)
    )
}

/// Scheme, host, optional non-default port and path; query excluded. The
/// `url` crate lowercases scheme and host and drops default ports at parse
/// time.
fn base_url(url: &Url) -> String {
    let scheme = url.scheme();
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{scheme}://{host}:{port}{}", url.path()),
        None => format!("{scheme}://{host}{}", url.path()),
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}
