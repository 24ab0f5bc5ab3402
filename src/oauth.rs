//! OAuth authentication module for Twitter/X API integration.
//!
//! This module implements OAuth 1.0a request signing with HMAC-SHA1, which the
//! Twitter v1.1 REST endpoints require for user-context requests.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use log::debug;
use rand::{distributions::Alphanumeric, Rng};
use sha1::Sha1;

use crate::config::TwitterConfig;

type HmacSha1 = Hmac<Sha1>;

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";

/// Percent-encodes a value as RFC 3986 requires for OAuth 1.0a.
///
/// Only `A-Z a-z 0-9 - . _ ~` are left untouched.
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Builds the OAuth 1.0a signature base string.
///
/// # Parameters
///
/// - `method`: The HTTP method, e.g. `GET`
/// - `base_url`: The request URL without query string
/// - `params`: All query, body and `oauth_*` parameters, unencoded
///
/// # Format
///
/// ```text
/// METHOD&percent(base_url)&percent(k1=v1&k2=v2...)
/// ```
///
/// Parameters are sorted by encoded key, then encoded value.
pub fn signature_base_string(method: &str, base_url: &str, params: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();

    let parameter_string = encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        percent_encode(base_url),
        percent_encode(&parameter_string)
    )
}

/// Signs a base string with the consumer and token secrets.
pub fn sign(base_string: &str, consumer_secret: &str, token_secret: &str) -> String {
    let key = format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    );
    let mut mac = HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC accepts any key length");
    mac.update(base_string.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Generates a random alphanumeric nonce.
pub fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Builds the `Authorization` header for an OAuth 1.0a signed request.
///
/// # Parameters
///
/// - `config`: The four OAuth credentials
/// - `method`: HTTP method
/// - `base_url`: Request URL without query string
/// - `params`: Request parameters (query string and form body), unencoded
/// - `nonce`, `timestamp`: Per-request values; see [`generate_nonce`]
///
/// # Format
///
/// ```text
/// OAuth oauth_consumer_key="...", oauth_nonce="...", oauth_signature="...", ...
/// ```
pub fn build_oauth1_header(
    config: &TwitterConfig,
    method: &str,
    base_url: &str,
    params: &[(String, String)],
    nonce: &str,
    timestamp: i64,
) -> String {
    let mut oauth_params = vec![
        ("oauth_consumer_key".to_string(), config.api_key.clone()),
        ("oauth_nonce".to_string(), nonce.to_string()),
        (
            "oauth_signature_method".to_string(),
            SIGNATURE_METHOD.to_string(),
        ),
        ("oauth_timestamp".to_string(), timestamp.to_string()),
        ("oauth_token".to_string(), config.access_token_key.clone()),
        ("oauth_version".to_string(), OAUTH_VERSION.to_string()),
    ];

    let mut all_params = oauth_params.clone();
    all_params.extend_from_slice(params);

    let base_string = signature_base_string(method, base_url, &all_params);
    debug!("OAuth signature base string length: {}", base_string.len());

    let signature = sign(
        &base_string,
        &config.api_secret,
        &config.access_token_secret,
    );
    oauth_params.push(("oauth_signature".to_string(), signature));
    oauth_params.sort();

    let fields = oauth_params
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join(", ");

    format!("OAuth {}", fields)
}
