//! Core Twitter API utilities.
//!
//! This module contains the low-level helper for sending OAuth 1.0a signed GET
//! requests to the Twitter API. Requests are made once; failures are returned to
//! the caller unchanged.

use log::{debug, error, info};
use reqwest::Client;
use url::Url;

use crate::config::TwitterConfig;
use crate::error::{Error, Result};
use crate::oauth::{build_oauth1_header, generate_nonce};

/// Sanitizes text for safe logging by truncating and escaping control characters.
///
/// This function:
/// - Truncates long text to prevent log flooding
/// - Replaces control characters that could manipulate log output
/// - Escapes newlines to prevent log injection
///
/// # Parameters
///
/// - `text`: The text to sanitize
/// - `max_chars`: Maximum number of characters kept before truncation
pub(crate) fn sanitize_for_logging(text: &str, max_chars: usize) -> String {
    let sanitized: String = text
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        })
        .collect();

    if sanitized.chars().count() > max_chars {
        let kept: String = sanitized.chars().take(max_chars).collect();
        format!("{}... [truncated, {} total bytes]", kept, text.len())
    } else {
        sanitized
    }
}

/// Splits a URL into its signing base (no query, no fragment) and its query parameters.
pub(crate) fn split_query(url: &str) -> Result<(String, Vec<(String, String)>)> {
    let mut parsed = Url::parse(url)?;
    let query: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    parsed.set_query(None);
    parsed.set_fragment(None);
    Ok((parsed.to_string(), query))
}

/// Sends an OAuth 1.0a signed GET request and returns the response body.
///
/// Query parameters already present on `url` are signed together with `params`.
///
/// # Parameters
///
/// - `config`: The credentials used to sign the request
/// - `url`: Endpoint URL, optionally with a query string
/// - `params`: Additional query parameters, unencoded
///
/// # Returns
///
/// - `Ok(String)`: The response body on a 2xx status
/// - `Err(Error::Api)`: On any other status
/// - `Err(Error::Http)`: If the request could not be sent or read
pub async fn signed_get(
    config: &TwitterConfig,
    url: &str,
    params: &[(String, String)],
) -> Result<String> {
    let (base_url, mut all_params) = split_query(url)?;
    all_params.extend_from_slice(params);

    let operation_name = base_url
        .rsplit('/')
        .next()
        .unwrap_or(base_url.as_str())
        .to_string();
    info!("Sending signed GET for operation: {}", operation_name);
    debug!("Request URL: {} ({} parameters)", base_url, all_params.len());

    let auth_header = build_oauth1_header(
        config,
        "GET",
        &base_url,
        &all_params,
        &generate_nonce(),
        chrono::Utc::now().timestamp(),
    );
    debug!("Request headers: Authorization: OAuth [REDACTED]");

    let response = Client::new()
        .get(&base_url)
        .query(&all_params)
        .header("Authorization", auth_header)
        .send()
        .await?;

    let status = response.status();
    info!(
        "Received response with status: {} for operation: {}",
        status, operation_name
    );

    let body = response.text().await?;
    if status.is_success() {
        debug!(
            "Response summary for '{}': {} bytes received",
            operation_name,
            body.len()
        );
        return Ok(body);
    }

    error!("Operation '{}' failed - Status: {}", operation_name, status);
    debug!(
        "Error response for '{}': {}",
        operation_name,
        sanitize_for_logging(&body, 200)
    );
    Err(Error::Api {
        operation: operation_name,
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_control_characters() {
        assert_eq!(sanitize_for_logging("a\nb\tc\u{7}", 100), "a b c?");
    }

    #[test]
    fn test_sanitize_truncates_on_char_boundary() {
        let out = sanitize_for_logging("héllo wörld", 4);
        assert_eq!(out, "héll... [truncated, 13 total bytes]");
    }

    #[test]
    fn test_split_query_separates_parameters() {
        let (base, query) =
            split_query("https://api.twitter.com/1.1/users/lookup.json?screen_name=a%2Cb&x=1")
                .unwrap();
        assert_eq!(base, "https://api.twitter.com/1.1/users/lookup.json");
        assert_eq!(
            query,
            vec![
                ("screen_name".to_string(), "a,b".to_string()),
                ("x".to_string(), "1".to_string())
            ]
        );
    }

    #[test]
    fn test_split_query_rejects_relative_url() {
        assert!(matches!(split_query("statuses/show.json"), Err(Error::Url(_))));
    }
}
