//! Tweet and user lookups against the Twitter REST API v1.1.
//!
//! All four lookups are single signed GET requests. Bulk variants join their
//! ids or screen names with commas; the API accepts up to 100 per call and
//! nothing here pages beyond that.

use log::{info, warn};
use serde_json::Value;

use crate::config::TwitterConfig;
use crate::error::Result;

use super::api::signed_get;

fn join_encoded<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|s| urlencoding::encode(s.as_ref()).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

/// URL for a single tweet lookup (`statuses/show.json`).
pub fn tweet_url(base_url: &str, tweet_id: &str) -> String {
    format!(
        "{}/statuses/show.json?id={}",
        base_url,
        urlencoding::encode(tweet_id)
    )
}

/// URL for a bulk tweet lookup (`statuses/lookup.json`).
pub fn tweets_url<S: AsRef<str>>(base_url: &str, tweet_ids: &[S]) -> String {
    format!("{}/statuses/lookup.json?id={}", base_url, join_encoded(tweet_ids))
}

/// URL for a single user lookup (`users/show.json`).
pub fn user_url(base_url: &str, screen_name: &str) -> String {
    format!(
        "{}/users/show.json?screen_name={}",
        base_url,
        urlencoding::encode(screen_name)
    )
}

/// URL for a bulk user lookup (`users/lookup.json`).
pub fn users_url<S: AsRef<str>>(base_url: &str, screen_names: &[S]) -> String {
    format!(
        "{}/users/lookup.json?screen_name={}",
        base_url,
        join_encoded(screen_names)
    )
}

async fn get_json(config: &TwitterConfig, url: &str) -> Result<Value> {
    let body = signed_get(config, url, &[]).await?;
    Ok(serde_json::from_str(&body)?)
}

/// Looks up a single tweet by id.
///
/// # Returns
///
/// - `Ok(Value)`: The tweet object as returned by the API
/// - `Err(...)`: On network, status or JSON errors
///
/// # Example
///
/// ```rust,no_run
/// use tweetscan::{lookup_tweet, TwitterConfig};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let config = TwitterConfig::from_env().unwrap();
///     let tweet = lookup_tweet(&config, "473010591544520705").await.unwrap();
///     println!("{}", serde_json::to_string_pretty(&tweet).unwrap());
/// }
/// ```
pub async fn lookup_tweet(config: &TwitterConfig, tweet_id: &str) -> Result<Value> {
    info!("Looking up tweet {}", tweet_id);
    get_json(config, &tweet_url(&config.base_url, tweet_id)).await
}

/// Looks up several tweets by id in one request.
///
/// Returns the JSON array of tweet objects. Ids the API does not know are
/// silently absent from the array.
pub async fn lookup_multiple_tweets<S: AsRef<str>>(
    config: &TwitterConfig,
    tweet_ids: &[S],
) -> Result<Value> {
    info!("Looking up {} tweets", tweet_ids.len());
    if tweet_ids.len() > 100 {
        warn!(
            "{} tweet ids requested; the API only honours the first 100",
            tweet_ids.len()
        );
    }
    get_json(config, &tweets_url(&config.base_url, tweet_ids)).await
}

/// Looks up a single user by screen name.
pub async fn lookup_user(config: &TwitterConfig, screen_name: &str) -> Result<Value> {
    info!("Looking up user by screen name: {}", screen_name);
    get_json(config, &user_url(&config.base_url, screen_name)).await
}

/// Looks up up to 100 users by screen name in one request.
pub async fn lookup_multiple_users<S: AsRef<str>>(
    config: &TwitterConfig,
    screen_names: &[S],
) -> Result<Value> {
    info!("Looking up {} users", screen_names.len());
    if screen_names.len() > 100 {
        warn!(
            "{} screen names requested; the API only honours the first 100",
            screen_names.len()
        );
    }
    get_json(config, &users_url(&config.base_url, screen_names)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BASE_URL;

    #[test]
    fn test_tweet_urls() {
        assert_eq!(
            tweet_url(DEFAULT_BASE_URL, "473010591544520705"),
            "https://api.twitter.com/1.1/statuses/show.json?id=473010591544520705"
        );
        assert_eq!(
            tweets_url(DEFAULT_BASE_URL, &["1", "2", "3"]),
            "https://api.twitter.com/1.1/statuses/lookup.json?id=1,2,3"
        );
    }

    #[test]
    fn test_user_urls() {
        assert_eq!(
            user_url(DEFAULT_BASE_URL, "grfiv"),
            "https://api.twitter.com/1.1/users/show.json?screen_name=grfiv"
        );
        let names = vec!["grfiv".to_string(), "flgprohemo".to_string()];
        assert_eq!(
            users_url(DEFAULT_BASE_URL, &names),
            "https://api.twitter.com/1.1/users/lookup.json?screen_name=grfiv,flgprohemo"
        );
    }

    #[test]
    fn test_screen_names_are_encoded() {
        assert_eq!(
            user_url("http://localhost", "a b&c"),
            "http://localhost/users/show.json?screen_name=a%20b%26c"
        );
    }
}
