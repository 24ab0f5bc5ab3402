//! Twitter/X API integration module.
//!
//! This module contains the OAuth 1.0a signed request helper, the v1.1 tweet and
//! user lookups, flattening of tweet JSON into corpus rows, and the tweet text
//! feature extractor.

mod api;
mod flatten;
mod lookup;
mod parsing;

// Re-export public API
pub use api::signed_get;
pub use flatten::{enrich_row, render_value};
pub use lookup::{
    lookup_multiple_tweets, lookup_multiple_users, lookup_tweet, lookup_user, tweet_url,
    tweets_url, user_url, users_url,
};
pub use parsing::{extract, parse_tweet_text, parse_tweet_text_with_sentiment, TweetFeatures};
