//! # Tweetscan Library
//!
//! Fetches tweet and user data from the Twitter/X REST API and extracts
//! lightweight text features from tweet text for downstream analysis.
//!
//! ## Features
//!
//! - Tweet text feature extraction: URLs, hashtags, mentioned users and words
//! - Optional AFINN sentiment scoring against a tab-separated lexicon
//! - Corpus scanning over CSV files, keeping every occurrence or unique entries
//! - OAuth 1.0a (HMAC-SHA1) signed lookups of tweets and users
//! - Flattening of tweet JSON into corpus row fields
//!
//! ## Configuration
//!
//! Only the API lookups need configuration:
//! - `xapi_api_key`, `xapi_api_secret`: API key and secret
//! - `xapi_access_token`, `xapi_access_token_secret`: Access token and secret
//! - `xapi_base_url`: API root (defaults to `https://api.twitter.com/1.1`)
//!
//! ## Example
//!
//! ```rust
//! use tweetscan::{parse_tweet_text, scan, AggregationMode, Row};
//!
//! let features = parse_tweet_text("Hello #World @bob!");
//! assert_eq!(features.hashtags, vec!["world"]);
//! assert_eq!(features.mentions, vec!["bob"]);
//! assert_eq!(features.words, vec!["hello"]);
//!
//! let mut row = Row::new();
//! row.insert("content".to_string(), "good day #rust".to_string());
//! let corpus = scan(vec![row], "content", AggregationMode::List).unwrap();
//! assert_eq!(corpus.row_count, 1);
//! assert_eq!(corpus.words.len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod lexicon;
pub mod oauth;
pub mod scanner;
pub mod twitter;

// Re-export commonly used types and functions
pub use config::{get_lexicon_path, TwitterConfig};
pub use error::{Error, Result};
pub use lexicon::Lexicon;
pub use scanner::{
    read_corpus, scan, scan_file, AggregationMode, Bucket, CorpusFeatures, Row,
};
pub use twitter::{
    enrich_row, extract, lookup_multiple_tweets, lookup_multiple_users, lookup_tweet,
    lookup_user, parse_tweet_text, parse_tweet_text_with_sentiment, signed_get, TweetFeatures,
};
