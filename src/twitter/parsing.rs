//! Text parsing and extraction utilities for Twitter content.
//!
//! This module splits tweet text into URLs, hashtags, mentioned users and the
//! remaining words. Each stage strips what it matched before the next stage runs,
//! so a hashtag inside a URL is never reported twice.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::lexicon::Lexicon;

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?-u:\b)((?:https?|ftp|file)://[-A-Z0-9+&@#/%?=~_|$!:,.;]*[A-Z0-9+&@#/%=~_|$])")
        .expect("URL pattern is valid")
});

static HASHTAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#(\w+)").expect("hashtag pattern is valid"));

static MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@(\w+)").expect("mention pattern is valid"));

/// Tokens dropped from the word list when they stand alone.
const SINGLETON_PUNCTUATION: [&str; 8] = [".", ":", "!", ",", ";", "-", "?", "\u{2026}"];

/// Features extracted from one tweet.
///
/// Every list is in order of appearance. `sentiment` is only present when the
/// text was scored against a [`Lexicon`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TweetFeatures {
    pub urls: Vec<String>,
    pub hashtags: Vec<String>,
    pub mentions: Vec<String>,
    pub words: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<i32>,
}

/// Extracts features from tweet text, scoring it when a lexicon is supplied.
///
/// # Parameters
///
/// - `text`: The raw tweet body
/// - `lexicon`: Optional AFINN lexicon; when present the result carries a sentiment score
///
/// # Example
///
/// ```rust
/// use tweetscan::extract;
///
/// let features = extract("check http://example.com/a?x=1 now", None);
/// assert_eq!(features.urls, vec!["http://example.com/a?x=1"]);
/// assert_eq!(features.words, vec!["check", "now"]);
/// assert_eq!(features.sentiment, None);
/// ```
pub fn extract(text: &str, lexicon: Option<&Lexicon>) -> TweetFeatures {
    let content = text.to_lowercase();

    let (urls, content) = strip_matches(&URL_RE, &content, 1);
    let (hashtags, content) = strip_matches(&HASHTAG_RE, &content, 1);
    let (mentions, content) = strip_matches(&MENTION_RE, &content, 1);

    let words: Vec<String> = content
        .split_whitespace()
        .filter(|token| !SINGLETON_PUNCTUATION.contains(token))
        .map(str::to_string)
        .collect();

    let sentiment = lexicon.map(|lex| lex.score(&words));

    TweetFeatures {
        urls,
        hashtags,
        mentions,
        words,
        sentiment,
    }
}

/// Extracts URLs, hashtags, mentions and words without scoring.
pub fn parse_tweet_text(text: &str) -> TweetFeatures {
    extract(text, None)
}

/// Extracts features and always attaches an AFINN sentiment score.
pub fn parse_tweet_text_with_sentiment(text: &str, lexicon: &Lexicon) -> TweetFeatures {
    extract(text, Some(lexicon))
}

/// Collects capture `group` of every match, then removes the whole matches from `text`.
fn strip_matches(re: &Regex, text: &str, group: usize) -> (Vec<String>, String) {
    let found = re
        .captures_iter(text)
        .filter_map(|cap| cap.get(group))
        .map(|m| m.as_str().to_string())
        .collect();
    let remainder = re.replace_all(text, "").into_owned();
    (found, remainder)
}
