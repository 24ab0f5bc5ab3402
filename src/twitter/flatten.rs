//! Flattening of tweet JSON into corpus row fields.

use serde_json::Value;

use crate::scanner::Row;

const TWEET_FIELDS: [&str; 6] = [
    "coordinates",
    "favorited",
    "retweet_count",
    "retweeted",
    "place",
    "geo",
];

const USER_FIELDS: [&str; 8] = [
    "followers_count",
    "favourites_count",
    "listed_count",
    "location",
    "utc_offset",
    "lang",
    "geo_enabled",
    "time_zone",
];

/// Renders a JSON value the way the corpus files store cells.
///
/// `null` becomes `None` and booleans become `True` / `False`, matching the
/// existing corpus files. Strings are unquoted; arrays and objects are compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Joins one string field of every entity in a list with `~`.
fn join_entities(list: &Value, field: &str) -> String {
    list.as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get(field).and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join("~")
        })
        .unwrap_or_default()
}

/// Returns a copy of `row` enriched with fields from a tweet object.
///
/// The input row is left untouched. Added keys:
///
/// - `coordinates`, `favorited`, `retweet_count`, `retweeted`, `place`, `geo`
/// - `hashtags`, `user_mentions`: entity texts joined with `~`, only when
///   `entities` is present
/// - `followers_count`, `favourites_count`, `listed_count`, `location`,
///   `utc_offset`, `lang`, `geo_enabled`, `time_zone`, `description`: only
///   when `user` is present
///
/// Missing tweet fields are rendered as `None`.
pub fn enrich_row(row: &Row, tweet: &Value) -> Row {
    let mut enriched = row.clone();
    let field = |v: &Value, key: &str| {
        v.get(key)
            .map(render_value)
            .unwrap_or_else(|| "None".to_string())
    };

    for key in TWEET_FIELDS {
        enriched.insert(key.to_string(), field(tweet, key));
    }

    if let Some(entities) = tweet.get("entities").filter(|e| !e.is_null()) {
        let hashtags = entities
            .get("hashtags")
            .map(|list| join_entities(list, "text"))
            .unwrap_or_default();
        let mentions = entities
            .get("user_mentions")
            .map(|list| join_entities(list, "screen_name"))
            .unwrap_or_default();
        enriched.insert("hashtags".to_string(), hashtags);
        enriched.insert("user_mentions".to_string(), mentions);
    }

    if let Some(user) = tweet.get("user").filter(|u| !u.is_null()) {
        for key in USER_FIELDS {
            enriched.insert(key.to_string(), field(user, key));
        }
        let description = user
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default();
        enriched.insert("description".to_string(), description.to_string());
    }

    enriched
}
