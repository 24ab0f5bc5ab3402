//! Corpus scanning.
//!
//! Reads a CSV corpus row by row, runs [`parse_tweet_text`] over one text column
//! and gathers the features of the whole file, either keeping every occurrence
//! in order ([`AggregationMode::List`]) or keeping unique entries only
//! ([`AggregationMode::Set`]).

use log::{debug, info};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::twitter::{parse_tweet_text, TweetFeatures};

/// One corpus row: column name to cell value.
pub type Row = HashMap<String, String>;

/// How per-row features are combined across the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationMode {
    /// Every occurrence, in encounter order.
    List,
    /// Unique entries, unordered.
    Set,
}

impl FromStr for AggregationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "list" => Ok(AggregationMode::List),
            "set" => Ok(AggregationMode::Set),
            _ => Err(Error::Config(format!(
                "aggregation mode must be 'list' or 'set', not '{}'",
                s
            ))),
        }
    }
}

/// A container of extracted strings shaped by [`AggregationMode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Bucket {
    List(Vec<String>),
    Set(HashSet<String>),
}

impl Bucket {
    pub fn new(mode: AggregationMode) -> Self {
        match mode {
            AggregationMode::List => Bucket::List(Vec::new()),
            AggregationMode::Set => Bucket::Set(HashSet::new()),
        }
    }

    pub fn extend<I: IntoIterator<Item = String>>(&mut self, items: I) {
        match self {
            Bucket::List(list) => list.extend(items),
            Bucket::Set(set) => set.extend(items),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Bucket::List(list) => list.len(),
            Bucket::Set(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, item: &str) -> bool {
        match self {
            Bucket::List(list) => list.iter().any(|s| s == item),
            Bucket::Set(set) => set.contains(item),
        }
    }

    /// Iterates the entries; in `Set` mode the order is unspecified.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &String> + '_> {
        match self {
            Bucket::List(list) => Box::new(list.iter()),
            Bucket::Set(set) => Box::new(set.iter()),
        }
    }
}

/// Features accumulated over a whole corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusFeatures {
    pub urls: Bucket,
    pub hashtags: Bucket,
    pub mentions: Bucket,
    pub words: Bucket,
    pub row_count: usize,
}

impl CorpusFeatures {
    pub fn new(mode: AggregationMode) -> Self {
        CorpusFeatures {
            urls: Bucket::new(mode),
            hashtags: Bucket::new(mode),
            mentions: Bucket::new(mode),
            words: Bucket::new(mode),
            row_count: 0,
        }
    }

    /// Merges one row's features and counts the row.
    pub fn absorb(&mut self, features: TweetFeatures) {
        self.urls.extend(features.urls);
        self.hashtags.extend(features.hashtags);
        self.mentions.extend(features.mentions);
        self.words.extend(features.words);
        self.row_count += 1;
    }
}

/// Scans corpus rows in order, extracting features from `text_column`.
///
/// # Errors
///
/// Returns [`Error::Column`] for the first row (1-based) that has no `text_column`.
/// The scan stops there and no partial result is returned.
pub fn scan<I>(rows: I, text_column: &str, mode: AggregationMode) -> Result<CorpusFeatures>
where
    I: IntoIterator<Item = Row>,
{
    let mut corpus = CorpusFeatures::new(mode);

    for (index, row) in rows.into_iter().enumerate() {
        let text = row.get(text_column).ok_or_else(|| Error::Column {
            column: text_column.to_string(),
            row: index + 1,
        })?;
        debug!("Row {}: {} bytes of text", index + 1, text.len());
        corpus.absorb(parse_tweet_text(text));
    }

    info!(
        "Scanned {} rows ({:?} mode): {} words, {} hashtags, {} mentions, {} urls",
        corpus.row_count,
        mode,
        corpus.words.len(),
        corpus.hashtags.len(),
        corpus.mentions.len(),
        corpus.urls.len()
    );
    Ok(corpus)
}

/// Reads every row of a comma-separated corpus whose first line names the columns.
///
/// Rows may be ragged: fields beyond the header are ignored, and a short row
/// simply lacks the trailing columns.
pub fn read_corpus<R: Read>(reader: R) -> Result<Vec<Row>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.len() > headers.len() {
            debug!(
                "Row {} has {} fields, ignoring {} beyond the header",
                rows.len() + 1,
                record.len(),
                record.len() - headers.len()
            );
        }
        let row: Row = headers
            .iter()
            .zip(record.iter())
            .map(|(column, value)| (column.to_string(), value.to_string()))
            .collect();
        rows.push(row);
    }

    debug!("Read {} corpus rows", rows.len());
    Ok(rows)
}

/// Reads a CSV corpus file and scans it.
///
/// # Example
///
/// ```rust,no_run
/// use tweetscan::{scan_file, AggregationMode};
///
/// let corpus = scan_file("tweets.csv", "content", AggregationMode::Set).unwrap();
/// println!("{} unique hashtags in {} tweets", corpus.hashtags.len(), corpus.row_count);
/// ```
pub fn scan_file(
    path: impl AsRef<Path>,
    text_column: &str,
    mode: AggregationMode,
) -> Result<CorpusFeatures> {
    let path = path.as_ref();
    info!("Scanning corpus {} (column '{}')", path.display(), text_column);

    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let rows = read_corpus(file)?;
    scan(rows, text_column, mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(texts: &[&str]) -> Vec<Row> {
        texts
            .iter()
            .map(|t| {
                let mut row = Row::new();
                row.insert("content".to_string(), t.to_string());
                row
            })
            .collect()
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("list".parse::<AggregationMode>().unwrap(), AggregationMode::List);
        assert_eq!("SET".parse::<AggregationMode>().unwrap(), AggregationMode::Set);
        assert!(matches!(
            "bag".parse::<AggregationMode>(),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_list_mode_keeps_duplicates_in_order() {
        let corpus = scan(
            rows(&["red blue", "red green", "blue red"]),
            "content",
            AggregationMode::List,
        )
        .unwrap();
        assert_eq!(corpus.row_count, 3);
        assert_eq!(
            corpus.words,
            Bucket::List(
                ["red", "blue", "red", "green", "blue", "red"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            )
        );
    }

    #[test]
    fn test_set_mode_deduplicates() {
        let corpus = scan(
            rows(&["red blue #a", "red green #a", "blue red #b"]),
            "content",
            AggregationMode::Set,
        )
        .unwrap();
        assert_eq!(corpus.row_count, 3);
        assert_eq!(corpus.words.len(), 3);
        assert!(corpus.words.contains("green"));
        assert_eq!(corpus.hashtags.len(), 2);
        assert!(matches!(corpus.words, Bucket::Set(_)));
    }

    #[test]
    fn test_missing_column_aborts_with_row_number() {
        let mut data = rows(&["one", "two"]);
        data[1].remove("content");
        data[1].insert("text".to_string(), "two".to_string());
        match scan(data, "content", AggregationMode::List) {
            Err(Error::Column { column, row }) => {
                assert_eq!(column, "content");
                assert_eq!(row, 2);
            }
            other => panic!("expected column error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = scan(Vec::new(), "content", AggregationMode::Set).unwrap();
        assert_eq!(corpus.row_count, 0);
        assert!(corpus.words.is_empty());
        assert!(corpus.urls.is_empty());
    }

    #[test]
    fn test_read_corpus_uses_header_row() {
        let data = "id,content\n1,\"Hi #rust, @ferris\"\n2,see http://a.io\n";
        let rows = read_corpus(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["content"], "Hi #rust, @ferris");
        assert_eq!(rows[1]["id"], "2");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let data = "id,content\n1,hello,extra,more\n2,bye\n";
        let rows = read_corpus(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["content"], "hello");
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1]["content"], "bye");
    }

    #[test]
    fn test_short_row_lacks_trailing_columns() {
        let data = "id,content\n1,hello\n2\n";
        let rows = read_corpus(data.as_bytes()).unwrap();
        assert!(!rows[1].contains_key("content"));
        assert!(matches!(
            scan(rows, "content", AggregationMode::List),
            Err(Error::Column { row: 2, .. })
        ));
    }

    #[test]
    fn test_unterminated_quote_is_csv_error() {
        let data = "id,content\n1,\"hello\n";
        assert!(matches!(read_corpus(data.as_bytes()), Err(Error::Csv(_))));
    }

    #[test]
    fn test_bucket_serializes_as_array() {
        let mut bucket = Bucket::new(AggregationMode::List);
        bucket.extend(vec!["a".to_string(), "a".to_string()]);
        assert_eq!(serde_json::to_string(&bucket).unwrap(), r#"["a","a"]"#);
    }
}
