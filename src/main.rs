//! # Tweetscan
//!
//! Command-line front end for the tweetscan library.
//!
//! ## Commands
//!
//! - `scan <file>`: Extract words, hashtags, mentions and URLs from a CSV corpus
//! - `parse <text>`: Extract features from one tweet, optionally with AFINN sentiment
//! - `tweet <id>` / `tweets <id>...`: Look up tweets by id
//! - `user <name>` / `users <name>...`: Look up users by screen name
//!
//! ## Environment Variables
//!
//! The lookup commands need `xapi_api_key`, `xapi_api_secret`,
//! `xapi_access_token` and `xapi_access_token_secret`. `AFINN_PATH` sets the
//! default lexicon for `parse --sentiment`; `parse --afinn <file>` scores with
//! that file instead.
//!
//! ## Logging
//!
//! Log levels are controlled via the `RUST_LOG` environment variable:
//!
//! ```bash
//! RUST_LOG=debug tweetscan scan tweets.csv --mode set
//! ```

use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

use tweetscan::{
    enrich_row, get_lexicon_path, lookup_multiple_tweets, lookup_multiple_users, lookup_tweet,
    lookup_user, parse_tweet_text, parse_tweet_text_with_sentiment, scan_file, AggregationMode,
    Bucket, Lexicon, Row, TwitterConfig,
};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(version, about)]
struct Opts {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract features from every row of a CSV corpus.
    Scan {
        /// CSV file with a header row
        file: PathBuf,
        /// Column holding the tweet text
        #[arg(short, long, default_value = "content")]
        column: String,
        /// `list` keeps every occurrence, `set` keeps unique entries
        #[arg(short, long, default_value = "list")]
        mode: AggregationMode,
        /// Print the full result as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Extract features from a single tweet text.
    Parse {
        text: String,
        /// Score the text against an AFINN lexicon
        #[arg(short, long)]
        sentiment: bool,
        /// Lexicon file (implies --sentiment); defaults to $AFINN_PATH or AFINN-111.txt
        #[arg(long)]
        afinn: Option<PathBuf>,
    },

    #[command(flatten)]
    Lookup(Lookup),
}

#[derive(Subcommand)]
enum Lookup {
    /// Look up a tweet by id.
    Tweet {
        id: String,
        /// Print the flattened corpus fields instead of the raw JSON
        #[arg(long)]
        flatten: bool,
    },

    /// Look up several tweets by id.
    Tweets {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Look up a user by screen name.
    User { screen_name: String },

    /// Look up several users by screen name.
    Users {
        #[arg(required = true)]
        screen_names: Vec<String>,
    },
}

fn print_bucket(label: &str, bucket: &Bucket) {
    let preview: Vec<&str> = bucket.iter().take(10).map(String::as_str).collect();
    println!("{:<9} {:>7}  {}", label, bucket.len(), preview.join(" "));
}

fn run_scan(
    file: PathBuf,
    column: &str,
    mode: AggregationMode,
    json: bool,
) -> Result<(), BoxError> {
    let corpus = scan_file(&file, column, mode)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&corpus)?);
        return Ok(());
    }

    println!("{} tweets in {}", corpus.row_count, file.display());
    print_bucket("words", &corpus.words);
    print_bucket("hashtags", &corpus.hashtags);
    print_bucket("mentions", &corpus.mentions);
    print_bucket("urls", &corpus.urls);
    Ok(())
}

/// Picks the lexicon to score with, if any. Naming a file asks for scoring.
fn lexicon_path(sentiment: bool, afinn: Option<PathBuf>) -> Option<PathBuf> {
    match afinn {
        Some(path) => Some(path),
        None if sentiment => Some(PathBuf::from(get_lexicon_path())),
        None => None,
    }
}

fn run_parse(text: &str, sentiment: bool, afinn: Option<PathBuf>) -> Result<(), BoxError> {
    let features = match lexicon_path(sentiment, afinn) {
        Some(path) => {
            let lexicon = Lexicon::load(&path)?;
            parse_tweet_text_with_sentiment(text, &lexicon)
        }
        None => parse_tweet_text(text),
    };

    println!("{}", serde_json::to_string_pretty(&features)?);
    Ok(())
}

async fn run_lookup(lookup: Lookup) -> Result<(), BoxError> {
    let config = TwitterConfig::from_env()?;

    let value = match lookup {
        Lookup::Tweet { id, flatten } => {
            let tweet = lookup_tweet(&config, &id).await?;
            if flatten {
                let mut row = Row::new();
                row.insert("id".to_string(), id);
                let mut fields: Vec<(String, String)> =
                    enrich_row(&row, &tweet).into_iter().collect();
                fields.sort();
                for (key, value) in fields {
                    println!("{}={}", key, value);
                }
                return Ok(());
            }
            tweet
        }
        Lookup::Tweets { ids } => lookup_multiple_tweets(&config, &ids).await?,
        Lookup::User { screen_name } => lookup_user(&config, &screen_name).await?,
        Lookup::Users { screen_names } => lookup_multiple_users(&config, &screen_names).await?,
    };

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Main entry point for the tweetscan command-line tool.
///
/// Local commands (`scan`, `parse`) run synchronously. Lookup commands build a
/// single-threaded runtime and send one request each.
fn main() -> Result<(), BoxError> {
    // Initialize the logging system
    env_logger::init();

    let opts = Opts::parse();

    match opts.command {
        Command::Scan {
            file,
            column,
            mode,
            json,
        } => run_scan(file, &column, mode, json),
        Command::Parse {
            text,
            sentiment,
            afinn,
        } => run_parse(&text, sentiment, afinn),
        Command::Lookup(lookup) => {
            info!("Starting API lookup");
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(run_lookup(lookup))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(args: &[&str]) -> (bool, Option<PathBuf>) {
        match Opts::try_parse_from(args).unwrap().command {
            Command::Parse {
                sentiment, afinn, ..
            } => (sentiment, afinn),
            _ => panic!("expected the parse command"),
        }
    }

    #[test]
    fn test_afinn_file_implies_scoring() {
        let (sentiment, afinn) = parse_args(&["tweetscan", "parse", "hi", "--afinn", "x.txt"]);
        assert!(!sentiment);
        assert_eq!(lexicon_path(sentiment, afinn), Some(PathBuf::from("x.txt")));
    }

    #[test]
    fn test_sentiment_flag_uses_default_lexicon() {
        let (sentiment, afinn) = parse_args(&["tweetscan", "parse", "hi", "-s"]);
        assert_eq!(
            lexicon_path(sentiment, afinn),
            Some(PathBuf::from(get_lexicon_path()))
        );
    }

    #[test]
    fn test_plain_parse_does_not_score() {
        let (sentiment, afinn) = parse_args(&["tweetscan", "parse", "hi"]);
        assert_eq!(lexicon_path(sentiment, afinn), None);
    }

    #[test]
    fn test_unknown_mode_is_rejected_by_cli() {
        assert!(Opts::try_parse_from(["tweetscan", "scan", "t.csv", "--mode", "bag"]).is_err());
    }
}
