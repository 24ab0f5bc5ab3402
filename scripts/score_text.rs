//! Tweet Scoring Script
//!
//! This script reads tweet texts from the terminal and prints the hashtags,
//! mentions, URLs, words and AFINN sentiment score of each one.

use std::io::{self, Write};

use tweetscan::{get_lexicon_path, parse_tweet_text_with_sentiment, Lexicon};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    println!("🐦 Tweet Scoring Tool");
    println!("=====================");

    let lexicon_path = get_lexicon_path();
    println!("📖 Loading lexicon from {}", lexicon_path);
    let lexicon = match Lexicon::load(&lexicon_path) {
        Ok(lexicon) => lexicon,
        Err(e) => {
            eprintln!("❌ Could not load lexicon: {}", e);
            eprintln!();
            eprintln!("Point AFINN_PATH at a tab-separated word list:");
            eprintln!("  export AFINN_PATH=\"/path/to/AFINN-111.txt\"");
            std::process::exit(1);
        }
    };
    println!(
        "✅ {} words and {} phrases loaded",
        lexicon.word_count(),
        lexicon.phrase_count()
    );

    loop {
        print!("\n📝 Enter a tweet (empty line to quit): ");
        io::stdout().flush()?;
        let mut tweet_text = String::new();
        if io::stdin().read_line(&mut tweet_text)? == 0 {
            break;
        }
        let tweet_text = tweet_text.trim();
        if tweet_text.is_empty() {
            break;
        }

        let features = parse_tweet_text_with_sentiment(tweet_text, &lexicon);
        println!("🔗 URLs:     {}", features.urls.join(" "));
        println!("#️⃣  Hashtags: {}", features.hashtags.join(" "));
        println!("👤 Mentions: {}", features.mentions.join(" "));
        println!("💬 Words:    {}", features.words.join(" "));
        println!("📊 Score:    {}", features.sentiment.unwrap_or_default());
    }

    println!("👋 Bye");
    Ok(())
}
