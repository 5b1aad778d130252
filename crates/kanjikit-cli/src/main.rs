//! Command-line kanji coverage reports for Anki via AnkiConnect.

use std::path::PathBuf;

use clap::Parser;
use kanjikit_engine::{AnkiSource, ClientBuilder, CoverageConfig, CoverageEngine, Scope};
use tracing::info;

/// Kanji coverage statistics for an Anki collection.
#[derive(Parser, Debug)]
#[command(name = "kanjikit")]
#[command(version, about, long_about = None)]
struct Args {
    /// AnkiConnect host address
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// AnkiConnect port
    #[arg(long, default_value_t = 8765)]
    port: u16,

    /// AnkiConnect API key, if one is configured
    #[arg(long)]
    key: Option<String>,

    /// Restrict the scan to the current deck instead of the whole collection
    #[arg(long, default_value_t = false)]
    current_deck: bool,

    /// Note field to scan for kanji (repeatable; defaults to Expression and Kanji)
    #[arg(long = "src-field", value_name = "NAME")]
    src_fields: Vec<String>,

    /// Print the per-grade summary as JSON instead of the HTML report
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let url = format!("http://{}:{}", args.host, args.port);
    let mut builder = ClientBuilder::new().url(url.clone());
    if let Some(key) = &args.key {
        builder = builder.api_key(key);
    }
    let client = builder.build();

    let scope = if args.current_deck {
        Scope::CurrentDeck
    } else {
        Scope::WholeCollection
    };
    let mut config = CoverageConfig::default();
    if !args.src_fields.is_empty() {
        config.src_fields = args.src_fields.clone();
    }

    info!(
        anki_url = %url,
        scope = ?scope,
        src_fields = ?config.src_fields,
        "scanning collection"
    );

    let engine = CoverageEngine::new(AnkiSource::new(client), scope, config);
    let report = if args.json {
        let sets = engine.scan().await?;
        serde_json::to_string_pretty(&sets.summary())?
    } else {
        engine.report().await?
    };

    match &args.output {
        Some(path) => std::fs::write(path, &report)?,
        None => println!("{report}"),
    }

    Ok(())
}
