//! Tweet Sentiment Analyzer
//!
//! Command-line front end for the analysis pipeline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tweet_sentiment::{
    chart::SvgPieRenderer,
    config::Config,
    export::CsvExporter,
    pipeline::{AnalysisOutcome, AnalysisRequest, SentimentPipeline},
    sentiment::{classify, clean, LexiconScorer, PolarityScore, PolarityScorer, SentimentCategory},
    source::{StaticSource, TextSource, TwitterClient},
};

#[derive(Parser)]
#[command(name = "sentiment-analyzer")]
#[command(about = "Sentiment breakdown of recent tweets for a keyword")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path (defaults to ./config.toml or ~/.config/tweet-sentiment)
    #[arg(short, long)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch, score and aggregate posts for a keyword
    Analyze {
        /// Keyword to search for
        keyword: String,
        /// Number of posts to analyze
        #[arg(short = 'n', long, default_value = "100")]
        count: String,
        /// Read posts from a local file (one per line) instead of Twitter
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score a single piece of text
    Score {
        /// Text to score
        text: String,
    },
    /// Classify a polarity value
    Classify {
        /// Polarity in [-1.0, 1.0]
        #[arg(allow_hyphen_values = true)]
        polarity: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            keyword,
            count,
            input,
            json,
        } => {
            let config = match &cli.config {
                Some(path) => Config::load(path)?,
                None => Config::load_default()?,
            };
            analyze(config, &keyword, &count, input, json).await
        }
        Commands::Score { text } => score(&text),
        Commands::Classify { polarity } => classify_value(polarity),
    };

    if let Err(e) = &result {
        tracing::error!("Error in sentiment analysis: {}", e);
    }
    result
}

async fn analyze(
    config: Config,
    keyword: &str,
    count: &str,
    input: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let request = AnalysisRequest::parse(keyword, count, config.analysis.max_items)?;

    let source: Box<dyn TextSource> = match input {
        Some(path) => Box::new(StaticSource::from_file(path)?),
        None => Box::new(TwitterClient::new(config.twitter.clone())?),
    };

    let pipeline = SentimentPipeline::new(
        source,
        Box::new(LexiconScorer::new()),
        CsvExporter::new(&config.output.csv_path),
        Box::new(SvgPieRenderer::new(&config.output.chart_path)),
    )
    .with_progress_every(config.analysis.progress_every);

    let outcome = pipeline.run(&request).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.report)?);
    } else {
        print_report(&outcome);
    }

    Ok(())
}

fn score(text: &str) -> anyhow::Result<()> {
    let scorer = LexiconScorer::new();
    let polarity = PolarityScore::new(scorer.polarity(text))?;

    println!("Cleaned:   {}", clean(text));
    println!("Polarity:  {:.3}", polarity.value());
    println!("Sentiment: {}", classify(polarity));
    Ok(())
}

fn classify_value(polarity: f64) -> anyhow::Result<()> {
    let score = PolarityScore::new(polarity)?;
    println!("{}", classify(score));
    Ok(())
}

fn print_report(outcome: &AnalysisOutcome) {
    let report = &outcome.report;

    println!();
    println!(
        "📊 Sentiment for \"{}\" ({} tweets analyzed)",
        report.keyword, report.item_count
    );
    println!("{}", "-".repeat(44));
    println!("{:<24} {:>8} {:>9}", "Category", "Tweets", "Percent");
    for category in SentimentCategory::ALL.iter().rev() {
        println!(
            "{:<24} {:>8} {:>8}%",
            category.label(),
            outcome.result.count(*category),
            report.percentage(*category)
        );
    }
    println!("{}", "-".repeat(44));
    println!("Overall:       {} (polarity {:.3})", report.label, report.polarity);
    println!("Most common:   {}", outcome.result.dominant_category());
    println!("CSV export:    {}", outcome.export_path.display());
    match &outcome.chart_path {
        Some(path) => println!("Chart:         {}", path.display()),
        None => println!("Chart:         ⚠️ not rendered (see log)"),
    }
}
