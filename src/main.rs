use anyhow::Result;
use clap::Parser;
use sentiment_tracker::{Analyzer, FetchConfig, Platform};
use tracing::info;

/// Topic mood tracker - scores live posts about a topic and prints the
/// aggregate report as JSON
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Topic to analyze
    topic: String,

    /// Platforms to include (repeatable)
    #[arg(short, long, default_values_t = vec![Platform::Forum, Platform::MicroBlog])]
    platforms: Vec<Platform>,

    /// Upper bound on posts acquired across platforms
    #[arg(short, long, default_value_t = 50)]
    limit: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    info!(
        "Starting sentiment tracker - topic={}, limit={}",
        args.topic, args.limit
    );

    let analyzer = Analyzer::new(FetchConfig::default());
    let report = analyzer
        .analyze(&args.topic, &args.platforms, args.limit)
        .await?;

    info!(
        "Overall mood {} ({}) across {} posts, trend {:?}",
        report.overall.mood_score,
        report.mood_label,
        report.overall.total_posts,
        report.overall.trend
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
