//! The `analyze` command: one ranking pass from the terminal.

use clap::Args;

use nichepulse_pipeline::{AnalyzeOutcome, BackendCorpus, PipelineOptions, TrendPipeline};
use nichepulse_sources::{NicheClient, SnippetClient, TrendsClient};

#[derive(Debug, Args)]
pub(crate) struct AnalyzeArgs {
    /// Comma-separated niche keywords, e.g. "ai tools,productivity".
    #[arg(long, value_delimiter = ',', required = true)]
    pub keywords: Vec<String>,

    /// Print the full outcome as pretty JSON instead of a summary.
    #[arg(long)]
    pub json: bool,
}

pub(crate) async fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let config = nichepulse_core::load_app_config()?;

    let trends = TrendsClient::new(
        &config.backend_base_url,
        config.backend_timeout_secs,
        &config.user_agent,
    )?;
    let snippets = SnippetClient::new(
        &config.backend_base_url,
        config.snippet_timeout_secs,
        &config.user_agent,
    )?;
    let niche = NicheClient::new(
        &config.backend_base_url,
        config.backend_timeout_secs,
        &config.user_agent,
    )?;

    let pipeline = TrendPipeline::new(
        BackendCorpus::new(trends, config.subreddits.clone()),
        snippets,
        niche,
        config.ranking.clone(),
        PipelineOptions::from_app_config(&config),
    );

    let outcome = pipeline.analyze(&args.keywords).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_summary(&outcome);
    }
    Ok(())
}

fn print_summary(outcome: &AnalyzeOutcome) {
    println!(
        "{} topics trending now for: {}",
        outcome.trends.len(),
        outcome.niche.description
    );
    println!(
        "analyzed {} corpus items, {} matched the niche",
        outcome.total_analyzed, outcome.matched
    );
    println!();

    for (i, enriched) in outcome.trends.iter().enumerate() {
        println!(
            "{:>2}. [{:>6.1}] {}",
            i + 1,
            enriched.trend.relevance_score,
            enriched.trend.item.topic()
        );
        if enriched.enrichment_failed {
            println!("     (conversation snippets unavailable)");
        }
        for snippet in &enriched.snippets {
            println!("     - {}", snippet.text);
        }
    }
}
