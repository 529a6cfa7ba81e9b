mod analyze;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "nichepulse-cli")]
#[command(about = "Rank trending topics against a creator niche")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one ranking pass and print the results.
    Analyze(analyze::AnalyzeArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze(args) => analyze::run(args).await,
    }
}
