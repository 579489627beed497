//! FaultMart log analyzer
//!
//! Feeds an application log file to an OpenAI-compatible model and writes a
//! markdown incident report. Built to run as a CI step after the demo
//! backend has produced its failure telemetry.

#![allow(clippy::print_stdout)]

mod client;
mod error;
mod prompt;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::client::AnalysisClient;
use crate::error::AnalyzerError;

/// AI-powered error log analysis for the FaultMart demo backend
#[derive(Parser)]
#[command(name = "faultmart-analyze")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the log file to analyze
    #[arg(short, long, default_value = "logs/application.log")]
    log_file: PathBuf,

    /// OpenAI-compatible API base URL
    #[arg(long, default_value = "https://api.openai.com/v1")]
    base_url: String,

    /// Model to query
    #[arg(short, long, default_value = "gpt-4o-mini")]
    model: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "faultmart_analyze=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    println!("🚀 Starting AI-powered error log analysis...");

    match run(&cli).await {
        Ok(()) => {
            println!("\n✅ Error analysis completed successfully!");
            println!("📋 The AI has provided actionable insights to help resolve the issues.");
            ExitCode::SUCCESS
        }
        Err(AnalyzerError::MissingApiKey) => {
            println!("❌ Error: OPENAI_API_KEY environment variable is not set!");
            println!("   Please set your OpenAI API key:");
            println!("   export OPENAI_API_KEY='your-api-key-here'");
            ExitCode::FAILURE
        }
        Err(e) => {
            println!("❌ Error during analysis: {e}");
            println!("\n❌ Error analysis failed!");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), AnalyzerError> {
    let api_key =
        std::env::var("OPENAI_API_KEY").map_err(|_| AnalyzerError::MissingApiKey)?;

    let logs = report::load_logs(&cli.log_file)?;
    let prompt = prompt::build_prompt(&logs);

    println!("🤖 Generating AI analysis...");
    let client = AnalysisClient::new(&cli.base_url, api_key, &cli.model)?;
    let analysis = client.query(prompt).await?;

    let output_file = report::write_report(&cli.log_file, &analysis)?;
    println!("✅ Analysis complete! Report saved to: {}", output_file.display());

    report::print_analysis(&analysis);
    Ok(())
}
