use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod generator;
mod llm;
mod types;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();

    cli::run(args).await
}
