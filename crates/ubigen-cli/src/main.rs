//! ubigen — gene-set ubiquity report from the Ubigen API.
//! Entry point for the CLI binary.

mod config;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ubigen_api::run_report;
use ubigen_common::GeneSet;

#[derive(Parser, Debug)]
#[command(
    name = "ubigen",
    version,
    about = "Query the Ubigen API for the ubiquity of a gene set"
)]
struct Cli {
    /// Config file (defaults to $UBIGEN_CONFIG, then ./ubigen.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Gene identifiers; defaults to the configured set or the glycolysis genes
    genes: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ubigen_cli=info,ubigen_api=info,warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let mut config = config::Config::load(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }

    let genes = if cli.genes.is_empty() {
        config.gene_set()
    } else {
        GeneSet::parse(&cli.genes.join(" "))
    };

    let client = config.build_client()?;
    info!(
        "Querying {} for {} genes",
        config.api.base_url,
        genes.len()
    );

    run_report(&client, &genes, |line| println!("{}", line))
        .await
        .context("Ubigen report failed")?;

    Ok(())
}
