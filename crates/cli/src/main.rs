mod config;
mod documents;
mod output;
mod pages;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{AppConfig, DocumentsConfig, PagesConfig};

#[derive(Parser)]
#[command(
    name = "promo-extract",
    version,
    about = "Extract promotional title hierarchies from civil-service title specifications"
)]
struct Cli {
    /// JSON config file layered over the defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract from plain-text specification documents in a directory
    Documents(DocumentsArgs),
    /// Scrape spec pages linked from the title index
    Pages(PagesArgs),
}

#[derive(Args)]
struct DocumentsArgs {
    #[arg(long)]
    dir: Option<PathBuf>,
    #[arg(long)]
    specs_out: Option<PathBuf>,
    #[arg(long)]
    relationships_out: Option<PathBuf>,
    /// Descend into subdirectories
    #[arg(long)]
    recursive: bool,
}

#[derive(Args)]
struct PagesArgs {
    #[arg(long)]
    index_url: Option<String>,
    #[arg(long)]
    base_url: Option<String>,
    #[arg(long)]
    relationships_out: Option<PathBuf>,
    /// Stop after this many spec pages
    #[arg(long)]
    limit: Option<usize>,
}

impl DocumentsArgs {
    fn apply(&self, config: &mut DocumentsConfig) {
        if let Some(dir) = &self.dir {
            config.loader.dir = dir.clone();
        }
        if let Some(path) = &self.specs_out {
            config.specs_data_out = path.clone();
        }
        if let Some(path) = &self.relationships_out {
            config.relationships_out = path.clone();
        }
        if self.recursive {
            config.loader.recursive = true;
        }
    }
}

impl PagesArgs {
    fn apply(&self, config: &mut PagesConfig) {
        if let Some(url) = &self.index_url {
            config.fetch.index_url = url.clone();
        }
        if let Some(url) = &self.base_url {
            config.fetch.base_url = url.clone();
        }
        if let Some(path) = &self.relationships_out {
            config.relationships_out = path.clone();
        }
        if self.limit.is_some() {
            config.limit = self.limit;
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let mut config = AppConfig::load(cli.config.as_deref())?;

    let summary = match &cli.command {
        Command::Documents(args) => {
            args.apply(&mut config.documents);
            documents::run(&config.documents).await?
        }
        Command::Pages(args) => {
            args.apply(&mut config.pages);
            pages::run(&config.pages).await?
        }
    };

    info!(
        processed = summary.processed,
        failed = summary.failed,
        with_parents = summary.with_parents,
        "Extraction complete"
    );

    Ok(())
}

/// Fresh scratch directory for tests
#[cfg(test)]
pub(crate) fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("promo_cli_{}_{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
