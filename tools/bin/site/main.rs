use std::{io::ErrorKind, path::PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::{Level, info, instrument, warn};

use common::{
    catalog::CATALOG,
    config::{SiteConfig, config_path, parse_config},
    sitemap,
};

mod pages;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// write sitemap.xml covering the fixed pages, categories and article pages on disk
    Sitemap {
        /// output file, defaults to sitemap.xml in the site root
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// print the compiled article catalog as json
    Catalog,

    /// compare the catalog against the article pages on disk
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let config = read_config(config_path(cli.config)).await?;

    match cli.command {
        Commands::Sitemap { output } => {
            let output = output.unwrap_or_else(|| config.sitemap_path());

            let articles = pages::article_urls(&config.site_root, &config.categories)?;
            if articles.is_empty() {
                warn!("no article pages under {}", config.site_root.display());
            }
            let entries = sitemap::entries(&config, &articles);
            let doc = sitemap::render(&entries, Local::now().date_naive());

            tokio::fs::write(&output, doc)
                .await
                .with_context(|| format!("failed to write {}", output.display()))?;

            info!("wrote {} urls to {}", entries.len(), output.display());
        }
        Commands::Catalog => {
            println!("{}", serde_json::to_string_pretty(CATALOG)?);
        }
        Commands::Check => {
            let report = pages::check_site(&config.site_root, CATALOG)?;

            for url in &report.missing {
                println!("missing: {url}");
            }
            for path in &report.uncatalogued {
                println!("uncatalogued: {}", path.display());
            }

            if !report.missing.is_empty() {
                anyhow::bail!("{} catalogued articles have no page", report.missing.len());
            }

            info!("catalog check passed");
        }
    }

    Ok(())
}

#[instrument(level=Level::DEBUG)]
async fn read_config(path: PathBuf) -> Result<SiteConfig> {
    match tokio::fs::read_to_string(&path).await {
        Ok(doc) => parse_config(&doc).with_context(|| format!("in {}", path.display())),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!("no config at {}, using defaults", path.display());
            Ok(SiteConfig::default())
        }
        Err(err) => Err(err).with_context(|| format!("failed to read {}", path.display())),
    }
}
