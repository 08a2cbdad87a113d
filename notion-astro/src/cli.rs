///
/// This module implements the CLI interface for notion-astro: command parsing,
/// wiring the Notion client into the core export pipeline, and user-visible output.
///
/// All conversion logic lives in the [`notion-astro-core`] crate.
/// This module is strictly CLI glue.
///
/// ## How To Use
/// - For command-line users: run the installed `notion-astro` binary with `--help`.
/// - For programmatic/integration use: call [`run`] with a constructed [`Cli`].
///
/// [`notion-astro-core`]: ../../notion-astro-core/
use crate::load_config::load_config;
use crate::notion::NotionClient;
use anyhow::Result;
use clap::{Parser, Subcommand};
use notion_astro_core::export::export_pages;
use std::path::PathBuf;

/// CLI for notion-astro: export published Notion pages as Astro Markdown.
#[derive(Parser)]
#[clap(
    name = "notion-astro",
    version,
    about = "Export published Notion database pages as Markdown for an Astro site"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert every published page of the database and write it to the output directory
    Export {
        /// Path to an optional YAML config file
        #[clap(long)]
        config: Option<PathBuf>,
        /// Directory to write Markdown files into (overrides config and OUTPUT_DIR)
        #[clap(long)]
        output_dir: Option<PathBuf>,
    },
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    // Emit a top-level 'trace_initialised' event at the very start
    tracing::info!("trace_initialised");

    match cli.command {
        Commands::Export { config, output_dir } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(output_dir) = output_dir {
                config.export.output_dir = output_dir;
            }
            tracing::info!(command = "export", "Starting export");

            let client = NotionClient::with_base_url(config.token, config.api_base_url);
            match export_pages(&client, &client, &config.export).await {
                Ok(report) => {
                    for page in &report.written {
                        println!("Converted page {} -> {}", page.page_id, page.path.display());
                    }
                    for page in &report.failed {
                        eprintln!("Error converting page {}: {}", page.page_id, page.reason);
                    }
                    println!(
                        "Export complete: {} written, {} failed.",
                        report.written.len(),
                        report.failed.len()
                    );
                    tracing::info!(command = "export", ?report, "Export complete");
                    Ok(())
                }
                Err(e) => {
                    tracing::error!(command = "export", error = %e, "Export failed");
                    Err(anyhow::Error::new(e).context("Export failed"))
                }
            }
        }
    }
}
