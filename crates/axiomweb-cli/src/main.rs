//! AxiomWeb CLI
//!
//! Thin wrapper around axiomweb-core for building the static site.
//!
//! ## Usage
//!
//! ```bash
//! # Copy passthrough assets into _site
//! axiomweb build
//!
//! # Remove the output directory
//! axiomweb clean
//!
//! # Inspect the builtin portfolio catalog
//! axiomweb catalog list
//! axiomweb catalog list --json
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use axiomweb_core::{Catalog, SiteConfig};

/// AxiomWeb - static marketing site builder
#[derive(Parser)]
#[command(name = "axiomweb")]
#[command(version = "0.1.0")]
#[command(about = "AxiomWeb - static marketing site builder")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Project root containing the static assets (default: current directory)
    #[arg(short, long, global = true)]
    input_dir: Option<PathBuf>,

    /// Output directory (default: <input>/_site)
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy the passthrough assets into the output directory
    Build,

    /// Remove the output directory
    Clean,

    /// Portfolio catalog inspection
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List the builtin portfolio entries
    List {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let input_dir = match cli.input_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let mut config = SiteConfig::new(&input_dir);
    if let Some(output_dir) = cli.output_dir {
        config = config.with_output_dir(output_dir);
    }

    match cli.command {
        Commands::Build => {
            let report = config.build()?;
            println!("Site built into {}", config.output_dir().display());
            println!("  Files copied: {}", report.copied_files);
            for rel in &report.skipped {
                println!("  Skipped (missing): {}", rel.display());
            }
        }
        Commands::Clean => {
            config.clean()?;
            println!("Removed {}", config.output_dir().display());
        }
        Commands::Catalog { action } => match action {
            CatalogAction::List { json } => {
                let catalog = Catalog::builtin();
                if json {
                    let entries: Vec<_> = catalog.entries().collect();
                    println!("{}", serde_json::to_string_pretty(&entries)?);
                } else {
                    println!("Portfolio catalog ({} entries):", catalog.len());
                    for entry in catalog.entries() {
                        println!("  ID: {}", entry.id);
                        println!("    Title: {}", entry.title);
                        println!("    Image: {}", entry.image);
                        println!("    Link:  {}", entry.link);
                    }
                }
            }
        },
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();
}
