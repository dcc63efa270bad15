//! Command-line interface for plant-resolver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **resolve**: Resolve identification candidates to a product and care profile
//! - **rules**: List the care rule table in evaluation order
//! - **catalog**: List products in the catalog
//! - **serve**: Start the HTTP API
//!
//! ## Usage
//!
//! ```text
//! # Resolve against the embedded sample catalog
//! plant-resolver resolve candidates.json
//!
//! # Pipe from the identification client
//! identify-client photo.jpg | plant-resolver resolve -
//!
//! # JSON output against a custom catalog
//! plant-resolver resolve candidates.json --catalog products.json --format json
//!
//! # Start the API
//! plant-resolver serve --port 8080
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::catalog::store::ProductCatalog;

pub mod catalog;
pub mod resolve;
pub mod rules;

#[derive(Parser)]
#[command(name = "plant-resolver")]
#[command(author = "plant-resolver developers")]
#[command(version)]
#[command(about = "Resolve plant identifications to catalog products and care profiles")]
#[command(
    long_about = "plant-resolver takes the ranked candidate species returned by an image identification service and:\n- Classifies the top candidate's confidence\n- Matches it to a product in the catalog\n- Recommends light, water, soil and climate care from its taxonomy"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve identification candidates against the catalog
    Resolve(resolve::ResolveArgs),

    /// Show the care rule table
    Rules(rules::RulesArgs),

    /// Inspect the product catalog
    Catalog(catalog::CatalogArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,

    /// Path to custom catalog file (defaults to the embedded sample catalog)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load a catalog from `path`, or the embedded sample catalog when absent
///
/// # Errors
///
/// Returns an error if the catalog file cannot be read or is invalid.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<ProductCatalog> {
    let catalog = match path {
        Some(path) => ProductCatalog::load_from_file(path)?,
        None => ProductCatalog::load_embedded()?,
    };
    tracing::debug!("Loaded catalog with {} products", catalog.len());
    Ok(catalog)
}
