use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::store::ProductCatalog;
use crate::cli::{load_catalog, OutputFormat};

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List products in catalog order
    List {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Only show products with stock available
        #[arg(long)]
        in_stock: bool,
    },

    /// Export the catalog as versioned JSON
    Export {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Execute catalog subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the export cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { catalog, in_stock } => {
            let catalog = load_catalog(catalog.as_deref())?;
            if verbose {
                eprintln!("Loaded catalog with {} products", catalog.len());
            }
            list_products(&catalog, in_stock, format)
        }
        CatalogCommands::Export { catalog, output } => {
            let catalog = load_catalog(catalog.as_deref())?;
            let json = catalog.to_json()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    eprintln!("Exported {} products to {}", catalog.len(), path.display());
                }
                None => println!("{json}"),
            }
            Ok(())
        }
    }
}

fn list_products(
    catalog: &ProductCatalog,
    in_stock: bool,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let products: Vec<_> = catalog
        .products()
        .iter()
        .filter(|p| !in_stock || p.in_stock())
        .collect();

    match format {
        OutputFormat::Text => {
            println!("\nCatalog ({} products):\n", products.len());
            for (i, p) in products.iter().enumerate() {
                println!(
                    "{:>3}. {:<28} {:>8.2}  stock {:>4}  [{}]",
                    i + 1,
                    p.name,
                    p.price,
                    p.stock,
                    p.id
                );
            }
            println!();
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&products)?),
        OutputFormat::Tsv => {
            println!("id\tname\tprice\tstock\timages");
            for p in products {
                println!(
                    "{}\t{}\t{:.2}\t{}\t{}",
                    p.id,
                    p.name,
                    p.price,
                    p.stock,
                    p.images.join(",")
                );
            }
        }
    }

    Ok(())
}
