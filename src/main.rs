use clap::Parser;
use tracing_subscriber::EnvFilter;

use plant_resolver::{cli, web};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("plant_resolver=debug,info")
    } else {
        EnvFilter::new("plant_resolver=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Resolve(args) => {
            cli::resolve::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Rules(args) => {
            cli::rules::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Catalog(args) => {
            cli::catalog::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Serve(args) => {
            web::server::run(args)?;
        }
    }

    Ok(())
}
