use std::path::PathBuf;

use clap::Args;

use crate::care::engine::CareRuleEngine;
use crate::cli::{load_catalog, OutputFormat};
use crate::core::candidate::CandidateSpecies;
use crate::core::types::TierThresholds;
use crate::matching::engine::MatchStatus;
use crate::parsing::identification::{parse_identification_file, parse_identification_text};
use crate::resolution::{IdentificationOutcome, Resolver};

#[derive(Args)]
pub struct ResolveArgs {
    /// Identification JSON file (array of candidates, or object with `candidates`)
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    // === Tier threshold options ===
    /// Minimum confidence for the HIGH tier (0-100, default 80)
    #[arg(long, default_value = "80", value_parser = clap::value_parser!(u32).range(0..=100))]
    pub high_threshold: u32,

    /// Minimum confidence for the MEDIUM tier (0-100, default 50)
    #[arg(long, default_value = "50", value_parser = clap::value_parser!(u32).range(0..=100))]
    pub medium_threshold: u32,
}

/// Execute resolve subcommand
///
/// # Errors
///
/// Returns an error if the input or catalog cannot be read, or the thresholds are inconsistent.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ResolveArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let thresholds = thresholds_from_args(&args)?;
    let candidates = parse_input(&args)?;

    if verbose {
        eprintln!("Parsed {} candidate(s) from input", candidates.len());
    }

    let catalog = load_catalog(args.catalog.as_deref())?;

    if verbose {
        eprintln!("Loaded catalog with {} products", catalog.len());
    }

    if catalog.is_empty() {
        eprintln!("Warning: Catalog is empty, no products to match against.");
    }

    let resolver = Resolver::new()
        .with_thresholds(thresholds)
        .with_care_engine(CareRuleEngine::default());
    let outcome = resolver.resolve(&candidates, &catalog);

    match format {
        OutputFormat::Text => print_text_outcome(&outcome, verbose),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputFormat::Tsv => print_tsv_outcome(&outcome),
    }

    Ok(())
}

fn thresholds_from_args(args: &ResolveArgs) -> anyhow::Result<TierThresholds> {
    if args.medium_threshold > args.high_threshold {
        anyhow::bail!(
            "--medium-threshold ({}) must not exceed --high-threshold ({})",
            args.medium_threshold,
            args.high_threshold
        );
    }
    Ok(TierThresholds {
        high: i64::from(args.high_threshold),
        medium: i64::from(args.medium_threshold),
    })
}

fn parse_input(args: &ResolveArgs) -> anyhow::Result<Vec<CandidateSpecies>> {
    use std::io::{self, Read};

    // Handle stdin
    if args.input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(parse_identification_text(&buffer)?);
    }

    Ok(parse_identification_file(&args.input)?)
}

fn print_text_outcome(outcome: &IdentificationOutcome, verbose: bool) {
    let Some(candidate) = &outcome.candidate else {
        println!("\nNo candidates were identified.\n");
        return;
    };

    println!("\nTop candidate: {}", candidate.display_name());
    if let Some(tier) = outcome.tier {
        println!("   Confidence: {} ({tier})", candidate.clamped_confidence());
    }
    if verbose {
        if let Some(genus) = &candidate.genus {
            println!("   Genus: {genus}");
        }
        if let Some(family) = &candidate.family {
            println!("   Family: {family}");
        }
        if !candidate.common_names.is_empty() {
            println!("   Common names: {}", candidate.common_names.join(", "));
        }
    }

    let m = &outcome.product_match;
    match (&m.status, &m.product) {
        (MatchStatus::Matched, Some(product)) => {
            println!("\nProduct: {} ({})", product.name, product.id);
            if let Some(term) = &m.matched_term {
                println!("   Matched term: {term}");
            }
            println!("   Price: {:.2}", product.price);
            if product.in_stock() {
                println!("   Stock: {}", product.stock);
            } else {
                println!("   Stock: OUT OF STOCK");
            }
        }
        (MatchStatus::Skipped, _) => {
            println!("\nProduct: not searched (top candidate has no scientific name)");
        }
        _ => println!("\nProduct: no matching product in the catalog"),
    }

    if let Some(care) = &outcome.care {
        println!("\nCare (rule: {})", care.rule_id);
        println!(
            "   Sunlight: {}, {} h/day",
            care.sunlight.level, care.sunlight.hours_per_day
        );
        println!("     {}", care.sunlight.description);
        println!(
            "   Watering: {}, {}",
            care.watering.frequency, care.watering.amount
        );
        println!("     {}", care.watering.description);
        println!(
            "   Soil: {}, pH {}",
            care.soil.soil_type, care.soil.ph_range
        );
        println!("     {}", care.soil.drainage_note);
        println!(
            "   Climate: {}, humidity {}",
            care.climate.temperature_range, care.climate.humidity_range
        );
        println!("     {}", care.climate.tip);
    }

    println!();
}

fn print_tsv_outcome(outcome: &IdentificationOutcome) {
    println!(
        "candidate\tconfidence\ttier\tstatus\tproduct_id\tproduct_name\tmatched_term\trule_id"
    );

    let candidate = outcome.candidate.as_ref();
    let m = &outcome.product_match;
    println!(
        "{}\t{}\t{}\t{:?}\t{}\t{}\t{}\t{}",
        candidate.map_or("", CandidateSpecies::display_name),
        candidate.map_or(String::new(), |c| c.clamped_confidence().to_string()),
        outcome.tier.map_or(String::new(), |t| t.to_string()),
        m.status,
        m.product.as_ref().map_or("", |p| p.id.0.as_str()),
        m.product.as_ref().map_or("", |p| p.name.as_str()),
        m.matched_term.as_deref().unwrap_or(""),
        outcome.care.as_ref().map_or("", |c| c.rule_id.as_str()),
    );
}
