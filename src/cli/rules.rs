use clap::Args;

use crate::care::engine::CareRuleEngine;
use crate::care::profile::{CareProfile, DEFAULT_RULE_ID};
use crate::care::rules::{summarize, RuleSummary, DEFAULT_CARE};
use crate::cli::OutputFormat;

#[derive(Args)]
pub struct RulesArgs {
    /// Show the full care profile for one rule ID
    #[arg(long)]
    pub show: Option<String>,
}

/// Execute rules subcommand
///
/// # Errors
///
/// Returns an error if `--show` names an unknown rule.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RulesArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let engine = CareRuleEngine::default();

    if let Some(id) = &args.show {
        let profile = profile_for(&engine, id)
            .ok_or_else(|| anyhow::anyhow!("Unknown rule ID: {id}"))?;
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&profile)?),
            OutputFormat::Text | OutputFormat::Tsv => print_profile(&profile),
        }
        return Ok(());
    }

    let summary = summarize(engine.rules());
    match format {
        OutputFormat::Text => print_text_rules(&summary),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Tsv => print_tsv_rules(&summary),
    }

    Ok(())
}

fn profile_for(engine: &CareRuleEngine, id: &str) -> Option<CareProfile> {
    if id == DEFAULT_RULE_ID {
        return Some(DEFAULT_CARE.to_profile(DEFAULT_RULE_ID));
    }
    engine
        .rules()
        .iter()
        .find(|rule| rule.id == id)
        .map(|rule| rule.care.to_profile(rule.id))
}

fn describe_conditions(rule: &RuleSummary) -> String {
    let mut parts = Vec::new();
    if !rule.family.is_empty() {
        parts.push(format!("family ~ {}", rule.family.join("|")));
    }
    if !rule.genus.is_empty() {
        parts.push(format!("genus ~ {}", rule.genus.join("|")));
    }
    if !rule.scientific_name.is_empty() {
        parts.push(format!("name ~ {}", rule.scientific_name.join("|")));
    }
    if parts.is_empty() {
        "always".to_string()
    } else {
        parts.join(" OR ")
    }
}

fn print_text_rules(summary: &[RuleSummary]) {
    println!("\nCare rules (first match wins):\n");
    for rule in summary {
        println!("{:>3}. {:<22} {}", rule.position, rule.id, rule.name);
        println!("     {}", describe_conditions(rule));
    }
    println!();
}

fn print_tsv_rules(summary: &[RuleSummary]) {
    println!("position\tid\tname\tfamily\tgenus\tscientific_name");
    for rule in summary {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            rule.position,
            rule.id,
            rule.name,
            rule.family.join(","),
            rule.genus.join(","),
            rule.scientific_name.join(","),
        );
    }
}

fn print_profile(profile: &CareProfile) {
    println!("\nRule: {}", profile.rule_id);
    println!(
        "   Sunlight: {} ({} h/day)",
        profile.sunlight.level, profile.sunlight.hours_per_day
    );
    println!(
        "   Watering: {} ({})",
        profile.watering.frequency, profile.watering.amount
    );
    println!(
        "   Soil: {} (pH {})",
        profile.soil.soil_type, profile.soil.ph_range
    );
    println!(
        "   Climate: {}, humidity {}",
        profile.climate.temperature_range, profile.climate.humidity_range
    );
    println!();
}
