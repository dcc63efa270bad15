//! The baseline taxonomic care rule table.
//!
//! Evaluation order is part of the contract: a candidate matching several
//! rules receives the first one listed. Reordering [`BASELINE_RULES`] is a
//! breaking change.

use serde::Serialize;

use crate::care::profile::{CareTemplate, DEFAULT_RULE_ID};

/// Case-folded taxonomic fields a rule predicate is evaluated against.
///
/// Missing fields are empty strings, so keywords on them never match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxonomicKey {
    pub family: String,
    pub genus: String,
    pub scientific_name: String,
}

impl TaxonomicKey {
    pub fn new(
        family: Option<&str>,
        genus: Option<&str>,
        scientific_name: Option<&str>,
    ) -> Self {
        Self {
            family: family.unwrap_or_default().to_lowercase(),
            genus: genus.unwrap_or_default().to_lowercase(),
            scientific_name: scientific_name.unwrap_or_default().to_lowercase(),
        }
    }
}

/// Keyword predicate: fires if any listed keyword is a substring of its field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RulePredicate {
    pub family: &'static [&'static str],
    pub genus: &'static [&'static str],
    pub scientific_name: &'static [&'static str],
}

impl RulePredicate {
    #[must_use]
    pub fn matches(&self, key: &TaxonomicKey) -> bool {
        any_contains(&key.family, self.family)
            || any_contains(&key.genus, self.genus)
            || any_contains(&key.scientific_name, self.scientific_name)
    }
}

fn any_contains(field: &str, keywords: &[&str]) -> bool {
    if field.is_empty() {
        return false;
    }
    keywords
        .iter()
        .any(|kw| !kw.is_empty() && field.contains(kw))
}

/// One entry of the decision list: a predicate and the care it recommends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareRule {
    pub id: &'static str,
    pub name: &'static str,
    pub predicate: RulePredicate,
    pub care: CareTemplate,
}

pub const SUCCULENT_CACTUS: CareRule = CareRule {
    id: "succulent_cactus",
    name: "Succulent / Cactus",
    predicate: RulePredicate {
        family: &["cactaceae"],
        genus: &["aloe", "echeveria"],
        scientific_name: &["succulent"],
    },
    care: CareTemplate {
        sunlight_level: "Full sun",
        sunlight_hours: "6-8",
        sunlight_description: "Give it the brightest spot available, such as a south-facing window or a sunny patio.",
        watering_frequency: "Every 2-3 weeks",
        watering_amount: "Deep soak, then dry out",
        watering_description: "Water thoroughly and let the soil dry out completely before watering again. Water even less in winter.",
        soil_type: "Cactus and succulent mix",
        soil_ph_range: "6.0-7.5",
        soil_drainage_note: "Fast-draining mineral mix with coarse sand or perlite. Use a pot with a drainage hole.",
        temperature_range: "18-32°C",
        humidity_range: "10-40%",
        climate_tip: "Protect from frost and keep out of humid rooms.",
    },
};

pub const FERN: CareRule = CareRule {
    id: "fern",
    name: "Fern",
    predicate: RulePredicate {
        family: &["polypodiaceae"],
        genus: &["nephrolepis"],
        scientific_name: &["fern"],
    },
    care: CareTemplate {
        sunlight_level: "Shade to partial shade",
        sunlight_hours: "2-4",
        sunlight_description: "Filtered or indirect light. Direct sun scorches the fronds.",
        watering_frequency: "2-3 times per week",
        watering_amount: "Keep evenly moist",
        watering_description: "Never let the soil dry out completely, but do not leave the roots standing in water.",
        soil_type: "Peat-based potting mix",
        soil_ph_range: "5.0-6.0",
        soil_drainage_note: "Moisture-retentive yet airy. Add bark or perlite to avoid waterlogging.",
        temperature_range: "16-24°C",
        humidity_range: "50-80%",
        climate_tip: "Mist regularly or stand the pot on a pebble tray to raise humidity.",
    },
};

pub const SNAKE_PLANT_DRACAENA: CareRule = CareRule {
    id: "snake_plant_dracaena",
    name: "Snake Plant / Dracaena",
    predicate: RulePredicate {
        family: &[],
        genus: &["sansevieria", "dracaena"],
        scientific_name: &[],
    },
    care: CareTemplate {
        sunlight_level: "Low to bright indirect light",
        sunlight_hours: "2-8",
        sunlight_description: "Tolerates dim corners as well as bright rooms. Avoid harsh midday sun.",
        watering_frequency: "Every 2-4 weeks",
        watering_amount: "Moderate, only when dry",
        watering_description: "Let the soil dry out between waterings. Overwatering causes root rot.",
        soil_type: "Well-draining sandy mix",
        soil_ph_range: "6.0-7.0",
        soil_drainage_note: "Cactus mix or regular potting soil cut with sand. Never let water pool in the pot.",
        temperature_range: "15-30°C",
        humidity_range: "30-50%",
        climate_tip: "Keep away from cold drafts below 10°C.",
    },
};

pub const POTHOS_PHILODENDRON: CareRule = CareRule {
    id: "pothos_philodendron",
    name: "Pothos / Philodendron",
    predicate: RulePredicate {
        family: &[],
        genus: &["epipremnum", "philodendron"],
        scientific_name: &[],
    },
    care: CareTemplate {
        sunlight_level: "Medium to bright indirect light",
        sunlight_hours: "4-6",
        sunlight_description: "Bright, filtered light keeps variegation strong. Survives lower light but grows slower.",
        watering_frequency: "Weekly",
        watering_amount: "Moderate",
        watering_description: "Water when the top 2-3 cm of soil is dry. Drooping leaves signal thirst.",
        soil_type: "Chunky aroid mix",
        soil_ph_range: "6.0-6.5",
        soil_drainage_note: "Potting soil with bark and perlite for airflow around the roots.",
        temperature_range: "18-29°C",
        humidity_range: "40-60%",
        climate_tip: "Wipe the leaves now and then and keep the plant away from cold windows.",
    },
};

pub const ROSE: CareRule = CareRule {
    id: "rose",
    name: "Rose",
    predicate: RulePredicate {
        family: &[],
        genus: &["rosa"],
        scientific_name: &["rose"],
    },
    care: CareTemplate {
        sunlight_level: "Full sun",
        sunlight_hours: "6+",
        sunlight_description: "At least six hours of direct sun a day for good flowering.",
        watering_frequency: "2-3 times per week",
        watering_amount: "Deep watering at the base",
        watering_description: "Water at the base early in the day and keep the foliage dry to prevent fungal disease.",
        soil_type: "Rich loamy soil",
        soil_ph_range: "6.0-6.5",
        soil_drainage_note: "Work in compost. The soil should drain well but hold moisture.",
        temperature_range: "15-28°C",
        humidity_range: "40-60%",
        climate_tip: "Ensure good air circulation and mulch the roots in hot weather.",
    },
};

/// Care recommended when no taxonomic rule fires
pub const DEFAULT_CARE: CareTemplate = CareTemplate {
    sunlight_level: "Bright indirect light",
    sunlight_hours: "4-6",
    sunlight_description: "A bright spot out of direct afternoon sun suits most houseplants.",
    watering_frequency: "Weekly",
    watering_amount: "Moderate",
    watering_description: "Water when the top 2-3 cm of soil feels dry.",
    soil_type: "General-purpose potting mix",
    soil_ph_range: "6.0-7.0",
    soil_drainage_note: "Use a well-draining mix and empty the saucer after watering.",
    temperature_range: "18-27°C",
    humidity_range: "40-60%",
    climate_tip: "Keep away from heaters and air-conditioning vents.",
};

/// Baseline rules in evaluation order
pub const BASELINE_RULES: &[CareRule] = &[
    SUCCULENT_CACTUS,
    FERN,
    SNAKE_PLANT_DRACAENA,
    POTHOS_PHILODENDRON,
    ROSE,
];

/// Serializable summary of the rule table, including the default fallback
#[derive(Debug, Clone, Serialize)]
pub struct RuleSummary {
    pub position: usize,
    pub id: &'static str,
    pub name: &'static str,
    pub family: &'static [&'static str],
    pub genus: &'static [&'static str],
    pub scientific_name: &'static [&'static str],
}

/// Describe `rules` in evaluation order, with the default rule appended last
pub fn summarize(rules: &[CareRule]) -> Vec<RuleSummary> {
    rules
        .iter()
        .enumerate()
        .map(|(i, rule)| RuleSummary {
            position: i + 1,
            id: rule.id,
            name: rule.name,
            family: rule.predicate.family,
            genus: rule.predicate.genus,
            scientific_name: rule.predicate.scientific_name,
        })
        .chain(std::iter::once(RuleSummary {
            position: rules.len() + 1,
            id: DEFAULT_RULE_ID,
            name: "Default",
            family: &[],
            genus: &[],
            scientific_name: &[],
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(family: &str, genus: &str, scientific_name: &str) -> TaxonomicKey {
        TaxonomicKey::new(Some(family), Some(genus), Some(scientific_name))
    }

    #[test]
    fn test_baseline_order() {
        let ids: Vec<_> = BASELINE_RULES.iter().map(|r| r.id).collect();
        let expected = vec![
            "succulent_cactus",
            "fern",
            "snake_plant_dracaena",
            "pothos_philodendron",
            "rose",
        ];
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_taxonomic_key_lowercases_and_defaults() {
        let k = TaxonomicKey::new(Some("Cactaceae"), None, Some("Opuntia FICUS"));
        assert_eq!(k.family, "cactaceae");
        assert_eq!(k.genus, "");
        assert_eq!(k.scientific_name, "opuntia ficus");
    }

    #[test]
    fn test_succulent_predicate_fields() {
        let p = SUCCULENT_CACTUS.predicate;
        assert!(p.matches(&key("cactaceae", "", "")));
        assert!(p.matches(&key("", "echeveria", "")));
        assert!(p.matches(&key("", "", "some succulent")));
        let snake = key("asparagaceae", "sansevieria", "sansevieria trifasciata");
        assert!(!p.matches(&snake));
    }

    #[test]
    fn test_genus_only_rules_ignore_other_fields() {
        // "dracaena" in the scientific name alone does not fire the genus rule
        let genus_rule = SNAKE_PLANT_DRACAENA.predicate;
        assert!(!genus_rule.matches(&key("", "", "dracaena marginata")));
        assert!(genus_rule.matches(&key("", "dracaena", "")));
    }

    #[test]
    fn test_empty_key_matches_no_rule() {
        let empty = TaxonomicKey::default();
        assert!(BASELINE_RULES.iter().all(|r| !r.predicate.matches(&empty)));
    }

    #[test]
    fn test_summarize_appends_default() {
        let summary = summarize(BASELINE_RULES);
        assert_eq!(summary.len(), BASELINE_RULES.len() + 1);
        assert_eq!(summary[0].id, "succulent_cactus");
        assert_eq!(summary.last().unwrap().id, DEFAULT_RULE_ID);
        assert_eq!(summary.last().unwrap().position, 6);
    }
}
