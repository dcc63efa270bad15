use crate::care::profile::{CareProfile, DEFAULT_RULE_ID};
use crate::care::rules::{CareRule, TaxonomicKey, BASELINE_RULES, DEFAULT_CARE};
use crate::core::candidate::CandidateSpecies;

/// A rule that can be evaluated against a key in a decision list
pub trait DecisionRule<K: ?Sized> {
    fn applies(&self, key: &K) -> bool;
}

impl DecisionRule<TaxonomicKey> for CareRule {
    fn applies(&self, key: &TaxonomicKey) -> bool {
        self.predicate.matches(key)
    }
}

/// Return the first rule in `rules` that applies to `key`.
///
/// Decision-list semantics: later rules are never evaluated once one fires.
pub fn first_match<'r, K, R>(rules: &'r [R], key: &K) -> Option<&'r R>
where
    K: ?Sized,
    R: DecisionRule<K>,
{
    rules.iter().find(|rule| rule.applies(key))
}

/// Evaluates an ordered care rule table, falling back to the default profile
#[derive(Debug, Clone)]
pub struct CareRuleEngine {
    rules: Vec<CareRule>,
}

impl Default for CareRuleEngine {
    fn default() -> Self {
        Self::with_rules(BASELINE_RULES.to_vec())
    }
}

impl CareRuleEngine {
    /// Create an engine over a custom rule table, evaluated in the given order
    pub fn with_rules(rules: Vec<CareRule>) -> Self {
        Self { rules }
    }

    /// Rules in evaluation order (the default fallback is implicit)
    pub fn rules(&self) -> &[CareRule] {
        &self.rules
    }

    /// Derive a care profile for a candidate. Never fails.
    pub fn derive(&self, candidate: &CandidateSpecies) -> CareProfile {
        let key = TaxonomicKey::new(
            candidate.family.as_deref(),
            candidate.genus.as_deref(),
            candidate.scientific_name.as_deref(),
        );
        self.derive_for_key(&key)
    }

    pub fn derive_for_key(&self, key: &TaxonomicKey) -> CareProfile {
        match first_match(&self.rules, key) {
            Some(rule) => {
                tracing::debug!("Care rule '{}' fired", rule.id);
                rule.care.to_profile(rule.id)
            }
            None => {
                tracing::debug!("No care rule fired; using default profile");
                DEFAULT_CARE.to_profile(DEFAULT_RULE_ID)
            }
        }
    }
}

/// Derive a care profile using the baseline rule table
pub fn derive_care_profile(candidate: &CandidateSpecies) -> CareProfile {
    CareRuleEngine::default().derive(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::care::rules::{FERN, ROSE, SUCCULENT_CACTUS};

    fn candidate(family: Option<&str>, genus: Option<&str>, name: &str) -> CandidateSpecies {
        CandidateSpecies {
            scientific_name: Some(name.to_string()),
            family: family.map(str::to_string),
            genus: genus.map(str::to_string),
            ..CandidateSpecies::default()
        }
    }

    #[test]
    fn test_contradictory_signals_use_earlier_rule() {
        let c = candidate(Some("Cactaceae"), Some("Sansevieria"), "x");
        assert_eq!(derive_care_profile(&c).rule_id, "succulent_cactus");
    }

    #[test]
    fn test_each_baseline_rule_fires() {
        let by_genus = [
            ("Echeveria", "succulent_cactus"),
            ("Dracaena", "snake_plant_dracaena"),
            ("Epipremnum", "pothos_philodendron"),
            ("Philodendron", "pothos_philodendron"),
            ("Rosa", "rose"),
        ];
        for (genus, expected) in by_genus {
            let c = candidate(None, Some(genus), "x");
            assert_eq!(derive_care_profile(&c).rule_id, expected, "for {genus}");
        }

        let fern = candidate(Some("Polypodiaceae"), None, "platycerium");
        assert_eq!(derive_care_profile(&fern).rule_id, "fern");
        let by_name = candidate(None, None, "Boston Fern");
        assert_eq!(derive_care_profile(&by_name).rule_id, "fern");
        let desert_rose = candidate(None, None, "desert rose");
        assert_eq!(derive_care_profile(&desert_rose).rule_id, "rose");
    }

    #[test]
    fn test_empty_taxonomy_is_default() {
        let profile = derive_care_profile(&CandidateSpecies::default());
        assert_eq!(profile.rule_id, "default");
        assert!(profile.is_default());
        assert_eq!(profile.sunlight.level, "Bright indirect light");
    }

    #[test]
    fn test_missing_fields_are_not_wildcards() {
        // Genus-only rules cannot fire without a genus
        let c = candidate(None, None, "sansevieria trifasciata");
        assert_eq!(derive_care_profile(&c).rule_id, "default");
    }

    #[test]
    fn test_unmatched_genus_is_default() {
        let c = candidate(Some("Lamiaceae"), Some("ocimum"), "tulsi ocimum sanctum");
        assert_eq!(derive_care_profile(&c).rule_id, "default");
    }

    #[test]
    fn test_custom_rule_order_changes_result() {
        // Rose before succulent: "rosa" genus wins even with a cactus family
        let engine = CareRuleEngine::with_rules(vec![ROSE, SUCCULENT_CACTUS, FERN]);
        let c = candidate(Some("Cactaceae"), Some("Rosa"), "x");
        assert_eq!(engine.derive(&c).rule_id, "rose");
        assert_eq!(derive_care_profile(&c).rule_id, "succulent_cactus");
    }

    #[test]
    fn test_empty_rule_table_always_defaults() {
        let engine = CareRuleEngine::with_rules(Vec::new());
        let c = candidate(Some("Cactaceae"), Some("Aloe"), "aloe vera");
        assert_eq!(engine.derive(&c).rule_id, DEFAULT_RULE_ID);
    }

    #[test]
    fn test_profile_carries_rule_payload() {
        let c = candidate(None, Some("Aloe"), "aloe vera");
        let profile = derive_care_profile(&c);
        assert_eq!(profile.sunlight.level, "Full sun");
        assert_eq!(profile.soil.soil_type, "Cactus and succulent mix");
    }

    #[test]
    fn test_first_match_generic_reducer() {
        struct Threshold(i64);
        impl DecisionRule<i64> for Threshold {
            fn applies(&self, key: &i64) -> bool {
                *key >= self.0
            }
        }

        let rules = [Threshold(80), Threshold(50), Threshold(0)];
        assert_eq!(first_match(&rules, &90).map(|r| r.0), Some(80));
        assert_eq!(first_match(&rules, &60).map(|r| r.0), Some(50));
        assert_eq!(first_match(&rules, &-1).map(|r| r.0), None);
    }

    #[test]
    fn test_profile_serializes_soil_type_as_type() {
        let profile = derive_care_profile(&CandidateSpecies::default());
        let json = serde_json::to_value(profile).unwrap();
        assert!(json["soil"]["type"].is_string());
        assert_eq!(json["rule_id"], "default");
    }
}
