use serde::Serialize;

use crate::care::engine::CareRuleEngine;
use crate::care::profile::CareProfile;
use crate::catalog::store::ProductCatalog;
use crate::core::candidate::CandidateSpecies;
use crate::core::types::{ConfidenceTier, TierThresholds};
use crate::matching::engine::{CatalogMatcher, MatchResult};

/// Composed result of one identification request.
///
/// Every field is always serialized; absent values are `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdentificationOutcome {
    /// Tier of the top candidate's confidence
    pub tier: Option<ConfidenceTier>,

    #[serde(rename = "match")]
    pub product_match: MatchResult,

    /// Care for the top candidate, independent of the match outcome
    pub care: Option<CareProfile>,

    /// The top candidate, echoed for display
    pub candidate: Option<CandidateSpecies>,
}

/// Runs classifier, matcher and care engine in sequence
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    thresholds: TierThresholds,
    care: CareRuleEngine,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_thresholds(mut self, thresholds: TierThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    #[must_use]
    pub fn with_care_engine(mut self, care: CareRuleEngine) -> Self {
        self.care = care;
        self
    }

    pub fn thresholds(&self) -> &TierThresholds {
        &self.thresholds
    }

    pub fn care_engine(&self) -> &CareRuleEngine {
        &self.care
    }

    /// Tier for a candidate under this resolver's thresholds
    pub fn classify(&self, candidate: &CandidateSpecies) -> ConfidenceTier {
        ConfidenceTier::from_score_with(candidate.confidence, &self.thresholds)
    }

    pub fn resolve(
        &self,
        candidates: &[CandidateSpecies],
        catalog: &ProductCatalog,
    ) -> IdentificationOutcome {
        let top = candidates.first();

        let tier = top.map(|c| self.classify(c));
        let product_match = CatalogMatcher::new(catalog).resolve(candidates);
        let care = top.map(|c| self.care.derive(c));

        tracing::debug!(
            "Resolved {} candidate(s): tier={:?}, match={:?}, care={:?}",
            candidates.len(),
            tier,
            product_match.status,
            care.as_ref().map(|p| p.rule_id.as_str())
        );

        IdentificationOutcome {
            tier,
            product_match,
            care,
            candidate: top.cloned(),
        }
    }
}

/// Resolve an identification with default thresholds and the baseline rules
pub fn resolve_identification(
    candidates: &[CandidateSpecies],
    catalog: &ProductCatalog,
) -> IdentificationOutcome {
    Resolver::default().resolve(candidates, catalog)
}
