use serde::{Deserialize, Serialize};

/// Unique identifier for a product in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lowest confidence score accepted from the identification service
pub const MIN_CONFIDENCE: i64 = 0;

/// Highest confidence score accepted from the identification service
pub const MAX_CONFIDENCE: i64 = 100;

/// Clamp a raw confidence score into `[MIN_CONFIDENCE, MAX_CONFIDENCE]`
#[must_use]
pub fn clamp_confidence(score: i64) -> i64 {
    score.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

/// Boundaries between confidence tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    /// Scores at or above this are `High`
    pub high: i64,
    /// Scores at or above this (and below `high`) are `Medium`
    pub medium: i64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            high: 80,
            medium: 50,
        }
    }
}

/// Discrete confidence tier for an identification candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    /// Classify a raw score with the default thresholds
    #[must_use]
    pub fn from_score(score: i64) -> Self {
        Self::from_score_with(score, &TierThresholds::default())
    }

    /// Classify a raw score with custom thresholds.
    ///
    /// The score is clamped to `[0, 100]` before comparison.
    #[must_use]
    pub fn from_score_with(score: i64, thresholds: &TierThresholds) -> Self {
        let score = clamp_confidence(score);
        if score >= thresholds.high {
            Self::High
        } else if score >= thresholds.medium {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Ordinal rank: `Low` = 0, `Medium` = 1, `High` = 2
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }
}

impl std::fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Classify a confidence score into a tier
///
/// Total over all integers: out-of-range scores are clamped first.
///
/// # Examples
///
/// ```
/// use plant_resolver::core::types::{classify, ConfidenceTier};
///
/// assert_eq!(classify(80), ConfidenceTier::High);
/// assert_eq!(classify(79), ConfidenceTier::Medium);
/// assert_eq!(classify(-5), ConfidenceTier::Low);
/// ```
#[must_use]
pub fn classify(confidence: i64) -> ConfidenceTier {
    ConfidenceTier::from_score(confidence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(classify(49), ConfidenceTier::Low);
        assert_eq!(classify(50), ConfidenceTier::Medium);
        assert_eq!(classify(79), ConfidenceTier::Medium);
        assert_eq!(classify(80), ConfidenceTier::High);
    }

    #[test]
    fn test_out_of_range_scores_are_clamped() {
        assert_eq!(classify(-40), ConfidenceTier::Low);
        assert_eq!(classify(i64::MIN), ConfidenceTier::Low);
        assert_eq!(classify(250), ConfidenceTier::High);
        assert_eq!(classify(i64::MAX), ConfidenceTier::High);
    }

    #[test]
    fn test_classifier_is_monotonic() {
        for a in 0..=100 {
            for b in a..=100 {
                assert!(
                    classify(a).rank() <= classify(b).rank(),
                    "classify({a}) ranked above classify({b})"
                );
            }
        }
    }

    #[test]
    fn test_tier_ordering_matches_rank() {
        assert!(ConfidenceTier::Low < ConfidenceTier::Medium);
        assert!(ConfidenceTier::Medium < ConfidenceTier::High);
        assert_eq!(ConfidenceTier::High.rank(), 2);
    }

    #[test]
    fn test_custom_thresholds() {
        let strict = TierThresholds {
            high: 95,
            medium: 70,
        };
        assert_eq!(
            ConfidenceTier::from_score_with(90, &strict),
            ConfidenceTier::Medium
        );
        assert_eq!(
            ConfidenceTier::from_score_with(69, &strict),
            ConfidenceTier::Low
        );
        assert_eq!(
            ConfidenceTier::from_score_with(100, &strict),
            ConfidenceTier::High
        );
    }

    #[test]
    fn test_tier_serializes_snake_case() {
        let json = serde_json::to_string(&ConfidenceTier::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}
