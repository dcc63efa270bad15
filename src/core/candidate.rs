use serde::{Deserialize, Deserializer, Serialize};

use crate::core::types::{clamp_confidence, ConfidenceTier};

/// A candidate species returned by the identification service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSpecies {
    /// Scientific name used for catalog matching
    #[serde(default, alias = "scientificName")]
    pub scientific_name: Option<String>,

    /// Full scientific name with authorship (display only)
    #[serde(default, alias = "scientificNameFull")]
    pub scientific_name_full: Option<String>,

    #[serde(default)]
    pub genus: Option<String>,

    #[serde(default)]
    pub family: Option<String>,

    /// Common names in the order supplied by the service
    #[serde(
        default,
        alias = "commonNames",
        deserialize_with = "deserialize_common_names"
    )]
    pub common_names: Vec<String>,

    /// Raw confidence score, nominally 0-100
    #[serde(default, deserialize_with = "deserialize_confidence")]
    pub confidence: i64,
}

impl CandidateSpecies {
    pub fn new(scientific_name: impl Into<String>, confidence: i64) -> Self {
        Self {
            scientific_name: Some(scientific_name.into()),
            confidence,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_genus(mut self, genus: impl Into<String>) -> Self {
        self.genus = Some(genus.into());
        self
    }

    #[must_use]
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    #[must_use]
    pub fn with_common_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.common_names = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_full_name(mut self, full: impl Into<String>) -> Self {
        self.scientific_name_full = Some(full.into());
        self
    }

    /// The scientific name if present and not blank
    #[must_use]
    pub fn usable_scientific_name(&self) -> Option<&str> {
        self.scientific_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Confidence clamped to `[0, 100]`
    #[must_use]
    pub fn clamped_confidence(&self) -> i64 {
        clamp_confidence(self.confidence)
    }

    #[must_use]
    pub fn tier(&self) -> ConfidenceTier {
        ConfidenceTier::from_score(self.confidence)
    }

    /// Best name for display: full name, then scientific name, then first common name
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.scientific_name_full
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.usable_scientific_name())
            .or_else(|| self.common_names.first().map(String::as_str))
            .unwrap_or("<unnamed>")
    }
}

/// Accept any JSON number (or null) for a confidence score.
///
/// Floats are rounded to the nearest integer and saturate at the `i64` bounds.
fn deserialize_confidence<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(value.map_or(0, |n| {
        if let Some(i) = n.as_i64() {
            i
        } else if n.as_u64().is_some() {
            i64::MAX
        } else {
            #[allow(clippy::cast_possible_truncation)] // `as` saturates
            n.as_f64().map_or(0, |f| f.round() as i64)
        }
    }))
}

fn deserialize_common_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let names = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(names.unwrap_or_default())
}
