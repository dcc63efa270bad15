use std::collections::HashSet;

use crate::core::candidate::CandidateSpecies;

/// Ordered, deduplicated search terms derived from one candidate.
///
/// The scientific name comes first, followed by common names in source
/// order. All terms are lowercased and trimmed; blank terms are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerms {
    terms: Vec<String>,
}

impl SearchTerms {
    /// Build terms for a candidate.
    ///
    /// Returns `None` when the candidate has no usable scientific name.
    pub fn from_candidate(candidate: &CandidateSpecies) -> Option<Self> {
        let scientific = candidate.usable_scientific_name()?;

        let mut seen: HashSet<String> = HashSet::new();
        let mut terms = Vec::with_capacity(1 + candidate.common_names.len());

        let common = candidate.common_names.iter().map(String::as_str);
        for term in std::iter::once(scientific).chain(common) {
            let term = term.trim().to_lowercase();
            if term.is_empty() {
                continue;
            }
            if seen.insert(term.clone()) {
                terms.push(term);
            }
        }

        Some(Self { terms })
    }

    /// Terms in priority order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
