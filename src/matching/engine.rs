use serde::Serialize;

use crate::catalog::store::ProductCatalog;
use crate::core::candidate::CandidateSpecies;
use crate::core::product::CatalogEntry;
use crate::matching::terms::SearchTerms;

/// Outcome of resolving a candidate against the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// A product matched one of the candidate's search terms
    Matched,
    /// The candidate was searchable but no product matched
    NotFound,
    /// No candidate with a usable scientific name was supplied
    Skipped,
}

/// Result of matching the top candidate against the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub status: MatchStatus,

    /// The matched product; present iff `status` is `Matched`
    pub product: Option<CatalogEntry>,

    /// The search term that produced the match
    pub matched_term: Option<String>,
}

impl MatchResult {
    pub fn matched(product: &CatalogEntry, term: &str) -> Self {
        Self {
            status: MatchStatus::Matched,
            product: Some(product.clone()),
            matched_term: Some(term.to_string()),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: MatchStatus::NotFound,
            product: None,
            matched_term: None,
        }
    }

    pub fn skipped() -> Self {
        Self {
            status: MatchStatus::Skipped,
            product: None,
            matched_term: None,
        }
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.status == MatchStatus::Matched
    }
}

/// First-match-wins resolver from identification candidates to catalog products
pub struct CatalogMatcher<'a> {
    catalog: &'a ProductCatalog,
}

impl<'a> CatalogMatcher<'a> {
    pub fn new(catalog: &'a ProductCatalog) -> Self {
        Self { catalog }
    }

    /// Resolve the top candidate to at most one product.
    ///
    /// Only `candidates[0]` is considered. Products are scanned in catalog
    /// order and, for each product, terms in priority order; the first
    /// (product, term) pair that matches ends the search.
    pub fn resolve(&self, candidates: &[CandidateSpecies]) -> MatchResult {
        let Some(terms) = candidates.first().and_then(SearchTerms::from_candidate) else {
            tracing::debug!("No candidate with a usable scientific name; skipping match");
            return MatchResult::skipped();
        };

        for (product, name) in self.catalog.indexed() {
            if let Some(term) = terms.iter().find(|term| name.matches(term)) {
                let (product_name, id) = (&product.name, &product.id);
                tracing::debug!("Matched product '{product_name}' ({id}) via term '{term}'");
                return MatchResult::matched(product, term);
            }
        }

        tracing::debug!(
            "No product matched {} search term(s) across {} product(s)",
            terms.len(),
            self.catalog.len()
        );
        MatchResult::not_found()
    }
}

/// Resolve candidates against a catalog
pub fn resolve(candidates: &[CandidateSpecies], catalog: &ProductCatalog) -> MatchResult {
    CatalogMatcher::new(catalog).resolve(candidates)
}
