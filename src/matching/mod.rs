//! Catalog matching for identification candidates.
//!
//! - [`CatalogMatcher`](engine::CatalogMatcher): Resolves the top candidate to a product
//! - [`SearchTerms`](terms::SearchTerms): Priority-ordered terms derived from a candidate
//! - [`MatchResult`](engine::MatchResult): Outcome with the product and the term that matched
//!
//! ## Matching Algorithm
//!
//! Matching is deterministic and **first-match-wins**:
//!
//! 1. **Term list**: the top candidate's scientific name, then its common
//!    names, lowercased and deduplicated in first-seen order
//! 2. **Outer loop**: products in catalog order, so earlier products win ties
//! 3. **Inner loop**: terms in priority order, so the scientific name is
//!    preferred over common names for the same product
//! 4. **Predicate**: the product name contains the term, or the term
//!    contains the product name's first token
//!
//! Lower-ranked candidates are never consulted, even when the top one
//! finds nothing.
//!
//! ## Example
//!
//! ```rust
//! use plant_resolver::core::candidate::CandidateSpecies;
//! use plant_resolver::core::product::CatalogEntry;
//! use plant_resolver::matching::engine::{CatalogMatcher, MatchStatus};
//! use plant_resolver::ProductCatalog;
//!
//! let catalog = ProductCatalog::from_entries([
//!     CatalogEntry::new("1", "Aloe Vera Plant"),
//!     CatalogEntry::new("2", "Aloe Gel"),
//! ]);
//! let candidate = CandidateSpecies::new("Aloe vera", 91).with_common_names(["aloe"]);
//!
//! let result = CatalogMatcher::new(&catalog).resolve(&[candidate]);
//! assert_eq!(result.status, MatchStatus::Matched);
//! assert_eq!(result.matched_term.as_deref(), Some("aloe vera"));
//! ```

pub mod engine;
pub mod terms;

pub use engine::{MatchResult, MatchStatus};
