//! # plant-resolver
//!
//! A library for turning plant identification results into shop-ready answers.
//!
//! An image identification service returns a ranked list of candidate species,
//! each with a confidence score, taxonomy and common names. On its own that
//! list doesn't tell a shopper whether the plant is for sale or how to look
//! after it.
//!
//! `plant-resolver` takes the top candidate and:
//!
//! ## Features
//!
//! - **Confidence tiers**: Classifies the score as High, Medium or Low
//! - **Catalog matching**: Deterministic, first-match-wins fuzzy name matching
//!   against an ordered product catalog
//! - **Care rules**: An ordered taxonomic decision list yielding light, water,
//!   soil and climate recommendations, with a default fallback
//! - **Total by construction**: Malformed upstream data degrades to the most
//!   conservative outcome instead of failing
//!
//! ## Example
//!
//! ```rust
//! use plant_resolver::{resolve_identification, CandidateSpecies, CatalogEntry, ProductCatalog};
//! use plant_resolver::core::types::ConfidenceTier;
//!
//! let catalog = ProductCatalog::from_entries([CatalogEntry::new("tulsi", "Tulsi Plant")]);
//! let candidates = vec![CandidateSpecies::new("tulsi ocimum sanctum", 92).with_genus("ocimum")];
//!
//! let outcome = resolve_identification(&candidates, &catalog);
//! assert_eq!(outcome.tier, Some(ConfidenceTier::High));
//! assert!(outcome.product_match.is_matched());
//! assert_eq!(outcome.care.unwrap().rule_id, "default");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Candidate, product and confidence types
//! - [`catalog`]: Product catalog storage and name indexing
//! - [`matching`]: Catalog matcher
//! - [`care`]: Care rule table and engine
//! - [`resolution`]: Composes tier, match and care for one request
//! - [`parsing`]: Identification service payload adapter
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: HTTP API

pub mod care;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod resolution;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use care::{derive_care_profile, CareProfile, CareRuleEngine};
pub use catalog::store::ProductCatalog;
pub use core::candidate::CandidateSpecies;
pub use core::product::CatalogEntry;
pub use core::types::{classify, ConfidenceTier, TierThresholds};
pub use matching::engine::{resolve, CatalogMatcher, MatchResult, MatchStatus};
pub use resolution::{resolve_identification, IdentificationOutcome, Resolver};
