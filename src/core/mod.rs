//! Core data types for plant identification resolution.
//!
//! - [`CandidateSpecies`]: A species suggested by the identification service
//! - [`CatalogEntry`]: A product offered by the catalog service
//! - [`ConfidenceTier`], [`TierThresholds`]: Confidence classification
//!
//! ## Normalization
//!
//! Upstream data is normalized at this boundary rather than rejected:
//!
//! | Field | Malformed value | Treated as |
//! |-------|-----------------|------------|
//! | confidence | < 0 or > 100 | clamped to 0 or 100 |
//! | confidence | null / missing | 0 |
//! | scientific name | null / blank | unmatchable |
//! | genus, family | missing | empty string |
//!
//! [`CandidateSpecies`]: candidate::CandidateSpecies
//! [`CatalogEntry`]: product::CatalogEntry
//! [`ConfidenceTier`]: types::ConfidenceTier
//! [`TierThresholds`]: types::TierThresholds

pub mod candidate;
pub mod product;
pub mod types;
