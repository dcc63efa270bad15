//! End-to-end resolution of an identification request.
//!
//! [`Resolver`](composer::Resolver) sequences the three stages for the
//! candidate list of a single request:
//!
//! 1. **Tier**: classify the top candidate's confidence
//! 2. **Match**: resolve the top candidate against the catalog
//! 3. **Care**: derive a care profile for the top candidate
//!
//! Care is derived whenever a candidate exists, even if nothing matched:
//! the plant was identified even if it is not stocked.

pub mod composer;

pub use composer::{resolve_identification, IdentificationOutcome, Resolver};
