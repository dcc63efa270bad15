//! Adapters from external service payloads to engine types.
//!
//! - [`identification`]: candidate lists from the identification service
//!
//! Catalog files are loaded by [`ProductCatalog`](crate::catalog::store::ProductCatalog)
//! directly.
//!
//! ## Identification payloads
//!
//! ```text
//! [{"scientific_name": "Aloe vera", "genus": "Aloe", "confidence": 92}]
//!
//! {"suggestions": [{"scientificName": "Aloe vera", "commonNames": ["aloe"], "confidence": 0.92e2}]}
//! ```

pub mod identification;
