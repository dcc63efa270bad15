//! Product catalog storage and indexing.
//!
//! The catalog is an ordered, read-only snapshot of the products offered by
//! the catalog service. Order is significant: when two products could match
//! the same candidate, the one listed first wins.
//!
//! Each product's name is case-folded and tokenized once when it is added,
//! so resolving many identifications against the same catalog does not
//! repeat that work.
//!
//! ## Example
//!
//! ```rust,no_run
//! use plant_resolver::ProductCatalog;
//! use plant_resolver::core::types::ProductId;
//!
//! // Load the embedded sample catalog
//! let catalog = ProductCatalog::load_embedded().unwrap();
//!
//! for product in catalog.products() {
//!     println!("{} ({})", product.name, product.id);
//! }
//!
//! let tulsi = catalog.get(&ProductId::new("tulsi-plant"));
//! ```
//!
//! ## Custom Catalogs
//!
//! A catalog file is either the versioned envelope written by
//! [`ProductCatalog::to_json`](store::ProductCatalog::to_json) or a bare JSON
//! array of products:
//!
//! ```rust,no_run
//! use plant_resolver::ProductCatalog;
//! use std::path::Path;
//!
//! let custom = ProductCatalog::load_from_file(Path::new("products.json")).unwrap();
//! ```

pub mod index;
pub mod store;
