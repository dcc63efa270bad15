use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::catalog::index::{IndexedName, NameIndex};
use crate::core::product::CatalogEntry;
use crate::core::types::ProductId;
use crate::utils::validation::{validate_catalog_size, validate_price, ValidationError};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(#[from] ValidationError),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub created_at: String,
    pub products: Vec<CatalogEntry>,
}

/// An ordered product catalog with a precomputed lowercase name index
#[derive(Debug, Default)]
pub struct ProductCatalog {
    /// All products, in merchandising order
    products: Vec<CatalogEntry>,

    /// Index: product ID -> index in products vec
    id_to_index: HashMap<ProductId, usize>,

    /// Case-folded names, parallel to `products`
    names: NameIndex,
}

impl ProductCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from products, preserving their order
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.add_product(entry);
        }
        catalog
    }

    /// Load the embedded sample catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Validated at compile time via build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/nursery_products.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    ///
    /// Accepts the versioned envelope or a bare array of products.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        // Dispatch on the layout up front so field errors are reported as-is
        if json.trim_start().starts_with('[') {
            let products: Vec<CatalogEntry> = serde_json::from_str(json)?;
            return Self::validated(products);
        }

        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if !data.version.is_empty() && data.version != CATALOG_VERSION {
            let found = &data.version;
            tracing::warn!("Catalog version mismatch (expected {CATALOG_VERSION}, found {found})");
        }

        Self::validated(data.products)
    }

    /// Build a catalog after checking size and prices
    pub fn validated(products: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        validate_catalog_size(products.len())?;
        for product in &products {
            validate_price(&product.id.0, product.price)?;
        }
        Ok(Self::from_entries(products))
    }

    /// Add a product to the end of the catalog
    pub fn add_product(&mut self, product: CatalogEntry) {
        let index = self.products.len();

        // First occurrence of an ID wins lookups; order is unaffected
        self.id_to_index.entry(product.id.clone()).or_insert(index);
        self.names.push(&product.name);

        self.products.push(product);
    }

    /// Get a product by ID
    pub fn get(&self, id: &ProductId) -> Option<&CatalogEntry> {
        self.id_to_index.get(id).map(|&idx| &self.products[idx])
    }

    /// All products, in catalog order
    pub fn products(&self) -> &[CatalogEntry] {
        &self.products
    }

    /// Products paired with their case-folded names, in catalog order
    pub fn indexed(&self) -> impl Iterator<Item = (&CatalogEntry, &IndexedName)> {
        self.products.iter().zip(self.names.iter())
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            products: self.products.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of products in catalog
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
