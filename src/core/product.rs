use serde::{Deserialize, Serialize};

use crate::core::types::ProductId;

/// A product offered by the catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: ProductId,

    /// Display name, matched against candidate search terms
    pub name: String,

    /// Unit price, never negative
    #[serde(default)]
    pub price: f64,

    /// Units in stock
    #[serde(default)]
    pub stock: u32,

    /// Image references in display order
    #[serde(default)]
    pub images: Vec<String>,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price: 0.0,
            stock: 0,
            images: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    #[must_use]
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    #[must_use]
    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}
