//! Centralized validation for data arriving from the external services.

use thiserror::Error;

/// Maximum number of candidates accepted in a single identification payload (DOS protection)
pub const MAX_CANDIDATES: usize = 100;

/// Maximum number of products accepted in a single catalog
pub const MAX_CATALOG_ENTRIES: usize = 100_000;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Too many candidates: {count} exceeds maximum of {max}")]
    TooManyCandidates { count: usize, max: usize },

    #[error("Too many catalog entries: {count} exceeds maximum of {max}")]
    TooManyProducts { count: usize, max: usize },

    #[error("Invalid price {price} for product '{id}': must be finite and non-negative")]
    InvalidPrice { id: String, price: f64 },
}

/// Check that an identification payload is within the candidate limit.
///
/// # Errors
///
/// Returns `ValidationError::TooManyCandidates` if `count` exceeds [`MAX_CANDIDATES`].
pub fn validate_candidate_count(count: usize) -> Result<(), ValidationError> {
    if count > MAX_CANDIDATES {
        Err(ValidationError::TooManyCandidates {
            count,
            max: MAX_CANDIDATES,
        })
    } else {
        Ok(())
    }
}

/// Check that a catalog is within the product limit.
///
/// # Errors
///
/// Returns `ValidationError::TooManyProducts` if `count` exceeds [`MAX_CATALOG_ENTRIES`].
pub fn validate_catalog_size(count: usize) -> Result<(), ValidationError> {
    if count > MAX_CATALOG_ENTRIES {
        Err(ValidationError::TooManyProducts {
            count,
            max: MAX_CATALOG_ENTRIES,
        })
    } else {
        Ok(())
    }
}

/// Validate a product price.
///
/// # Examples
///
/// ```
/// use plant_resolver::utils::validation::validate_price;
///
/// assert!(validate_price("p1", 4.99).is_ok());
/// assert!(validate_price("p1", -1.0).is_err());
/// assert!(validate_price("p1", f64::NAN).is_err());
/// ```
///
/// # Errors
///
/// Returns `ValidationError::InvalidPrice` if the price is negative, NaN, or infinite.
pub fn validate_price(id: &str, price: f64) -> Result<(), ValidationError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidPrice {
            id: id.to_string(),
            price,
        })
    }
}
