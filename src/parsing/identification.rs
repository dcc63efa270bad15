use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::core::candidate::CandidateSpecies;
use crate::utils::validation::{validate_candidate_count, ValidationError};

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read identification input: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse identification input: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid identification input: {0}")]
    Invalid(#[from] ValidationError),
}

/// Object layout of an identification response
#[derive(Deserialize)]
struct WrappedPayload {
    #[serde(alias = "suggestions")]
    candidates: Vec<CandidateSpecies>,
}

/// Parse candidates from identification service JSON.
///
/// Accepts either a bare array of candidates or an object with a
/// `candidates` (or `suggestions`) array. Candidate order is preserved.
///
/// # Errors
///
/// Returns an error if the text is not valid JSON in one of the accepted
/// layouts, or if it holds more candidates than the configured maximum.
pub fn parse_identification_text(text: &str) -> Result<Vec<CandidateSpecies>, InputError> {
    let candidates: Vec<CandidateSpecies> = if text.trim_start().starts_with('[') {
        serde_json::from_str(text)?
    } else {
        serde_json::from_str::<WrappedPayload>(text)?.candidates
    };
    validate_candidate_count(candidates.len())?;
    Ok(candidates)
}

/// Parse candidates from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn parse_identification_file(path: &Path) -> Result<Vec<CandidateSpecies>, InputError> {
    let content = std::fs::read_to_string(path)?;
    parse_identification_text(&content)
}
