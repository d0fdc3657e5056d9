//! Crate error taxonomy.
//!
//! Every error here is a local validation failure surfaced synchronously at
//! the offending call: nothing is retried internally, and no failing call
//! leaves partial mutation behind. The caller must supply corrected input.

use crate::money::Amount;
use thiserror::Error;

/// Errors produced by catalogue construction and sale ingestion.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("Sale catalogue number '{actual}' does not match release '{expected}'")]
    MismatchedCatalogNumber { expected: String, actual: String },

    #[error("Release '{cat_no}' has no track named '{track}'")]
    UnknownTrack { cat_no: String, track: String },

    #[error("Split percentages sum to {total}, expected 100")]
    InvalidSplit { total: f64 },

    #[error("Negative percentage {value} for artist '{artist}'")]
    NegativePercentage { artist: String, value: f64 },

    #[error("Artist '{artist}' appears more than once in split")]
    DuplicateArtist { artist: String },

    #[error("Contract {field} must be within 0-100, got {value}")]
    InvalidContract { field: &'static str, value: f64 },

    #[error("Field '{field}' must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: Amount },

    #[error("Track '{track}' appears more than once in release")]
    DuplicateTrack { track: String },

    #[error("Release '{cat_no}' is already in the catalogue")]
    DuplicateRelease { cat_no: String },
}
