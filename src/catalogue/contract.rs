//! Label contract terms.

use crate::error::CatalogueError;
use serde::Serialize;

/// The label/artist revenue share agreed for a release.
///
/// `advance_percent` is reserved for a future advance rate; no computation
/// consumes it yet. The label side is always the complement of the artist
/// percentage.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Contract {
    artist_percent: f64,
    advance_percent: f64,
}

impl Contract {
    pub fn new(artist_percent: f64, advance_percent: f64) -> Result<Self, CatalogueError> {
        if !(0.0..=100.0).contains(&artist_percent) {
            return Err(CatalogueError::InvalidContract {
                field: "artist_percent",
                value: artist_percent,
            });
        }
        if !(0.0..=100.0).contains(&advance_percent) {
            return Err(CatalogueError::InvalidContract {
                field: "advance_percent",
                value: advance_percent,
            });
        }
        Ok(Self {
            artist_percent,
            advance_percent,
        })
    }

    pub fn artist_percent(&self) -> f64 {
        self.artist_percent
    }

    pub fn advance_percent(&self) -> f64 {
        self.advance_percent
    }

    /// The label-side share of revenue.
    pub fn label_percent(&self) -> f64 {
        100.0 - self.artist_percent
    }
}
