//! Revenue splits between collaborating artists.
//!
//! A split defines how a track's artist-side revenue divides among its
//! collaborators. Percentages always sum to 100 across entries; rounding of
//! uneven divisions happens at allocation time, once per artist.

use crate::error::CatalogueError;
use crate::money::{percentage_share, Amount};
use serde::Serialize;
use std::collections::BTreeMap;

/// Tolerance when checking that a split's percentages sum to 100.
const SUM_TOLERANCE: f64 = 0.01;

/// One artist's percentage share of a track.
#[derive(Clone, Debug, Serialize)]
pub struct ArtistShare {
    pub artist: String,
    pub percentage: f64,
}

/// How a track's artist-side revenue divides among its collaborators.
///
/// Immutable once built. Entries keep construction order.
#[derive(Clone, Debug, Serialize)]
pub struct Split {
    shares: Vec<ArtistShare>,
}

impl Split {
    /// A single artist owning the full 100%.
    pub fn single(artist: impl Into<String>) -> Self {
        Self {
            shares: vec![ArtistShare {
                artist: artist.into(),
                percentage: 100.0,
            }],
        }
    }

    /// An even split between the given artists, 100/N each.
    pub fn even<S: Into<String>>(
        artists: impl IntoIterator<Item = S>,
    ) -> Result<Self, CatalogueError> {
        let artists: Vec<String> = artists.into_iter().map(Into::into).collect();
        let percentage = 100.0 / artists.len().max(1) as f64;
        Self::validated(
            artists
                .into_iter()
                .map(|artist| ArtistShare { artist, percentage })
                .collect(),
        )
    }

    /// An explicit artist → percentage mapping, trusted to sum to 100.
    pub fn custom<S: Into<String>>(
        shares: impl IntoIterator<Item = (S, f64)>,
    ) -> Result<Self, CatalogueError> {
        Self::validated(
            shares
                .into_iter()
                .map(|(artist, percentage)| ArtistShare {
                    artist: artist.into(),
                    percentage,
                })
                .collect(),
        )
    }

    fn validated(shares: Vec<ArtistShare>) -> Result<Self, CatalogueError> {
        for share in &shares {
            if share.percentage < 0.0 {
                return Err(CatalogueError::NegativePercentage {
                    artist: share.artist.clone(),
                    value: share.percentage,
                });
            }
        }
        for (i, share) in shares.iter().enumerate() {
            if shares[..i].iter().any(|other| other.artist == share.artist) {
                return Err(CatalogueError::DuplicateArtist {
                    artist: share.artist.clone(),
                });
            }
        }
        let total: f64 = shares.iter().map(|share| share.percentage).sum();
        if (total - 100.0).abs() > SUM_TOLERANCE {
            return Err(CatalogueError::InvalidSplit { total });
        }
        Ok(Self { shares })
    }

    /// The collaborating artists, in construction order.
    pub fn artists(&self) -> impl Iterator<Item = &str> + '_ {
        self.shares.iter().map(|share| share.artist.as_str())
    }

    /// Divide `total` among the collaborators.
    ///
    /// Each share is rounded independently, so the allocated sum may drift
    /// from `total` by up to one minor unit per extra artist. Every artist in
    /// the split is present in the result, zero amounts included.
    pub fn allocate(&self, total: Amount) -> BTreeMap<String, Amount> {
        self.shares
            .iter()
            .map(|share| {
                (
                    share.artist.clone(),
                    percentage_share(total, share.percentage),
                )
            })
            .collect()
    }
}
