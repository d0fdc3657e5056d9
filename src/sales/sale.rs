//! Sale records ingested against a release.
//!
//! A sale either applies to a release as a whole ([`ReleaseSale`]) or is
//! attributed to one specific track ([`TrackSale`]). Both carry a catalogue
//! number, an amount in minor currency units and the calendar date the money
//! was earned. Sales are immutable once created and append-only in a
//! release's ledger.

use crate::error::CatalogueError;
use crate::money::Amount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Revenue attributed to a release as a whole.
///
/// The amount is distributed evenly across the release's tracks before
/// artist-level splitting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseSale {
    pub cat_no: String,
    pub amount: Amount,
    pub date: NaiveDate,
}

/// Revenue attributed to one named track of a release.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSale {
    pub cat_no: String,
    pub track_name: String,
    pub amount: Amount,
    pub date: NaiveDate,
}

/// A record of money earned on a date.
///
/// Sales arrive from upstream ingestion, possibly as serialized data, so
/// amounts and track references are re-validated when the sale is applied to
/// a release.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sale {
    Release(ReleaseSale),
    Track(TrackSale),
}

impl ReleaseSale {
    pub fn new(
        cat_no: impl Into<String>,
        amount: Amount,
        date: NaiveDate,
    ) -> Result<Self, CatalogueError> {
        if amount < 0 {
            return Err(CatalogueError::NegativeAmount {
                field: "sale amount",
                value: amount,
            });
        }
        Ok(Self {
            cat_no: cat_no.into(),
            amount,
            date,
        })
    }
}

impl TrackSale {
    pub fn new(
        cat_no: impl Into<String>,
        track_name: impl Into<String>,
        amount: Amount,
        date: NaiveDate,
    ) -> Result<Self, CatalogueError> {
        if amount < 0 {
            return Err(CatalogueError::NegativeAmount {
                field: "sale amount",
                value: amount,
            });
        }
        Ok(Self {
            cat_no: cat_no.into(),
            track_name: track_name.into(),
            amount,
            date,
        })
    }
}

impl Sale {
    /// Catalogue number of the release this sale belongs to.
    pub fn cat_no(&self) -> &str {
        match self {
            Sale::Release(sale) => &sale.cat_no,
            Sale::Track(sale) => &sale.cat_no,
        }
    }

    /// Amount earned, in minor currency units.
    pub fn amount(&self) -> Amount {
        match self {
            Sale::Release(sale) => sale.amount,
            Sale::Track(sale) => sale.amount,
        }
    }

    /// Calendar date the money was earned.
    pub fn date(&self) -> NaiveDate {
        match self {
            Sale::Release(sale) => sale.date,
            Sale::Track(sale) => sale.date,
        }
    }
}

impl From<ReleaseSale> for Sale {
    fn from(sale: ReleaseSale) -> Self {
        Sale::Release(sale)
    }
}

impl From<TrackSale> for Sale {
    fn from(sale: TrackSale) -> Self {
        Sale::Track(sale)
    }
}
