//! Tracks and their direct-sale bookkeeping.

use crate::catalogue::Split;
use crate::error::CatalogueError;
use crate::money::Amount;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// One sale event attributed directly to a track.
#[derive(Clone, Debug, Serialize)]
struct SaleEntry {
    amount: Amount,
    date: NaiveDate,
}

/// A named work with a revenue split.
///
/// A track keeps its own chronological ledger of the sales attributed
/// directly to it (via track sales). This is separate bookkeeping from the
/// release-level combined ledger and only feeds
/// [`calculate_sales_between`](Track::calculate_sales_between). The ledger is
/// append-only and never exposed for direct mutation.
#[derive(Clone, Debug, Serialize)]
pub struct Track {
    name: String,
    split: Split,
    sales: Vec<SaleEntry>,
}

impl Track {
    pub fn new(name: impl Into<String>, split: Split) -> Self {
        Self {
            name: name.into(),
            split,
            sales: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn split(&self) -> &Split {
        &self.split
    }

    /// Record a sale attributed directly to this track.
    pub fn apply_sale(&mut self, amount: Amount, date: NaiveDate) -> Result<(), CatalogueError> {
        if amount < 0 {
            return Err(CatalogueError::NegativeAmount {
                field: "sale amount",
                value: amount,
            });
        }
        debug!(track = %self.name, amount, date = %date, "track sale recorded");
        self.sales.push(SaleEntry { amount, date });
        Ok(())
    }

    /// Sum this track's direct sales in the closed interval `[from, to]` and
    /// divide the total by the split.
    ///
    /// No contract gating or expense recoupment applies here; this is the
    /// simpler artist-level breakdown used for reporting. Every artist in the
    /// split is present in the result, zero amounts included.
    pub fn calculate_sales_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> BTreeMap<String, Amount> {
        let total = self
            .sales
            .iter()
            .filter(|entry| entry.date >= from && entry.date <= to)
            .map(|entry| entry.amount)
            .sum();
        self.split.allocate(total)
    }
}
