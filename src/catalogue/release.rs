//! Release aggregate and the payout waterfall.
//!
//! A release owns the combined sales ledger, the contract, the track set and
//! the expense pool, and orchestrates payout computation: walking in-range
//! sales chronologically, splitting each between label and artists, recouping
//! outstanding expenses from the label side and redirecting any surplus back
//! to the artists.

use crate::catalogue::{Contract, Expense, Track};
use crate::error::CatalogueError;
use crate::money::{percentage_share, Amount};
use crate::payout::Payout;
use crate::sales::Sale;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// The aggregate root of royalty computation.
///
/// Sales are append-only and enter only through
/// [`apply_sale`](Release::apply_sale); payout queries are side-effect-free
/// reads. The design assumes single-writer, multiple-reader access per
/// release instance; the `&mut self` receiver on the mutating operations
/// makes that requirement explicit, and no internal synchronization is
/// provided.
#[derive(Clone, Debug, Serialize)]
pub struct Release {
    cat_no: String,
    prices: BTreeMap<NaiveDate, Amount>,
    tracks: Vec<Track>,
    contract: Contract,
    expenses: Vec<Expense>,
    ledger: Vec<Sale>,
}

impl Release {
    pub fn new(
        cat_no: impl Into<String>,
        prices: BTreeMap<NaiveDate, Amount>,
        tracks: Vec<Track>,
        contract: Contract,
        expenses: Vec<Expense>,
    ) -> Result<Self, CatalogueError> {
        for (i, track) in tracks.iter().enumerate() {
            if tracks[..i].iter().any(|other| other.name() == track.name()) {
                return Err(CatalogueError::DuplicateTrack {
                    track: track.name().to_string(),
                });
            }
        }
        for price in prices.values() {
            if *price < 0 {
                return Err(CatalogueError::NegativeAmount {
                    field: "price",
                    value: *price,
                });
            }
        }
        Ok(Self {
            cat_no: cat_no.into(),
            prices,
            tracks,
            contract,
            expenses,
            ledger: Vec::new(),
        })
    }

    pub fn cat_no(&self) -> &str {
        &self.cat_no
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn track(&self, name: &str) -> Option<&Track> {
        self.tracks.iter().find(|track| track.name() == name)
    }

    pub fn contract(&self) -> &Contract {
        &self.contract
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The price in effect on `date`: the most recent price whose effective
    /// date is on or before it.
    pub fn price_at(&self, date: NaiveDate) -> Option<Amount> {
        self.prices.range(..=date).next_back().map(|(_, price)| *price)
    }

    // =========================================================================
    // Sale ingestion
    // =========================================================================

    /// Ingest a sale.
    ///
    /// All validation happens before any ledger mutation: a mismatched
    /// catalogue number, a negative amount or an unknown track name leave the
    /// release untouched. A track sale is recorded both on the release-level
    /// combined ledger (payout computation needs the full history) and on the
    /// named track's own ledger.
    pub fn apply_sale(&mut self, sale: Sale) -> Result<(), CatalogueError> {
        if sale.cat_no() != self.cat_no {
            return Err(CatalogueError::MismatchedCatalogNumber {
                expected: self.cat_no.clone(),
                actual: sale.cat_no().to_string(),
            });
        }
        if sale.amount() < 0 {
            return Err(CatalogueError::NegativeAmount {
                field: "sale amount",
                value: sale.amount(),
            });
        }
        if let Sale::Track(track_sale) = &sale {
            let Some(track) = self
                .tracks
                .iter_mut()
                .find(|track| track.name() == track_sale.track_name)
            else {
                return Err(CatalogueError::UnknownTrack {
                    cat_no: self.cat_no.clone(),
                    track: track_sale.track_name.clone(),
                });
            };
            track.apply_sale(track_sale.amount, track_sale.date)?;
        }
        debug!(cat_no = %self.cat_no, amount = sale.amount(), date = %sale.date(), "sale recorded");
        self.ledger.push(sale);
        Ok(())
    }

    // =========================================================================
    // Payout computation
    // =========================================================================

    /// Compute per-artist payouts for every sale in the closed interval
    /// `[from, to]`.
    ///
    /// Sales are walked chronologically, ledger order breaking date ties. The
    /// recoupment balance starts at the sum of every expense due on or before
    /// `to`; each sale's label share feeds that balance until it is
    /// exhausted, after which label shares pass through to the artists as
    /// surplus. Sales outside the window never touch the balance, so the
    /// result is a pure function of the window.
    ///
    /// Payouts come back in chronological, then release-track, then
    /// artist-name order. Each payout's `label_payout_value` is the full
    /// amount the track's sale event fed into recoupment, repeated for every
    /// collaborator of that track.
    pub fn calculate_payout(&self, from: NaiveDate, to: NaiveDate) -> Vec<Payout> {
        let mut sales: Vec<&Sale> = self
            .ledger
            .iter()
            .filter(|sale| sale.date() >= from && sale.date() <= to)
            .collect();
        sales.sort_by_key(|sale| sale.date());

        let mut balance: Amount = self
            .expenses
            .iter()
            .filter(|expense| expense.is_due_by(to))
            .map(Expense::amount)
            .sum();

        debug!(
            cat_no = %self.cat_no,
            from = %from,
            to = %to,
            sales = sales.len(),
            recoupable = balance,
            "computing payout"
        );

        let mut payouts = Vec::new();
        for sale in sales {
            for (track, attributed) in self.attributions(sale) {
                let label_share = percentage_share(attributed, self.contract.label_percent());
                let artist_base = attributed - label_share;
                let recouped = label_share.min(balance);
                balance -= recouped;
                let surplus = label_share - recouped;
                for (artist, amount) in track.split().allocate(artist_base + surplus) {
                    payouts.push(Payout {
                        artist,
                        amount,
                        label_payout_value: recouped,
                    });
                }
            }
        }
        payouts
    }

    /// Resolve the (track, amount) pairs a sale attributes revenue to: one
    /// pair carrying the whole amount for a track sale, N equal pairs for a
    /// release sale.
    fn attributions<'a>(&'a self, sale: &Sale) -> Vec<(&'a Track, Amount)> {
        match sale {
            Sale::Release(sale) => {
                if self.tracks.is_empty() {
                    return Vec::new();
                }
                let per_track = percentage_share(sale.amount, 100.0 / self.tracks.len() as f64);
                self.tracks.iter().map(|track| (track, per_track)).collect()
            }
            Sale::Track(sale) => self
                .tracks
                .iter()
                .filter(|track| track.name() == sale.track_name)
                .map(|track| (track, sale.amount))
                .collect(),
        }
    }
}
