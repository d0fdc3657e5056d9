//! Recoupable label expenses.

use crate::error::CatalogueError;
use crate::money::Amount;
use chrono::NaiveDate;
use serde::Serialize;

/// A recoupable cost charged against the label's share of revenue.
///
/// An expense is never destroyed when recouped: the remaining balance is a
/// derived value recomputed per payout query, so the same expense list can be
/// queried over different date ranges independently.
#[derive(Clone, Debug, Serialize)]
pub struct Expense {
    amount: Amount,
    description: String,
    due_date: Option<NaiveDate>,
}

impl Expense {
    /// An expense recoupable from the beginning of the release's life.
    pub fn new(amount: Amount, description: impl Into<String>) -> Result<Self, CatalogueError> {
        Self::build(amount, description.into(), None)
    }

    /// An expense that only becomes recoupable from `due_date` onward.
    pub fn deferred(
        amount: Amount,
        description: impl Into<String>,
        due_date: NaiveDate,
    ) -> Result<Self, CatalogueError> {
        Self::build(amount, description.into(), Some(due_date))
    }

    fn build(
        amount: Amount,
        description: String,
        due_date: Option<NaiveDate>,
    ) -> Result<Self, CatalogueError> {
        if amount < 0 {
            return Err(CatalogueError::NegativeAmount {
                field: "expense amount",
                value: amount,
            });
        }
        Ok(Self {
            amount,
            description,
            due_date,
        })
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Whether this expense is eligible for recoupment by `date`.
    pub fn is_due_by(&self, date: NaiveDate) -> bool {
        match self.due_date {
            Some(due) => due <= date,
            None => true,
        }
    }
}
