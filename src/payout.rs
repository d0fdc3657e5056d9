//! Computed payout records.

use crate::money::Amount;
use serde::Serialize;

/// One artist's computed payout for one sale event.
///
/// `label_payout_value` is the portion of that sale's label-side share that
/// was absorbed as expense recoupment. It describes the track-level sale
/// event, not the individual artist: when a track has multiple collaborators
/// the same recouped amount is reported on each of their payouts, so a
/// consumer summing it across a statement must deduplicate per event.
///
/// Payouts are purely computed outputs; they are never stored and never
/// mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Payout {
    pub artist: String,
    pub amount: Amount,
    pub label_payout_value: Amount,
}
