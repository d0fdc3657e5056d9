//! Test fixture creation for releases and catalogues

#![allow(dead_code)]

use super::constants::*;
use chrono::NaiveDate;
use royalty_engine::{Contract, Expense, Release, Split, Track};
use std::collections::BTreeMap;

/// Calendar day `day` of a fixed test month.
pub fn day(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
}

/// A release with one single-artist track and a 50% artist contract.
pub fn create_simple_release(expenses: Vec<Expense>) -> Release {
    Release::new(
        CAT_NO,
        BTreeMap::from([(day(1), 500)]),
        vec![Track::new("track-1", Split::single(ARTIST_1_NAME))],
        Contract::new(50.0, 0.0).unwrap(),
        expenses,
    )
    .unwrap()
}

/// A release with a solo track and a two-artist collaboration track.
pub fn create_two_track_release(expenses: Vec<Expense>) -> Release {
    Release::new(
        CAT_NO,
        BTreeMap::from([(day(1), 400)]),
        vec![
            Track::new("track-1", Split::single(ARTIST_1_NAME)),
            Track::new(
                "track-2",
                Split::even([ARTIST_1_NAME, ARTIST_2_NAME]).unwrap(),
            ),
        ],
        Contract::new(50.0, 0.0).unwrap(),
        expenses,
    )
    .unwrap()
}

/// The complex compilation release: a custom split, a three-way even split
/// and a solo track, with mastering and artwork expenses.
pub fn create_complex_compilation_release() -> Release {
    let rumble = Track::new(
        RUMBLE,
        Split::custom([(SKRILLEX, 40.0), (FRED_AGAIN, 60.0)]).unwrap(),
    );
    let collab = Track::new(
        COLLAB_TRACK,
        Split::even([KENDRICK, J_COLE, SCHOOLBOY_Q]).unwrap(),
    );
    let mayonnaise = Track::new(MAYONNAISE, Split::single(BOB_DYLAN));

    Release::new(
        COMPLEX_CAT_NO,
        BTreeMap::from([(day(1), 1200)]),
        vec![rumble, collab, mayonnaise],
        Contract::new(50.0, 0.0).unwrap(),
        vec![
            Expense::new(60_00, "Track Mastering").unwrap(),
            Expense::new(100_00, "Artwork").unwrap(),
        ],
    )
    .unwrap()
}
