//! Shared constants for end-to-end tests
//!
//! All identifiers used across the test suite live here; when test data
//! changes, update only this file.

#![allow(dead_code)]

// ============================================================================
// Catalogue numbers
// ============================================================================

/// Simple single-track test release
pub const CAT_NO: &str = "TEST001";

/// Multi-artist compilation release
pub const COMPLEX_CAT_NO: &str = "COMPLEX001";

// ============================================================================
// Generic artist names
// ============================================================================

pub const ARTIST_1_NAME: &str = "test-artist-name-1";
pub const ARTIST_2_NAME: &str = "test-artist-name-2";

// ============================================================================
// Compilation release tracks and artists
// ============================================================================

/// Track with a 40/60 custom split
pub const RUMBLE: &str = "Rumble";

/// Track with a three-way even split
pub const COLLAB_TRACK: &str = "Big Ol' Collab Track";

/// Solo track
pub const MAYONNAISE: &str = "Mayonnaise";

pub const SKRILLEX: &str = "Skrillex";
pub const FRED_AGAIN: &str = "Fred Again...";
pub const KENDRICK: &str = "Kendrick";
pub const J_COLE: &str = "J Cole";
pub const SCHOOLBOY_Q: &str = "Schoolboy Q";
pub const BOB_DYLAN: &str = "Bob Dylan";
