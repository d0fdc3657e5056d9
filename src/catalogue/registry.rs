//! In-memory catalogue registry.
//!
//! Bookkeeping for the set of releases under management: registration,
//! lookup and counts. Persistence and indexing live outside this crate.

use crate::catalogue::Release;
use crate::error::CatalogueError;
use anyhow::{bail, Result};
use std::collections::HashMap;
use tracing::info;

/// The set of releases under management, keyed by catalogue number.
#[derive(Debug, Default)]
pub struct Catalogue {
    releases: HashMap<String, Release>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a release. Catalogue numbers are unique keys.
    pub fn add_release(&mut self, release: Release) -> Result<()> {
        if self.releases.contains_key(release.cat_no()) {
            bail!(CatalogueError::DuplicateRelease {
                cat_no: release.cat_no().to_string(),
            });
        }
        info!(
            cat_no = %release.cat_no(),
            tracks = release.tracks().len(),
            "release added to catalogue"
        );
        self.releases
            .insert(release.cat_no().to_string(), release);
        Ok(())
    }

    /// Look up a release for reporting.
    pub fn release(&self, cat_no: &str) -> Option<&Release> {
        self.releases.get(cat_no)
    }

    /// Look up a release for sale ingestion.
    pub fn release_mut(&mut self, cat_no: &str) -> Option<&mut Release> {
        self.releases.get_mut(cat_no)
    }

    /// Number of releases in the catalogue.
    pub fn release_count(&self) -> usize {
        self.releases.len()
    }

    /// Number of tracks across all releases.
    pub fn track_count(&self) -> usize {
        self.releases
            .values()
            .map(|release| release.tracks().len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{Contract, Split, Track};
    use std::collections::BTreeMap;

    fn make_release(cat_no: &str, track_count: usize) -> Release {
        let tracks = (0..track_count)
            .map(|i| Track::new(format!("track-{i}"), Split::single("test-artist-name-1")))
            .collect();
        Release::new(
            cat_no,
            BTreeMap::new(),
            tracks,
            Contract::new(50.0, 0.0).unwrap(),
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn test_add_and_look_up_release() {
        let mut catalogue = Catalogue::new();
        catalogue.add_release(make_release("CAT001", 2)).unwrap();

        assert!(catalogue.release("CAT001").is_some());
        assert!(catalogue.release("CAT002").is_none());
    }

    #[test]
    fn test_duplicate_catalogue_number_rejected() {
        let mut catalogue = Catalogue::new();
        catalogue.add_release(make_release("CAT001", 1)).unwrap();

        let err = catalogue.add_release(make_release("CAT001", 1)).unwrap_err();
        let err = err.downcast::<CatalogueError>().unwrap();
        assert!(matches!(err, CatalogueError::DuplicateRelease { .. }));
        assert_eq!(catalogue.release_count(), 1);
    }

    #[test]
    fn test_counts() {
        let mut catalogue = Catalogue::new();
        assert_eq!(catalogue.release_count(), 0);

        catalogue.add_release(make_release("CAT001", 2)).unwrap();
        catalogue.add_release(make_release("CAT002", 3)).unwrap();

        assert_eq!(catalogue.release_count(), 2);
        assert_eq!(catalogue.track_count(), 5);
    }
}
