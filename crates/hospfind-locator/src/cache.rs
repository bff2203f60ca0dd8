//! Once-loaded, explicitly invalidated dataset cache.
//!
//! The first [`DatasetCache::get`] reads and normalizes the file; later calls
//! share the same `Arc`. Nothing reloads implicitly: callers use
//! [`DatasetCache::reload`] or [`DatasetCache::invalidate`]. A failed load is
//! cached as an empty set like any other result.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use hospfind_core::HospitalRecord;

use crate::normalize::load_and_normalize;

pub type SharedRecords = Arc<Vec<HospitalRecord>>;

#[derive(Debug)]
pub struct DatasetCache {
    path: PathBuf,
    records: RwLock<Option<SharedRecords>>,
}

static GLOBAL_CACHE: OnceLock<DatasetCache> = OnceLock::new();

impl DatasetCache {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: RwLock::new(None),
        }
    }

    /// Process-wide cache. `path` is only used by the first caller.
    pub fn global(path: &Path) -> &'static DatasetCache {
        let cache = GLOBAL_CACHE.get_or_init(|| DatasetCache::new(path));
        if cache.path != path {
            tracing::warn!(
                requested = %path.display(),
                active = %cache.path.display(),
                "global dataset cache already bound to a different path"
            );
        }
        cache
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Returns the cached set, loading it on first use.
    pub fn get(&self) -> SharedRecords {
        if let Some(records) = self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Arc::clone(records);
        }

        let mut slot = self.records.write().unwrap_or_else(PoisonError::into_inner);
        // another caller may have loaded while we waited for the write lock
        if let Some(records) = slot.as_ref() {
            return Arc::clone(records);
        }
        let records = Arc::new(load_and_normalize(&self.path));
        *slot = Some(Arc::clone(&records));
        records
    }

    /// Re-reads the source and replaces the cached set.
    pub fn reload(&self) -> SharedRecords {
        let records = Arc::new(load_and_normalize(&self.path));
        *self.records.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&records));
        tracing::info!(
            path = %self.path.display(),
            records = records.len(),
            "hospital dataset reloaded"
        );
        records
    }

    /// Drops the cached set; the next [`DatasetCache::get`] reloads.
    pub fn invalidate(&self) {
        *self.records.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
