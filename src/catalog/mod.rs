//! Static control and device catalogs.
//!
//! Both catalogs are embedded in the binary at compile time, loaded once,
//! and read-only afterwards. Lookup is O(1) by exact key. Administrative
//! updates never mutate a live catalog: they build a new [`CatalogSet`] and
//! install it in a [`CatalogStore`], so in-flight resolutions keep the
//! snapshot they started with.

pub mod controls;
pub mod devices;

// Re-export commonly used types
pub use controls::{ControlCatalog, ControlEntry};
pub use devices::{DeviceCatalog, DeviceEntry, Slot, SlotKind};

use std::sync::{Arc, RwLock};

use anyhow::{Context, Result};

/// An immutable snapshot of both catalogs.
///
/// The resolver borrows one of these for the duration of a single
/// resolution; it never observes a catalog mid-update.
#[derive(Debug, Clone)]
pub struct CatalogSet {
    /// Control id -> label/category/redundancy group.
    pub controls: ControlCatalog,
    /// Device id -> display name and slot template.
    pub devices: DeviceCatalog,
}

impl CatalogSet {
    /// Loads the catalogs embedded in the binary.
    pub fn embedded() -> Result<Self> {
        Ok(Self {
            controls: ControlCatalog::embedded().context("failed to load control catalog")?,
            devices: DeviceCatalog::embedded().context("failed to load device catalog")?,
        })
    }
}

/// Process-wide catalog holder with atomic snapshot swap.
///
/// Single writer, many readers: readers take a cheap `Arc` clone via
/// [`snapshot`](Self::snapshot) and are unaffected by a concurrent
/// [`install`](Self::install).
#[derive(Debug)]
pub struct CatalogStore {
    current: RwLock<Arc<CatalogSet>>,
}

impl CatalogStore {
    /// Creates a store holding the given initial snapshot.
    #[must_use]
    pub fn new(set: CatalogSet) -> Self {
        Self {
            current: RwLock::new(Arc::new(set)),
        }
    }

    /// Returns the current snapshot for use by one resolution.
    #[must_use]
    pub fn snapshot(&self) -> Arc<CatalogSet> {
        Arc::clone(&self.current.read().expect("catalog lock poisoned"))
    }

    /// Atomically replaces the snapshot seen by new resolutions.
    pub fn install(&self, set: CatalogSet) {
        *self.current.write().expect("catalog lock poisoned") = Arc::new(set);
    }
}
