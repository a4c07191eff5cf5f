//! Read access to the latest catalog snapshot.

use std::sync::Mutex;

use thiserror::Error;

use stockpilot_catalog::CatalogSnapshot;

/// Failure reading the catalog source.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("catalog source unavailable: {0}")]
    Unavailable(String),
}

/// Provides the current catalog snapshot for an evaluation pass.
///
/// Stands in for the surrounding application's product-list fetch; the
/// runner depends only on this seam. Implementations decide freshness, the
/// runner never caches.
pub trait SnapshotReader: Send + Sync + 'static {
    fn latest(&self) -> Result<CatalogSnapshot, SnapshotError>;
}

/// In-memory reader for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemorySnapshotReader {
    inner: Mutex<CatalogSnapshot>,
}

impl InMemorySnapshotReader {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            inner: Mutex::new(snapshot),
        }
    }

    /// Swap in a fresh snapshot; subsequent passes observe it.
    pub fn replace(&self, snapshot: CatalogSnapshot) {
        *self.inner.lock().unwrap() = snapshot;
    }
}

impl SnapshotReader for InMemorySnapshotReader {
    fn latest(&self) -> Result<CatalogSnapshot, SnapshotError> {
        Ok(self.inner.lock().unwrap().clone())
    }
}
