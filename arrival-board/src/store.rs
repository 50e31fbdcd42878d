//! The most recent board snapshot.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{Snapshot, TrackedService};
use crate::refresh::{ArrivalSource, refresh_snapshot};

/// Thread-safe holder for the latest snapshot.
///
/// Snapshots are immutable; publishing swaps the shared `Arc`, so a reader
/// always sees a complete snapshot and never a half-refreshed one.
#[derive(Clone)]
pub struct SnapshotStore {
    inner: Arc<RwLock<Arc<Snapshot>>>,
}

impl SnapshotStore {
    /// Create a store holding the initial (never refreshed) snapshot.
    pub fn new(tracked: &[TrackedService]) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(Snapshot::initial(tracked)))),
        }
    }

    /// The latest published snapshot.
    pub async fn current(&self) -> Arc<Snapshot> {
        let guard = self.inner.read().await;
        Arc::clone(&*guard)
    }

    /// Publish a snapshot.
    ///
    /// A snapshot older than the one already held is discarded, so a slow
    /// refresh finishing late cannot roll the board back. Returns whether
    /// the snapshot was stored.
    pub async fn publish(&self, snapshot: Arc<Snapshot>) -> bool {
        let mut guard = self.inner.write().await;
        if snapshot.last_updated < guard.last_updated {
            debug!(
                incoming = ?snapshot.last_updated,
                held = ?guard.last_updated,
                "Discarding stale snapshot"
            );
            return false;
        }
        *guard = snapshot;
        true
    }

    /// Refresh from `source` and publish the result.
    ///
    /// Returns the snapshot this refresh produced, which the caller should
    /// render even if a newer one was published concurrently.
    pub async fn refresh<S: ArrivalSource>(
        &self,
        source: &S,
        tracked: &[TrackedService],
    ) -> Arc<Snapshot> {
        let snapshot = Arc::new(refresh_snapshot(source, tracked).await);
        self.publish(Arc::clone(&snapshot)).await;
        snapshot
    }
}
