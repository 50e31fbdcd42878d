//! Application state for the web layer.

use std::sync::Arc;

use crate::domain::TrackedService;
use crate::render::BoardRenderer;
use crate::store::SnapshotStore;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
pub struct AppState<S> {
    /// Source of arrival estimates (DataMall in production)
    pub source: Arc<S>,

    /// Services shown on the board, in display order
    pub tracked: Arc<[TrackedService]>,

    /// Latest published snapshot
    pub store: SnapshotStore,

    /// Turns snapshots into images
    pub renderer: Arc<dyn BoardRenderer>,
}

impl<S> AppState<S> {
    /// Create a new app state with an initial, unrefreshed snapshot.
    pub fn new(
        source: S,
        tracked: Vec<TrackedService>,
        renderer: impl BoardRenderer + 'static,
    ) -> Self {
        let store = SnapshotStore::new(&tracked);
        Self {
            source: Arc::new(source),
            tracked: tracked.into(),
            store,
            renderer: Arc::new(renderer),
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            tracked: Arc::clone(&self.tracked),
            store: self.store.clone(),
            renderer: Arc::clone(&self.renderer),
        }
    }
}
