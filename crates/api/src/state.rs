use std::sync::Arc;

use catalog_db::store::DocumentStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the store is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Document store handle, opened once at startup.
    pub store: Arc<dyn DocumentStore>,
}
