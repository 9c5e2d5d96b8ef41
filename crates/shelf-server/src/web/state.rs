//! Shared server state

use tokio::sync::Mutex;

use shelf_core::Store;

/// The shared application state, created once at startup and passed to all
/// handlers
///
/// The store owns a single SQLite connection, so handlers take it through a
/// mutex. Last write wins; there is no conflict detection.
pub struct AppState {
    pub store: Mutex<Store>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }
}
