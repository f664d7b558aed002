use std::sync::Arc;

use crate::storage::FileStorage;
use crate::store::Store;

/// Shared per-worker application data.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub files: FileStorage,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, files: FileStorage, max_upload_bytes: usize) -> Self {
        Self { store, files, max_upload_bytes }
    }

    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }
}
