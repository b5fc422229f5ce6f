use chatvault::db::DatabaseService;
use chatvault::storage::{KeyValueStore, SledStore};
use std::sync::Arc;
use tempfile::TempDir;

#[allow(dead_code)]
pub fn temp_store() -> (Arc<dyn KeyValueStore>, TempDir) {
    let tmp = TempDir::new().expect("failed to create tempdir");
    let store = SledStore::open(tmp.path().join("vault.db")).expect("failed to open sled store");
    (Arc::new(store), tmp)
}

#[allow(dead_code)]
pub fn temp_service() -> (DatabaseService, Arc<dyn KeyValueStore>, TempDir) {
    let (store, tmp) = temp_store();
    (DatabaseService::new(store.clone()), store, tmp)
}
