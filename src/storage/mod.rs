pub mod json_backend;

use std::path::Path;

use crate::{errors::LedgerError, ledger::LedgerStore};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends capable of storing ledger
/// snapshots. The ledger core never talks to the filesystem directly.
pub trait StorageBackend: Send + Sync {
    fn save(&self, store: &LedgerStore, name: &str) -> Result<()>;
    fn load(&self, name: &str) -> Result<LedgerStore>;
    fn list_backups(&self, name: &str) -> Result<Vec<String>>;
    fn backup(&self, store: &LedgerStore, name: &str, note: Option<&str>) -> Result<()>;
    fn restore(&self, name: &str, backup_name: &str) -> Result<LedgerStore>;

    /// Optional helpers for ad-hoc file operations. Default implementations
    /// forward to the JSON codec when not overridden.
    fn save_to_path(&self, store: &LedgerStore, path: &Path) -> Result<()> {
        json_backend::save_store_to_path(store, path)
    }

    fn load_from_path(&self, path: &Path) -> Result<LedgerStore> {
        json_backend::load_store_from_path(path)
    }
}

pub use json_backend::JsonStorage;
