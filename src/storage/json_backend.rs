use chrono::Utc;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::errors::LedgerError;
use crate::ledger::{LedgerStore, CURRENT_SCHEMA_VERSION};
use crate::utils::paths;

use super::{Result, StorageBackend};

const BACKUP_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const DEFAULT_RETENTION: usize = 5;

/// Snapshot persistence for [`LedgerStore`] as pretty-printed JSON files,
/// with timestamped backups pruned to a retention limit.
#[derive(Clone)]
pub struct JsonStorage {
    ledgers_dir: PathBuf,
    backups_dir: PathBuf,
    retention: usize,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>, retention: Option<usize>) -> Result<Self> {
        let root = root.unwrap_or_else(paths::app_data_dir);
        paths::ensure_dir(&root)?;
        let ledgers_dir = paths::ledgers_dir_in(&root);
        let backups_dir = paths::backups_dir_in(&root);
        paths::ensure_dir(&ledgers_dir)?;
        paths::ensure_dir(&backups_dir)?;
        Ok(Self {
            ledgers_dir,
            backups_dir,
            retention: retention.unwrap_or(DEFAULT_RETENTION).max(1),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None, None)
    }

    pub fn ledger_path(&self, name: &str) -> PathBuf {
        self.ledgers_dir
            .join(format!("{}.json", canonical_name(name)))
    }

    fn backup_dir(&self, name: &str) -> PathBuf {
        self.backups_dir.join(canonical_name(name))
    }

    fn prune_backups(&self, name: &str) -> Result<()> {
        let mut backups = self.backup_files(name)?;
        backups.sort();
        while backups.len() > self.retention {
            let oldest = backups.remove(0);
            fs::remove_file(&oldest)?;
        }
        Ok(())
    }

    fn backup_files(&self, name: &str) -> Result<Vec<PathBuf>> {
        let dir = self.backup_dir(name);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut files = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some(BACKUP_EXTENSION) {
                files.push(path);
            }
        }
        Ok(files)
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, store: &LedgerStore, name: &str) -> Result<()> {
        save_store_to_path(store, &self.ledger_path(name))
    }

    fn load(&self, name: &str) -> Result<LedgerStore> {
        let path = self.ledger_path(name);
        if !path.exists() {
            return Err(LedgerError::Storage(format!(
                "ledger `{}` not found at {}",
                name,
                path.display()
            )));
        }
        load_store_from_path(&path)
    }

    fn list_backups(&self, name: &str) -> Result<Vec<String>> {
        let mut stems: Vec<String> = self
            .backup_files(name)?
            .iter()
            .filter_map(|path| path.file_stem().and_then(|stem| stem.to_str()))
            .map(str::to_string)
            .collect();
        stems.sort_by(|a, b| b.cmp(a));
        Ok(stems)
    }

    fn backup(&self, store: &LedgerStore, name: &str, note: Option<&str>) -> Result<()> {
        let dir = self.backup_dir(name);
        paths::ensure_dir(&dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let mut file_stem = format!("{}_{}", canonical_name(name), timestamp);
        if let Some(label) = sanitize_backup_note(note) {
            file_stem.push('_');
            file_stem.push_str(&label);
        }
        let path = dir.join(format!("{}.{}", file_stem, BACKUP_EXTENSION));
        let json = serde_json::to_string_pretty(store)?;
        write_atomic(&path, &json)?;
        self.prune_backups(name)
    }

    fn restore(&self, name: &str, backup_name: &str) -> Result<LedgerStore> {
        let path = self
            .backup_dir(name)
            .join(format!("{}.{}", backup_name, BACKUP_EXTENSION));
        if !path.exists() {
            return Err(LedgerError::Storage(format!(
                "backup `{}` not found for ledger `{}`",
                backup_name, name
            )));
        }
        load_store_from_path(&path)
    }
}

/// Writes the snapshot atomically by staging to a temporary file.
pub fn save_store_to_path(store: &LedgerStore, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(store)?;
    write_atomic(path, &json)
}

/// Loads a snapshot, rejecting files written by a newer schema.
pub fn load_store_from_path(path: &Path) -> Result<LedgerStore> {
    let data = fs::read_to_string(path)?;
    let store: LedgerStore = serde_json::from_str(&data)?;
    if store.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(LedgerError::Storage(format!(
            "snapshot `{}` is from a newer schema version ({} > {})",
            path.display(),
            store.schema_version,
            CURRENT_SCHEMA_VERSION
        )));
    }
    Ok(store)
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, data)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Lowercased alphanumeric slug used for file names.
fn canonical_name(name: &str) -> String {
    name.trim()
        .to_ascii_lowercase()
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}

fn sanitize_backup_note(note: Option<&str>) -> Option<String> {
    let cleaned = canonical_name(note?);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
