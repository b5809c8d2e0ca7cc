use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::LedgerError;

const DEFAULT_DIR_NAME: &str = ".edufund_core";
const LEDGER_DIR: &str = "ledgers";
const BACKUP_DIR: &str = "backups";

/// Returns the application-specific data directory, defaulting to
/// `~/.edufund_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("EDUFUND_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory holding managed ledger snapshots under `base`.
pub fn ledgers_dir_in(base: &Path) -> PathBuf {
    base.join(LEDGER_DIR)
}

/// Directory holding backup snapshots under `base`.
pub fn backups_dir_in(base: &Path) -> PathBuf {
    base.join(BACKUP_DIR)
}

pub fn ensure_dir(path: &Path) -> Result<(), LedgerError> {
    fs::create_dir_all(path)?;
    Ok(())
}
