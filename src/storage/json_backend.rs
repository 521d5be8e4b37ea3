//! Filesystem-backed JSON persistence for the two ledger slots.
//!
//! Each slot is one human-readable JSON file in the data directory, written
//! atomically by staging to a temporary file and renaming over the target.
//! Loads are defensive: a missing file is an empty slot, and the serde
//! shapes tolerate fields dropped or renamed by earlier app versions.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::domain::{Fund, Transaction};
use crate::errors::LedgerError;
use crate::storage::StorageBackend;

const SLOT_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";
const TRANSACTIONS_SLOT: &str = "transactions";
const FUNDS_SLOT: &str = "funds";

/// JSON storage rooted at a data directory.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    data_dir: PathBuf,
}

impl JsonStorage {
    /// Creates storage at the given directory, or at the platform data
    /// directory when `None`.
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self, LedgerError> {
        let dir = data_dir.unwrap_or_else(default_data_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self { data_dir: dir })
    }

    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.data_dir.join(format!("{slot}.{SLOT_EXTENSION}"))
    }

    fn save_slot<T: Serialize>(&self, slot: &str, records: &[T]) -> Result<(), LedgerError> {
        let path = self.slot_path(slot);
        let json = serde_json::to_string_pretty(records)?;
        write_atomic(&path, &json)
    }

    fn load_slot<T: DeserializeOwned>(&self, slot: &str) -> Result<Vec<T>, LedgerError> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }
}

impl StorageBackend for JsonStorage {
    fn save_transactions(&self, transactions: &[Transaction]) -> Result<(), LedgerError> {
        self.save_slot(TRANSACTIONS_SLOT, transactions)
    }

    fn load_transactions(&self) -> Result<Vec<Transaction>, LedgerError> {
        self.load_slot(TRANSACTIONS_SLOT)
    }

    fn save_funds(&self, funds: &[Fund]) -> Result<(), LedgerError> {
        self.save_slot(FUNDS_SLOT, funds)
    }

    fn load_funds(&self) -> Result<Vec<Fund>, LedgerError> {
        self.load_slot(FUNDS_SLOT)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("billetera-clara")
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Stages the payload to a temporary file, then renames over the target so
/// a failed write never clobbers the previous slot contents.
fn write_atomic(path: &Path, data: &str) -> Result<(), LedgerError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}
