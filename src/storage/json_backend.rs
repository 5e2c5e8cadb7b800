//! Whole-file JSON persistence for the transaction sequence.
//!
//! Every save rewrites the complete file: the ledger is small by design and
//! the durable copy must always mirror the in-memory sequence.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::Transaction;
use crate::errors::LedgerError;

const TMP_SUFFIX: &str = "tmp";

/// Loads the full transaction sequence from `path`.
///
/// Errors cover both unreadable files and structurally invalid content; the
/// caller decides whether that is fatal (see `LedgerStore::open`).
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>, LedgerError> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| LedgerError::Storage(err.to_string()))
}

/// Rewrites `path` with the full transaction sequence as indented JSON.
///
/// The content lands in a sibling tmp file first and is renamed over the
/// target, so a failed write never leaves a half-written ledger behind.
pub fn save_transactions(path: &Path, transactions: &[Transaction]) -> Result<(), LedgerError> {
    let json = serde_json::to_string_pretty(transactions)
        .map_err(|err| LedgerError::Storage(err.to_string()))?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
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

fn write_atomic(path: &Path, data: &str) -> Result<(), LedgerError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
