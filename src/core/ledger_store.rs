//! The Ledger Store: in-memory transaction sequence mirrored to one file.

use std::path::{Path, PathBuf};

use crate::domain::{Summary, Transaction, TransactionKind};
use crate::errors::Result;
use crate::storage::json_backend;

/// Owns the ordered transaction sequence and its durable JSON mirror.
///
/// Every mutation appends (or clears) in memory and then synchronously
/// rewrites the whole file. Reads never touch the disk.
pub struct LedgerStore {
    path: PathBuf,
    transactions: Vec<Transaction>,
}

impl LedgerStore {
    /// Opens the store backed by `path`.
    ///
    /// A missing file starts an empty ledger. An unreadable or structurally
    /// invalid file also starts an empty ledger: availability wins over
    /// data-loss detection here, and the file stays untouched until the next
    /// mutation overwrites it. The recovery is logged so it can be noticed.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let transactions = if path.exists() {
            match json_backend::load_transactions(&path) {
                Ok(transactions) => transactions,
                Err(err) => {
                    tracing::warn!(
                        "starting with an empty ledger; could not read {}: {err}",
                        path.display()
                    );
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };
        Self { path, transactions }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records an income entry stamped with the current local time.
    pub fn add_income(&mut self, amount: f64, description: impl Into<String>) -> Result<()> {
        self.record(Transaction::new(TransactionKind::Income, amount, description))
    }

    /// Records an expense entry stamped with the current local time.
    pub fn add_expense(&mut self, amount: f64, description: impl Into<String>) -> Result<()> {
        self.record(Transaction::new(TransactionKind::Expense, amount, description))
    }

    /// Appends a prepared entry and persists the full sequence.
    pub fn record(&mut self, transaction: Transaction) -> Result<()> {
        self.transactions.push(transaction);
        self.persist()
    }

    /// All entries in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Sums income and expenses over the full ledger. Pure read.
    pub fn summary(&self) -> Summary {
        self.transactions
            .iter()
            .fold(Summary::default(), |mut summary, txn| {
                match txn.kind {
                    TransactionKind::Income => summary.total_income += txn.amount,
                    TransactionKind::Expense => summary.total_expenses += txn.amount,
                }
                summary
            })
    }

    /// Discards every entry and persists the empty sequence.
    ///
    /// The caller is responsible for confirmation; this clear is
    /// unconditional and irrecoverable.
    pub fn clear_all(&mut self) -> Result<()> {
        self.transactions.clear();
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        json_backend::save_transactions(&self.path, &self.transactions)?;
        tracing::debug!(
            "persisted {} transaction(s) to {}",
            self.transactions.len(),
            self.path.display()
        );
        Ok(())
    }
}
