//! Domain models for the ledger: transactions and balance summaries.

pub mod summary;
pub mod transaction;

pub use summary::{BalanceStatus, Summary};
pub use transaction::{Transaction, TransactionKind};
