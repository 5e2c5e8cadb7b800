//! Core ledger state management.

pub mod ledger_store;

pub use ledger_store::LedgerStore;
