//! Persistence backends for the ledger file.

pub mod json_backend;
