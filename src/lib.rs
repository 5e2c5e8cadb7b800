#![doc(test(attr(deny(warnings))))]

//! Ledger Core is a single-file personal finance ledger: it records income
//! and expense entries, keeps them in insertion order, and mirrors the full
//! ledger to a JSON file after every change.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Ledger Core tracing initialized.");
    });
}
