mod common;

use ledger_core::core::LedgerStore;
use ledger_core::domain::{BalanceStatus, TransactionKind};
use ledger_core::storage::json_backend;

#[test]
fn reload_yields_identical_sequence() {
    let path = common::setup_data_file();
    let mut store = LedgerStore::open(&path);
    store.add_income(100.0, "salary").expect("add income");
    store.add_expense(40.0, "groceries").expect("add expense");
    store.add_expense(12.5, "coffee").expect("add expense");

    let reloaded = LedgerStore::open(&path);
    assert_eq!(reloaded.transactions(), store.transactions());
    assert_eq!(reloaded.len(), 3);
    assert_eq!(reloaded.transactions()[0].kind, TransactionKind::Income);
    assert_eq!(reloaded.transactions()[2].description, "coffee");
}

#[test]
fn reads_do_not_touch_the_file() {
    let path = common::setup_data_file();
    let mut store = LedgerStore::open(&path);
    store.add_income(75.0, "refund").expect("add income");

    let before = std::fs::read_to_string(&path).expect("read file");
    let first = store.summary();
    let second = store.summary();
    let _ = store.transactions();
    let _ = store.transactions();
    let after = std::fs::read_to_string(&path).expect("read file");

    assert_eq!(first, second);
    assert_eq!(before, after);
}

#[test]
fn each_mutation_is_durable_on_its_own() {
    let path = common::setup_data_file();
    let mut store = LedgerStore::open(&path);

    store.add_income(10.0, "one").expect("add income");
    assert_eq!(LedgerStore::open(&path).len(), 1);

    store.add_expense(2.0, "two").expect("add expense");
    assert_eq!(LedgerStore::open(&path).len(), 2);

    store.clear_all().expect("clear");
    assert!(LedgerStore::open(&path).is_empty());
}

#[test]
fn clear_leaves_an_empty_array_on_disk() {
    let path = common::setup_data_file();
    let mut store = LedgerStore::open(&path);
    store.add_income(5.0, "seed").expect("add income");
    store.clear_all().expect("clear");

    let raw = std::fs::read_to_string(&path).expect("read file");
    assert_eq!(raw.trim(), "[]");
    assert!(json_backend::load_transactions(&path)
        .expect("load")
        .is_empty());
}

#[test]
fn balance_matches_income_minus_expenses_across_reload() {
    let path = common::setup_data_file();
    let mut store = LedgerStore::open(&path);
    for amount in [10.0, 20.0, 30.0] {
        store.add_income(amount, "in").expect("add income");
    }
    for amount in [5.0, 15.0] {
        store.add_expense(amount, "out").expect("add expense");
    }

    let summary = LedgerStore::open(&path).summary();
    assert_eq!(summary.total_income, 60.0);
    assert_eq!(summary.total_expenses, 20.0);
    assert_eq!(summary.balance(), 40.0);
    assert_eq!(summary.status(), BalanceStatus::Saving);
}

#[test]
fn corrupt_file_recovers_to_an_empty_working_store() {
    let path = common::setup_data_file();
    std::fs::write(&path, "[{\"type\": \"Income\"").expect("write corrupt file");

    let mut store = LedgerStore::open(&path);
    assert!(store.is_empty());

    // The first mutation replaces the corrupt content wholesale.
    store.add_income(1.0, "fresh start").expect("add income");
    let reloaded = LedgerStore::open(&path);
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.transactions()[0].description, "fresh start");
}
