//! Rendering helpers for amounts, the transaction table, and the summary.

use crate::domain::{Summary, Transaction};

/// Formats an amount with the currency symbol and two decimals.
pub fn format_amount(amount: f64, symbol: &str) -> String {
    format!("{symbol}{amount:.2}")
}

/// Header line for the transaction table.
pub fn table_header() -> String {
    format!(
        "{:<12} {:<8} {:>12}  {}",
        "Date", "Type", "Amount", "Description"
    )
}

/// One table row per transaction, in the order given.
pub fn table_rows(transactions: &[Transaction], symbol: &str) -> Vec<String> {
    transactions
        .iter()
        .map(|txn| {
            // Width flags only pad `str` arguments, so render the cells first.
            format!(
                "{:<12} {:<8} {:>12}  {}",
                txn.date
                    .format(crate::domain::transaction::DATE_FORMAT)
                    .to_string(),
                txn.kind.to_string(),
                format_amount(txn.amount, symbol),
                txn.description
            )
        })
        .collect()
}

/// The three summary lines: income, expenses, balance.
pub fn summary_lines(summary: &Summary, symbol: &str) -> Vec<String> {
    vec![
        format!(
            "Total income:   {}",
            format_amount(summary.total_income, symbol)
        ),
        format!(
            "Total expenses: {}",
            format_amount(summary.total_expenses, symbol)
        ),
        format!("Balance:        {}", format_amount(summary.balance(), symbol)),
    ]
}
