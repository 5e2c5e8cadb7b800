//! Ledger entry model and its persisted wire representation.

use std::fmt;

use chrono::{Local, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Distinguishes money coming in from money going out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// One recorded income or expense event.
///
/// Entries are immutable once created and keep their insertion order in the
/// ledger. The serialized form is fixed: `type`, `amount`, `description`,
/// `date` (`YYYY-MM-DD`) and `time` (`HH:MM:SS`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub description: String,
    #[serde(with = "date_format")]
    pub date: NaiveDate,
    #[serde(with = "time_format")]
    pub time: NaiveTime,
}

impl Transaction {
    /// Creates an entry stamped with the current local date and time.
    pub fn new(kind: TransactionKind, amount: f64, description: impl Into<String>) -> Self {
        let now = Local::now();
        // Sub-second precision never reaches the wire format.
        let time = now.time().with_nanosecond(0).unwrap_or_else(|| now.time());
        Self::recorded_at(kind, amount, description, now.date_naive(), time)
    }

    /// Creates an entry with an explicit creation stamp.
    pub fn recorded_at(
        kind: TransactionKind,
        amount: f64,
        description: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Self {
        Self {
            kind,
            amount,
            description: description.into(),
            date,
            time,
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self.kind, TransactionKind::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self.kind, TransactionKind::Expense)
    }
}

mod date_format {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

mod time_format {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::TIME_FORMAT;

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::{Transaction, TransactionKind};

    fn sample() -> Transaction {
        Transaction::recorded_at(
            TransactionKind::Income,
            1250.5,
            "salary",
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            NaiveTime::from_hms_opt(9, 15, 0).unwrap(),
        )
    }

    #[test]
    fn serializes_with_fixed_field_names_and_formats() {
        let json = serde_json::to_value(sample()).expect("serialize transaction");
        assert_eq!(json["type"], "Income");
        assert_eq!(json["amount"], 1250.5);
        assert_eq!(json["description"], "salary");
        assert_eq!(json["date"], "2024-03-05");
        assert_eq!(json["time"], "09:15:00");
    }

    #[test]
    fn deserializes_wire_records() {
        let raw = r#"{
            "type": "Expense",
            "amount": 40.0,
            "description": "groceries",
            "date": "2024-03-06",
            "time": "18:05:09"
        }"#;
        let txn: Transaction = serde_json::from_str(raw).expect("parse record");
        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.amount, 40.0);
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 3, 6).unwrap());
        assert_eq!(txn.time, NaiveTime::from_hms_opt(18, 5, 9).unwrap());
    }

    #[test]
    fn rejects_malformed_date() {
        let raw = r#"{
            "type": "Income",
            "amount": 10.0,
            "description": "",
            "date": "03/06/2024",
            "time": "18:05:09"
        }"#;
        assert!(serde_json::from_str::<Transaction>(raw).is_err());
    }

    #[test]
    fn kind_display_matches_wire_strings() {
        assert_eq!(TransactionKind::Income.to_string(), "Income");
        assert_eq!(TransactionKind::Expense.to_string(), "Expense");
    }

    #[test]
    fn new_truncates_subsecond_precision() {
        let txn = Transaction::new(TransactionKind::Income, 1.0, "");
        assert_eq!(txn.time.format("%f").to_string(), "000000000");
    }
}
