//! Core data types for the recur-scan system.

use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction identifier, either numeric or free-form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionId {
    Int(i64),
    Str(String),
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionId::Int(id) => write!(f, "{id}"),
            TransactionId::Str(id) => f.write_str(id),
        }
    }
}

impl From<i64> for TransactionId {
    fn from(id: i64) -> Self {
        TransactionId::Int(id)
    }
}

impl From<&str> for TransactionId {
    fn from(id: &str) -> Self {
        TransactionId::Str(id.to_string())
    }
}

impl From<String> for TransactionId {
    fn from(id: String) -> Self {
        TransactionId::Str(id)
    }
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| Error::invalid_date(value, e))
}

/// A single transaction from a user's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier (not used in feature computation).
    pub id: TransactionId,
    /// Owning user.
    pub user_id: String,
    /// Vendor / merchant name.
    pub name: String,
    /// Amount in currency units (assumed non-negative).
    pub amount: f64,
    /// Calendar date of the transaction.
    pub date: NaiveDate,
}

impl Transaction {
    /// Create a new transaction.
    pub fn new(
        id: impl Into<TransactionId>,
        user_id: impl Into<String>,
        name: impl Into<String>,
        amount: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            name: name.into(),
            amount,
            date,
        }
    }

    /// Create a new transaction from an ISO date string.
    pub fn parse(
        id: impl Into<TransactionId>,
        user_id: impl Into<String>,
        name: impl Into<String>,
        amount: f64,
        date: &str,
    ) -> Result<Self> {
        Ok(Self::new(id, user_id, name, amount, parse_date(date)?))
    }

    /// Calendar month number (1-12).
    #[inline]
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Day-of-week index, 0 = Monday through 6 = Sunday.
    #[inline]
    pub fn weekday(&self) -> u32 {
        self.date.weekday().num_days_from_monday()
    }
}
