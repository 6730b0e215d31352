//! Register transactions and tags

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::amount::Amount;

/// Whether a transaction brings money in or out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => f.write_str("income"),
            Self::Expense => f.write_str("expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "ingreso" | "ingresos" => Ok(Self::Income),
            "expense" | "egreso" | "egresos" => Ok(Self::Expense),
            other => Err(format!(
                "Unknown transaction kind '{}' (expected income or expense)",
                other
            )),
        }
    }
}

/// A single register entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Six-digit zero-padded identifier ("000042")
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    /// Always non-negative; direction comes from `kind`
    pub amount: Amount,
    #[serde(rename = "type", alias = "kind")]
    pub kind: TransactionKind,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Fields supplied when recording a new transaction; id and date are assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub title: String,
    pub amount: Amount,
    pub kind: TransactionKind,
    pub payment_method: String,
    pub tag: String,
    pub user: Option<String>,
    pub description: Option<String>,
}

impl Transaction {
    /// Validate the transaction
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err(format!("Transaction {} has an empty title", self.id));
        }
        if self.amount.is_negative() {
            return Err(format!(
                "Transaction {} has a negative amount; use the expense type instead",
                self.id
            ));
        }
        Ok(())
    }

    /// Amount with sign applied (expenses negative)
    pub fn signed_amount(&self) -> Amount {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// A label transactions are filed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", alias = "kind")]
    pub kind: TransactionKind,
}
