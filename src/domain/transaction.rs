//! Domain models for ledger transactions.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{fresh_id, Identifiable};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Enumerates the direction of a recorded movement of money.
pub enum TransactionKind {
    Income,
    Expense,
    Saving,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
            TransactionKind::Saving => "Saving",
        };
        f.write_str(label)
    }
}

/// An immutable record of money moving in, out, or into a savings fund.
///
/// Serialized field names match the JSON shape persisted by the original
/// web client, so existing data loads unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fund_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_budget_id: Option<String>,
}

impl Identifiable for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A candidate transaction lacking a generated identifier.
///
/// Validation of the amount (positive, finite, within available balance)
/// belongs to the caller; see [`crate::core::validate`].
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    pub date: DateTime<Utc>,
    pub description: String,
    pub fund_id: Option<String>,
    pub sub_budget_id: Option<String>,
}

impl TransactionDraft {
    pub fn new(kind: TransactionKind, amount: f64, category: impl Into<String>) -> Self {
        Self {
            kind,
            amount,
            category: category.into(),
            date: Utc::now(),
            description: String::new(),
            fund_id: None,
            sub_budget_id: None,
        }
    }

    pub fn income(amount: f64, category: impl Into<String>) -> Self {
        Self::new(TransactionKind::Income, amount, category)
    }

    pub fn expense(amount: f64, category: impl Into<String>) -> Self {
        Self::new(TransactionKind::Expense, amount, category)
    }

    /// Savings contributions carry a fixed sentinel category.
    pub fn saving(amount: f64, fund_id: impl Into<String>) -> Self {
        Self::new(TransactionKind::Saving, amount, "Ahorro").with_fund(fund_id)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_fund(mut self, fund_id: impl Into<String>) -> Self {
        self.fund_id = Some(fund_id.into());
        self
    }

    pub fn with_sub_budget(mut self, sub_budget_id: impl Into<String>) -> Self {
        self.sub_budget_id = Some(sub_budget_id.into());
        self
    }

    pub fn at(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Materializes the draft into a transaction with a fresh identifier.
    /// Normally the ledger does this; it is public for tests and tooling
    /// that build log fixtures directly.
    pub fn into_transaction(self) -> Transaction {
        Transaction {
            id: fresh_id(),
            kind: self.kind,
            amount: self.amount,
            category: self.category,
            date: self.date,
            description: self.description,
            fund_id: self.fund_id,
            sub_budget_id: self.sub_budget_id,
        }
    }
}
