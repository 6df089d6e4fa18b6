// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Income,
    Expense,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Income => "Income",
            Category::Expense => "Expense",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the literal written to the ledger file (`Income` / `Expense`).
impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Income" => Ok(Category::Income),
            "Expense" => Ok(Category::Expense),
            other => Err(anyhow::anyhow!(
                "Unknown category '{}', expected Income or Expense",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub amount: Decimal, // always > 0, sign lives in `category`
    pub category: Category,
    pub description: String,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        amount: Decimal,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category,
            description: description.into(),
        }
    }
}

/// Display/serialization shape of a record, with the date already rendered
/// in the configured format.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionRow {
    pub date: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

impl TransactionRow {
    pub fn from_transaction(t: &Transaction, date_format: &str) -> Self {
        Self {
            date: t.date.format(date_format).to_string(),
            amount: format!("{:.2}", t.amount),
            category: t.category.to_string(),
            description: t.description.clone(),
        }
    }
}
