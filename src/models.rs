// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Largest amount accepted for a single entry.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Errors raised when an entry does not satisfy the record invariants.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("unknown transaction type '{0}' (use income|expense)")]
    UnknownType(String),

    #[error("amount {0} is negative; direction is carried by the type")]
    NegativeAmount(Decimal),

    #[error("amount {0} exceeds the maximum of {max}", max = MAX_AMOUNT)]
    AmountTooLarge(Decimal),

    #[error("'{category}' is not a valid {kind} category")]
    InvalidCategory {
        kind: TransactionType,
        category: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// Category names accepted for this type, in display order.
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            TransactionType::Income => IncomeCategory::NAMES,
            TransactionType::Expense => ExpenseCategory::NAMES,
        }
    }

    pub fn accepts(&self, category: &str) -> bool {
        match self {
            TransactionType::Income => category.parse::<IncomeCategory>().is_ok(),
            TransactionType::Expense => category.parse::<ExpenseCategory>().is_ok(),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(ModelError::UnknownType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Transport,
    #[serde(rename = "Data/Airtime")]
    DataAirtime,
    Entertainment,
    #[serde(rename = "Savings/Invest")]
    SavingsInvest,
    Other,
}

impl ExpenseCategory {
    pub const NAMES: &'static [&'static str] = &[
        "Food",
        "Transport",
        "Data/Airtime",
        "Entertainment",
        "Savings/Invest",
        "Other",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::DataAirtime => "Data/Airtime",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::SavingsInvest => "Savings/Invest",
            ExpenseCategory::Other => "Other",
        }
    }
}

impl FromStr for ExpenseCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Food" => Ok(ExpenseCategory::Food),
            "Transport" => Ok(ExpenseCategory::Transport),
            "Data/Airtime" => Ok(ExpenseCategory::DataAirtime),
            "Entertainment" => Ok(ExpenseCategory::Entertainment),
            "Savings/Invest" => Ok(ExpenseCategory::SavingsInvest),
            "Other" => Ok(ExpenseCategory::Other),
            _ => Err(ModelError::InvalidCategory {
                kind: TransactionType::Expense,
                category: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncomeCategory {
    Allowance,
    Salary,
    Gift,
    Other,
}

impl IncomeCategory {
    pub const NAMES: &'static [&'static str] = &["Allowance", "Salary", "Gift", "Other"];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeCategory::Allowance => "Allowance",
            IncomeCategory::Salary => "Salary",
            IncomeCategory::Gift => "Gift",
            IncomeCategory::Other => "Other",
        }
    }
}

impl FromStr for IncomeCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Allowance" => Ok(IncomeCategory::Allowance),
            "Salary" => Ok(IncomeCategory::Salary),
            "Gift" => Ok(IncomeCategory::Gift),
            "Other" => Ok(IncomeCategory::Other),
            _ => Err(ModelError::InvalidCategory {
                kind: TransactionType::Income,
                category: s.to_string(),
            }),
        }
    }
}

/// A single income or expense record as it exists in a user's snapshot.
///
/// `category` stays a plain string: snapshots may carry legacy values that no
/// longer parse, and the analysis stages must still accept them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub uid: String,
    #[serde(rename = "type")]
    pub r#type: TransactionType,
    pub amount: Decimal,
    pub category: String,
    pub note: Option<String>,
    pub date: NaiveDate,
    pub created_at: Option<DateTime<Utc>>,
}

/// Fields supplied by the entry flow, before an id and owner are attached.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub r#type: TransactionType,
    pub amount: Decimal,
    pub category: String,
    pub note: Option<String>,
    pub date: NaiveDate,
}

impl NewTransaction {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.amount.is_sign_negative() && !self.amount.is_zero() {
            return Err(ModelError::NegativeAmount(self.amount));
        }
        if self.amount > MAX_AMOUNT {
            return Err(ModelError::AmountTooLarge(self.amount));
        }
        if !self.r#type.accepts(&self.category) {
            return Err(ModelError::InvalidCategory {
                kind: self.r#type,
                category: self.category.clone(),
            });
        }
        Ok(())
    }

    /// Validate and attach the owner, client id, and creation timestamp.
    pub fn into_transaction(
        self,
        id: String,
        uid: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Transaction, ModelError> {
        self.validate()?;
        Ok(Transaction {
            id,
            uid: uid.to_string(),
            r#type: self.r#type,
            amount: self.amount,
            category: self.category,
            note: self.note.filter(|n| !n.trim().is_empty()),
            date: self.date,
            created_at: Some(created_at),
        })
    }
}
