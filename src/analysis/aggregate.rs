// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{ExpenseCategory, Transaction, TransactionType};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

pub const UNCATEGORIZED: &str = "(uncategorized)";

/// Totals derived from one snapshot in a single pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Aggregates {
    pub balance: Decimal,
    pub total_spent: Decimal,
    pub category_totals: BTreeMap<String, Decimal>,
}

impl Aggregates {
    pub fn spent_on(&self, category: ExpenseCategory) -> Decimal {
        self.category_totals
            .get(category.as_str())
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Positive category totals, largest first, for the spending chart.
    pub fn chart_data(&self) -> Vec<(String, Decimal)> {
        let mut items: Vec<(String, Decimal)> = self
            .category_totals
            .iter()
            .filter(|(_, v)| **v > Decimal::ZERO)
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        items
    }
}

// Saturates at Decimal::MIN/MAX instead of panicking on overflow.
fn add_or_saturate(acc: Decimal, delta: Decimal, id: &str) -> Decimal {
    acc.checked_add(delta).unwrap_or_else(|| {
        tracing::warn!("running total overflowed at transaction {}, saturating", id);
        if delta.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}

pub fn aggregate(txs: &[Transaction]) -> Aggregates {
    let mut agg = Aggregates::default();
    for t in txs {
        match t.r#type {
            TransactionType::Income => {
                agg.balance = add_or_saturate(agg.balance, t.amount, &t.id);
            }
            TransactionType::Expense => {
                agg.balance = add_or_saturate(agg.balance, -t.amount, &t.id);
                agg.total_spent = add_or_saturate(agg.total_spent, t.amount, &t.id);
                let key = match t.category.parse::<ExpenseCategory>() {
                    Ok(c) => c.as_str().to_string(),
                    Err(_) => {
                        tracing::warn!(
                            "transaction {} has unknown expense category '{}'",
                            t.id,
                            t.category
                        );
                        UNCATEGORIZED.to_string()
                    }
                };
                let slot = agg.category_totals.entry(key).or_insert(Decimal::ZERO);
                *slot = add_or_saturate(*slot, t.amount, &t.id);
            }
        }
    }
    agg
}
