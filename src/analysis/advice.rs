// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analysis::aggregate::Aggregates;
use crate::models::ExpenseCategory;
use rust_decimal::Decimal;
use serde::Serialize;

pub const FOOD_TIP: &str = "Spending high on Food. Try cooking or cheaper spots?";
pub const TRANSPORT_TIP: &str = "Transport costs are adding up. Can you walk short distances?";
pub const ENTERTAINMENT_TIP: &str = "Cut back on Entertainment to boost savings.";
pub const LOW_BALANCE_TIP: &str = "Balance is low! Keep 200 ₵ for emergencies.";
pub const INVEST_TIP: &str = "Great balance! Consider investing 50 ₵.";
pub const BALANCED_MESSAGE: &str = "Good job! Spending looks balanced.";
pub const REQUEST_SUGGESTION: &str = "Request 400 ₵ from parents next week.";

// (category, share of total spend above which the tip fires, tip)
const SHARE_RULES: [(ExpenseCategory, i64, &str); 3] = [
    (ExpenseCategory::Food, 40, FOOD_TIP),
    (ExpenseCategory::Transport, 30, TRANSPORT_TIP),
    (ExpenseCategory::Entertainment, 15, ENTERTAINMENT_TIP),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Advice {
    pub tips: Vec<String>,
    pub request_suggestion: Option<String>,
}

impl Advice {
    /// True when neither the spending chart nor the advice panel has content.
    pub fn nothing_to_show(&self, total_spent: Decimal) -> bool {
        total_spent.is_zero() && self.request_suggestion.is_none()
    }

    /// The message shown in place of tips when no rule fired.
    pub fn fallback(&self) -> Option<&'static str> {
        self.tips.is_empty().then_some(BALANCED_MESSAGE)
    }

    /// Lines to display: the tips, or the fallback message when none fired.
    pub fn display_lines(&self) -> Vec<&str> {
        match self.fallback() {
            Some(msg) => vec![msg],
            None => self.tips.iter().map(String::as_str).collect(),
        }
    }
}

pub fn advise(agg: &Aggregates) -> Advice {
    let mut tips = Vec::new();
    if agg.total_spent > Decimal::ZERO {
        for (category, pct, tip) in SHARE_RULES {
            let share = agg.spent_on(category) / agg.total_spent;
            if share > Decimal::new(pct, 2) {
                tips.push(tip.to_string());
            }
        }
    }

    if agg.balance < Decimal::from(100) {
        tips.push(LOW_BALANCE_TIP.to_string());
    } else if agg.balance > Decimal::from(500) {
        tips.push(INVEST_TIP.to_string());
    }

    let request_suggestion =
        (agg.balance < Decimal::from(150)).then(|| REQUEST_SUGGESTION.to_string());

    Advice {
        tips,
        request_suggestion,
    }
}
