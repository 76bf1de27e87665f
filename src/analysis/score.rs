// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Transaction, TransactionType};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

pub const BASE_SCORE: i32 = 500;
pub const MIN_SCORE: i32 = 300;
pub const MAX_SCORE: i32 = 850;

const SAVINGS: &str = "Savings/Invest";
const ENTERTAINMENT: &str = "Entertainment";

/// Score change contributed by a single record. First matching rule wins.
pub fn score_delta(t: &Transaction) -> i32 {
    match t.r#type {
        TransactionType::Income => 20,
        TransactionType::Expense => {
            if t.category == SAVINGS {
                40
            } else if t.amount > Decimal::from(200) {
                -20
            } else if t.category == ENTERTAINMENT && t.amount > Decimal::from(100) {
                -10
            } else {
                5
            }
        }
    }
}

/// Heuristic credit score over the full history, clamped to [300, 850].
pub fn credit_score(txs: &[Transaction]) -> i32 {
    // i64 so an arbitrarily long history cannot overflow before clamping
    let raw = txs
        .iter()
        .fold(BASE_SCORE as i64, |acc, t| acc + score_delta(t) as i64);
    raw.clamp(MIN_SCORE as i64, MAX_SCORE as i64) as i32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Work")]
    NeedsWork,
}

impl ScoreBand {
    pub fn for_score(score: i32) -> Self {
        if score >= 750 {
            ScoreBand::Excellent
        } else if score >= 650 {
            ScoreBand::Good
        } else if score >= 550 {
            ScoreBand::Fair
        } else {
            ScoreBand::NeedsWork
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
            ScoreBand::NeedsWork => "Needs Work",
        };
        f.write_str(s)
    }
}

/// Position of `score` on the 300..=850 gauge, as a percentage.
pub fn gauge_percent(score: i32) -> u8 {
    let pct = (score - MIN_SCORE) as f64 / (MAX_SCORE - MIN_SCORE) as f64 * 100.0;
    pct.clamp(0.0, 100.0).round() as u8
}
