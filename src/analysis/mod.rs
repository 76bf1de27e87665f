// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived state for a user's snapshot: ordering, totals, score, and advice.
//!
//! Every function here is pure. Callers re-run [`summarize`] on each new
//! snapshot instead of updating previous results.

pub mod advice;
pub mod aggregate;
pub mod score;
pub mod sort;
pub mod split;

pub use advice::{Advice, advise};
pub use aggregate::{Aggregates, UNCATEGORIZED, aggregate};
pub use score::{ScoreBand, credit_score, gauge_percent, score_delta};
pub use sort::{newest_first, sort_transactions};
pub use split::{IncomeSplit, split_income};

use crate::models::Transaction;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub ordered: Vec<Transaction>,
    pub aggregates: Aggregates,
    pub score: i32,
    pub band: ScoreBand,
    pub advice: Advice,
}

pub fn summarize(snapshot: Vec<Transaction>) -> Summary {
    let ordered = sort_transactions(snapshot);
    let aggregates = aggregate(&ordered);
    let score = credit_score(&ordered);
    let advice = advise(&aggregates);
    Summary {
        ordered,
        aggregates,
        score,
        band: ScoreBand::for_score(score),
        advice,
    }
}
