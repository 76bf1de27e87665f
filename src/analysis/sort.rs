// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Transaction;
use std::cmp::Ordering;

/// Newest calendar date first, then most recently created first.
///
/// Records without `created_at` sort after stamped ones on the same date, which
/// keeps the comparator a total order.
pub fn newest_first(a: &Transaction, b: &Transaction) -> Ordering {
    b.date
        .cmp(&a.date)
        .then_with(|| b.created_at.cmp(&a.created_at))
}

pub fn sort_transactions(mut txs: Vec<Transaction>) -> Vec<Transaction> {
    txs.sort_by(newest_first);
    txs
}
