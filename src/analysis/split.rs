// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

/// 50/30/20 allocation of an income amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IncomeSplit {
    pub income: Decimal,
    pub needs: Decimal,
    pub wants: Decimal,
    pub savings: Decimal,
}

pub fn split_income(income: Decimal) -> IncomeSplit {
    IncomeSplit {
        income,
        needs: income * Decimal::new(50, 2),
        wants: income * Decimal::new(30, 2),
        savings: income * Decimal::new(20, 2),
    }
}
