// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analysis::split_income;
use crate::models::MAX_AMOUNT;
use crate::utils::{fmt_money, get_currency_symbol, maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Result, bail};
use rusqlite::Connection;

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let Some(raw) = sub.get_one::<String>("amount") else {
        bail!("amount is required");
    };
    let amount = parse_decimal(raw)?;
    if amount.is_sign_negative() && !amount.is_zero() {
        bail!("Income amount cannot be negative");
    }
    if amount > MAX_AMOUNT {
        bail!("Income amount {} exceeds the maximum of {}", amount, MAX_AMOUNT);
    }
    let s = split_income(amount);
    if !maybe_print_json(json_flag, jsonl_flag, &s)? {
        let symbol = get_currency_symbol(conn)?;
        let rows = vec![
            vec!["Needs (50%)".into(), "Rent, food, bills".into(), fmt_money(&s.needs, &symbol)],
            vec!["Wants (30%)".into(), "Shopping, fun".into(), fmt_money(&s.wants, &symbol)],
            vec![
                "Savings (20%)".into(),
                "Investments, debt".into(),
                fmt_money(&s.savings, &symbol),
            ],
        ];
        println!("Income: {}", fmt_money(&s.income, &symbol));
        println!("{}", pretty_table(&["Bucket", "For", "Amount"], rows));
    }
    Ok(())
}
