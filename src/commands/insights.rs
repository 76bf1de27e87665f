// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analysis;
use crate::store;
use crate::utils::{fmt_money, get_currency_symbol, maybe_print_json, pretty_table, require_user};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InsightsView {
    pub total_spent: Decimal,
    pub balance: Decimal,
    pub chart: Vec<(String, Decimal)>,
    pub tips: Vec<String>,
    /// Shown instead of tips when none fired; absent when there is nothing to show.
    pub fallback: Option<&'static str>,
    pub request_suggestion: Option<String>,
    pub nothing_to_show: bool,
}

pub fn build(conn: &Connection, uid: &str) -> Result<InsightsView> {
    let s = analysis::summarize(store::load_snapshot(conn, uid)?);
    let nothing_to_show = s.advice.nothing_to_show(s.aggregates.total_spent);
    Ok(InsightsView {
        total_spent: s.aggregates.total_spent,
        balance: s.aggregates.balance,
        chart: s.aggregates.chart_data(),
        fallback: if nothing_to_show {
            None
        } else {
            s.advice.fallback()
        },
        tips: s.advice.tips,
        request_suggestion: s.advice.request_suggestion,
        nothing_to_show,
    })
}

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let uid = require_user(conn)?;
    let v = build(conn, &uid)?;
    if maybe_print_json(json_flag, jsonl_flag, &v)? {
        return Ok(());
    }
    if v.nothing_to_show {
        println!("Nothing to analyse yet.");
        return Ok(());
    }

    let symbol = get_currency_symbol(conn)?;
    if v.total_spent > Decimal::ZERO {
        let mut rows: Vec<Vec<String>> = v
            .chart
            .iter()
            .map(|(cat, amt)| {
                let share = *amt / v.total_spent * Decimal::from(100);
                vec![
                    cat.clone(),
                    fmt_money(amt, &symbol),
                    format!("{:.0}%", share),
                ]
            })
            .collect();
        rows.push(vec![
            "Total".into(),
            fmt_money(&v.total_spent, &symbol),
            "100%".into(),
        ]);
        println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
    }

    println!("Smart insights:");
    for line in v.tips.iter().map(String::as_str).chain(v.fallback) {
        println!("  • {}", line);
    }
    if let Some(ref s) = v.request_suggestion {
        println!("Suggestion: {}", s);
    }
    Ok(())
}
