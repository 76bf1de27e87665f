// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analysis::{self, ScoreBand, gauge_percent};
use crate::models::{Transaction, TransactionType};
use crate::store;
use crate::utils::{fmt_money, get_currency_symbol, maybe_print_json, pretty_table, require_user};
use crate::view::{Tab, TypeFilter, ViewState};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub balance: Decimal,
    pub credit_score: i32,
    pub band: ScoreBand,
    pub gauge_percent: u8,
    pub recent: Vec<Transaction>,
    pub has_more: bool,
}

pub fn build(conn: &Connection, uid: &str, filter: TypeFilter) -> Result<DashboardView> {
    let summary = analysis::summarize(store::load_snapshot(conn, uid)?);
    let view = ViewState::new(Tab::Dashboard, filter);
    Ok(DashboardView {
        balance: summary.aggregates.balance,
        credit_score: summary.score,
        band: summary.band,
        gauge_percent: gauge_percent(summary.score),
        recent: view.visible(&summary.ordered).into_iter().cloned().collect(),
        has_more: view.has_more(&summary.ordered),
    })
}

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let uid = require_user(conn)?;
    let filter = match sub.get_one::<String>("type") {
        Some(s) => s.parse::<TypeFilter>()?,
        None => TypeFilter::All,
    };
    let d = build(conn, &uid, filter)?;
    if maybe_print_json(json_flag, jsonl_flag, &d)? {
        return Ok(());
    }

    let symbol = get_currency_symbol(conn)?;
    println!("Total balance: {}", fmt_money(&d.balance, &symbol));
    println!(
        "Credit score:  {} ({}, {}% of range)",
        d.credit_score, d.band, d.gauge_percent
    );
    if d.recent.is_empty() {
        println!("No transactions yet.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = d
        .recent
        .iter()
        .map(|t| {
            vec![
                t.date.to_string(),
                t.category.clone(),
                t.note.clone().unwrap_or_default(),
                format!("{}{:.2}", sign(t), t.amount),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Category", "Note", "Amount"], rows)
    );
    if d.has_more {
        println!("More in `cedi tx list`.");
    }
    Ok(())
}

fn sign(t: &Transaction) -> &'static str {
    match t.r#type {
        TransactionType::Income => "+",
        TransactionType::Expense => "-",
    }
}
