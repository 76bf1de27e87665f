// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analysis::{self, split_income};
use crate::models::{NewTransaction, TransactionType};
use crate::store::{self, Feed};
use crate::utils::{
    fmt_money, get_currency_symbol, maybe_print_json, new_transaction_id, parse_date,
    parse_decimal, pretty_table, require_user,
};
use crate::view::{Tab, TypeFilter, ViewState};
use anyhow::{Result, bail};
use chrono::Utc;
use rusqlite::Connection;
use serde::Serialize;
use std::cell::Cell;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

/// Parses and validates the `tx add` arguments into a new entry.
pub fn new_from_args(sub: &clap::ArgMatches) -> Result<NewTransaction> {
    let kind = sub
        .get_one::<String>("type")
        .map(|s| s.as_str())
        .unwrap_or("expense")
        .parse::<TransactionType>()?;
    let Some(amount_raw) = sub.get_one::<String>("amount") else {
        bail!("--amount is required");
    };
    let amount = parse_decimal(amount_raw)?;
    let Some(category) = sub.get_one::<String>("category") else {
        bail!("--category is required");
    };
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => Utc::now().date_naive(),
    };
    let entry = NewTransaction {
        r#type: kind,
        amount,
        category: category.trim().to_string(),
        note: sub.get_one::<String>("note").map(|s| s.trim().to_string()),
        date,
    };
    entry.validate()?;
    Ok(entry)
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let uid = require_user(conn)?;
    let symbol = get_currency_symbol(conn)?;
    let entry = new_from_args(sub)?;
    let t = entry.into_transaction(new_transaction_id(), &uid, Utc::now())?;

    let latest = Cell::new(None);
    let mut feed = Feed::new(conn, &uid);
    feed.subscribe(|snapshot| {
        let s = analysis::summarize(snapshot.to_vec());
        latest.set(Some((s.aggregates.balance, s.score)));
    });
    feed.add(&t)?;
    tracing::info!("recorded {} {} in {}", t.r#type, t.amount, t.category);

    println!(
        "Recorded {} {} ({}) on {} [id {}]",
        t.r#type,
        fmt_money(&t.amount, &symbol),
        t.category,
        t.date,
        t.id
    );
    if let Some((balance, score)) = latest.get() {
        println!(
            "Balance: {}  Credit score: {}",
            fmt_money(&balance, &symbol),
            score
        );
    }
    if t.r#type == TransactionType::Income {
        let s = split_income(t.amount);
        println!(
            "50/30/20: needs {}, wants {}, savings {}",
            fmt_money(&s.needs, &symbol),
            fmt_money(&s.wants, &symbol),
            fmt_money(&s.savings, &symbol)
        );
    }
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let uid = require_user(conn)?;
    let data = query_rows(conn, &uid, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data.into_iter().map(TransactionRow::cells).collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Type", "Category", "Amount", "Note", "ID"],
                rows
            )
        );
    }
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let uid = require_user(conn)?;
    let id = sub.get_one::<String>("id").map(|s| s.trim()).unwrap_or_default();
    let mut local = store::load_snapshot(conn, &uid)?;
    if !local.iter().any(|t| t.id == id) {
        bail!("Transaction '{}' not found", id);
    }
    store::delete_optimistic(conn, &mut local, &uid, id)?;
    let symbol = get_currency_symbol(conn)?;
    let s = analysis::summarize(local);
    println!("Removed transaction {}", id);
    println!(
        "Balance: {}  Credit score: {}",
        fmt_money(&s.aggregates.balance, &symbol),
        s.score
    );
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub r#type: String,
    pub category: String,
    pub amount: String,
    pub note: String,
}

impl TransactionRow {
    fn cells(self) -> Vec<String> {
        vec![
            self.date,
            self.r#type,
            self.category,
            self.amount,
            self.note,
            self.id,
        ]
    }
}

pub fn query_rows(
    conn: &Connection,
    uid: &str,
    sub: &clap::ArgMatches,
) -> Result<Vec<TransactionRow>> {
    let filter = match sub.get_one::<String>("type") {
        Some(s) => s.parse::<TypeFilter>()?,
        None => TypeFilter::All,
    };
    let sorted = analysis::sort_transactions(store::load_snapshot(conn, uid)?);
    let view = ViewState::new(Tab::History, filter);
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);
    Ok(view
        .visible(&sorted)
        .into_iter()
        .take(limit)
        .map(|t| TransactionRow {
            id: t.id.clone(),
            date: t.date.to_string(),
            r#type: t.r#type.to_string(),
            category: t.category.clone(),
            amount: format!("{:.2}", t.amount),
            note: t.note.clone().unwrap_or_default(),
        })
        .collect())
}
