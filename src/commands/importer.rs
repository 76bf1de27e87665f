// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{NewTransaction, TransactionType};
use crate::store::insert_transaction;
use crate::utils::{
    new_transaction_id, parse_date, parse_decimal, parse_timestamp, require_user,
};
use anyhow::{Context, Result};
use chrono::Utc;
use csv::ReaderBuilder;
use rusqlite::Connection;

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => import_transactions(conn, sub),
        _ => Ok(()),
    }
}

/// Expected header: `date,type,amount,category,note[,id,created_at]`.
fn import_transactions(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub
        .get_one::<String>("path")
        .map(|s| s.trim())
        .unwrap_or_default();
    let uid = require_user(conn)?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let tx = conn.transaction()?;
    let batch_id = new_transaction_id();
    let mut count = 0usize;

    for (line, result) in rdr.records().enumerate() {
        let rec = result?;
        let row = line + 2;
        let date_raw = rec.get(0).context("date missing")?.trim();
        let type_raw = rec.get(1).context("type missing")?.trim();
        let amount_raw = rec.get(2).context("amount missing")?.trim();
        let category = rec.get(3).context("category missing")?.trim();
        let note = rec
            .get(4)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());
        let id = rec
            .get(5)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("{}-{}", batch_id, line));
        let created_at = match rec.get(6).map(|s| s.trim()).filter(|s| !s.is_empty()) {
            Some(s) => parse_timestamp(s).with_context(|| format!("Row {}", row))?,
            None => Utc::now(),
        };

        let entry = NewTransaction {
            r#type: type_raw
                .parse::<TransactionType>()
                .with_context(|| format!("Row {}", row))?,
            amount: parse_decimal(amount_raw).with_context(|| format!("Row {}", row))?,
            category: category.to_string(),
            note,
            date: parse_date(date_raw).with_context(|| format!("Row {}", row))?,
        };
        let t = entry
            .into_transaction(id, &uid, created_at)
            .with_context(|| format!("Row {}", row))?;
        insert_transaction(&tx, &t)?;
        count += 1;
    }
    tx.commit()?;
    tracing::info!("imported {} transactions for {} from {}", count, uid, path);
    println!("Imported {} transactions from {}", count, path);
    Ok(())
}
