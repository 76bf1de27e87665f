// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analysis::sort_transactions;
use crate::store::load_snapshot;
use crate::utils::require_user;
use anyhow::{Result, bail};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(conn, sub),
        _ => Ok(()),
    }
}

fn export_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "csv".into());
    let Some(out) = sub.get_one::<String>("out") else {
        bail!("--out is required");
    };
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let uid = require_user(conn)?;
    let txs = sort_transactions(load_snapshot(conn, &uid)?);

    if fmt == "csv" {
        let mut wtr = csv::Writer::from_path(out)?;
        wtr.write_record(["date", "type", "amount", "category", "note", "id", "created_at"])?;
        for t in &txs {
            wtr.write_record([
                t.date.to_string(),
                t.r#type.to_string(),
                t.amount.to_string(),
                t.category.clone(),
                t.note.clone().unwrap_or_default(),
                t.id.clone(),
                t.created_at.map(|c| c.to_rfc3339()).unwrap_or_default(),
            ])?;
        }
        wtr.flush()?;
    } else {
        std::fs::write(out, serde_json::to_string_pretty(&txs)?)?;
    }
    tracing::info!("exported {} transactions for {} to {}", txs.len(), uid, out);
    println!("Exported {} transactions to {}", txs.len(), out);
    Ok(())
}
