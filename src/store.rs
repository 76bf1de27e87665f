// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Local stand-in for the remote document store.
//!
//! Records are scoped by `uid`. [`Feed`] re-reads the owner's full record set
//! after every write it performs and hands that snapshot to its subscribers.

use crate::models::{Transaction, TransactionType};
use crate::utils::{parse_date, parse_decimal, parse_timestamp};
use anyhow::{Context, Result};
use rusqlite::{Connection, params};

pub fn load_snapshot(conn: &Connection, uid: &str) -> Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(
        "SELECT id, uid, type, amount, category, note, date, created_at
         FROM transactions WHERE uid=?1 ORDER BY row_id",
    )?;
    let mut rows = stmt.query(params![uid])?;
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let id: String = r.get(0)?;
        let uid: String = r.get(1)?;
        let kind: String = r.get(2)?;
        let amount: String = r.get(3)?;
        let category: String = r.get(4)?;
        let note: Option<String> = r.get(5)?;
        let date: String = r.get(6)?;
        let created_at: Option<String> = r.get(7)?;
        data.push(Transaction {
            r#type: kind
                .parse::<TransactionType>()
                .with_context(|| format!("Transaction {}", id))?,
            amount: parse_decimal(&amount).with_context(|| format!("Transaction {}", id))?,
            date: parse_date(&date).with_context(|| format!("Transaction {}", id))?,
            created_at: created_at.as_deref().map(parse_timestamp).transpose()?,
            id,
            uid,
            category,
            note,
        });
    }
    tracing::debug!("loaded {} transactions for {}", data.len(), uid);
    Ok(data)
}

pub fn insert_transaction(conn: &Connection, t: &Transaction) -> Result<()> {
    conn.execute(
        "INSERT INTO transactions(id, uid, type, amount, category, note, date, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            t.id,
            t.uid,
            t.r#type.as_str(),
            t.amount.to_string(),
            t.category,
            t.note,
            t.date.to_string(),
            t.created_at.map(|c| c.to_rfc3339()),
        ],
    )
    .with_context(|| format!("Failed to save transaction {}", t.id))?;
    tracing::debug!("inserted transaction {} for {}", t.id, t.uid);
    Ok(())
}

/// Removes every record of `uid` carrying `id`; returns how many were removed.
pub fn delete_transaction(conn: &Connection, uid: &str, id: &str) -> Result<usize> {
    let n = conn
        .execute(
            "DELETE FROM transactions WHERE uid=?1 AND id=?2",
            params![uid, id],
        )
        .with_context(|| format!("Failed to delete transaction {}", id))?;
    tracing::debug!("deleted {} row(s) with id {} for {}", n, id, uid);
    Ok(n)
}

/// Removes `id` from the local set first, then from the store. If the store
/// delete fails the local set is put back exactly as it was.
pub fn delete_optimistic(
    conn: &Connection,
    local: &mut Vec<Transaction>,
    uid: &str,
    id: &str,
) -> Result<usize> {
    let original = local.clone();
    local.retain(|t| t.id != id);
    match delete_transaction(conn, uid, id) {
        Ok(n) => Ok(n),
        Err(e) => {
            tracing::warn!("delete of {} failed, restoring local set: {:#}", id, e);
            *local = original;
            Err(e)
        }
    }
}

type Subscriber<'a> = Box<dyn FnMut(&[Transaction]) + 'a>;

/// Snapshot subscription for one user.
pub struct Feed<'a> {
    conn: &'a Connection,
    uid: String,
    subscribers: Vec<Subscriber<'a>>,
}

impl<'a> Feed<'a> {
    pub fn new(conn: &'a Connection, uid: &str) -> Self {
        Self {
            conn,
            uid: uid.to_string(),
            subscribers: Vec::new(),
        }
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn subscribe<F>(&mut self, f: F)
    where
        F: FnMut(&[Transaction]) + 'a,
    {
        self.subscribers.push(Box::new(f));
    }

    /// Loads the current snapshot and delivers it to every subscriber.
    pub fn publish(&mut self) -> Result<Vec<Transaction>> {
        let snapshot = load_snapshot(self.conn, &self.uid)?;
        tracing::debug!(
            "publishing snapshot of {} to {} subscriber(s)",
            snapshot.len(),
            self.subscribers.len()
        );
        for s in self.subscribers.iter_mut() {
            s(snapshot.as_slice());
        }
        Ok(snapshot)
    }

    pub fn add(&mut self, t: &Transaction) -> Result<Vec<Transaction>> {
        anyhow::ensure!(
            t.uid == self.uid,
            "Transaction {} belongs to '{}', not '{}'",
            t.id,
            t.uid,
            self.uid
        );
        insert_transaction(self.conn, t)?;
        self.publish()
    }

    pub fn remove(&mut self, id: &str) -> Result<Vec<Transaction>> {
        delete_transaction(self.conn, &self.uid, id)?;
        self.publish()
    }
}
