// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cedi::analysis;
use cedi::db::init_schema;
use cedi::models::{Transaction, TransactionType};
use cedi::store::{self, Feed};
use chrono::{NaiveDate, TimeZone, Utc};
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::cell::RefCell;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    init_schema(&conn).unwrap();
    conn
}

fn record(id: &str, uid: &str, kind: TransactionType, amount: i64, category: &str) -> Transaction {
    Transaction {
        id: id.into(),
        uid: uid.into(),
        r#type: kind,
        amount: Decimal::from(amount),
        category: category.into(),
        note: Some("memo".into()),
        date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        created_at: Some(Utc.with_ymd_and_hms(2025, 3, 14, 12, 30, 0).unwrap()),
    }
}

#[test]
fn snapshot_round_trips_and_is_scoped_to_owner() {
    let conn = setup();
    let mine = record("1", "alice", TransactionType::Expense, 12, "Food");
    store::insert_transaction(&conn, &mine).unwrap();
    store::insert_transaction(
        &conn,
        &record("2", "bob", TransactionType::Income, 99, "Gift"),
    )
    .unwrap();

    let snap = store::load_snapshot(&conn, "alice").unwrap();
    assert_eq!(snap, vec![mine]);
    assert!(store::load_snapshot(&conn, "carol").unwrap().is_empty());
}

#[test]
fn missing_created_at_loads_as_none() {
    let conn = setup();
    conn.execute(
        "INSERT INTO transactions(id, uid, type, amount, category, note, date, created_at)
         VALUES ('legacy', 'alice', 'expense', '7.50', 'Food', NULL, '2024-02-01', NULL)",
        [],
    )
    .unwrap();
    let snap = store::load_snapshot(&conn, "alice").unwrap();
    assert_eq!(snap.len(), 1);
    assert!(snap[0].created_at.is_none());
    assert_eq!(snap[0].amount, "7.50".parse::<Decimal>().unwrap());
}

#[test]
fn duplicate_ids_are_kept_as_distinct_entries() {
    let conn = setup();
    let t = record("dup", "alice", TransactionType::Expense, 10, "Food");
    store::insert_transaction(&conn, &t).unwrap();
    store::insert_transaction(&conn, &t).unwrap();
    let s = analysis::summarize(store::load_snapshot(&conn, "alice").unwrap());
    assert_eq!(s.ordered.len(), 2);
    assert_eq!(s.aggregates.total_spent, Decimal::from(20));
}

#[test]
fn feed_publishes_full_snapshot_after_each_write() {
    let conn = setup();
    let seen = RefCell::new(Vec::new());
    let mut feed = Feed::new(&conn, "alice");
    assert_eq!(feed.uid(), "alice");
    feed.subscribe(|snap| {
        let s = analysis::summarize(snap.to_vec());
        seen.borrow_mut().push((snap.len(), s.score));
    });

    feed.add(&record("1", "alice", TransactionType::Income, 1000, "Salary"))
        .unwrap();
    feed.add(&record("2", "alice", TransactionType::Expense, 300, "Food"))
        .unwrap();
    feed.remove("1").unwrap();
    drop(feed);

    assert_eq!(seen.into_inner(), vec![(1, 520), (2, 500), (1, 480)]);
}

#[test]
fn feed_rejects_records_of_another_user() {
    let conn = setup();
    let mut feed = Feed::new(&conn, "alice");
    let err = feed
        .add(&record("1", "bob", TransactionType::Income, 5, "Gift"))
        .unwrap_err();
    assert!(err.to_string().contains("belongs to 'bob'"));
    assert!(store::load_snapshot(&conn, "bob").unwrap().is_empty());
}

#[test]
fn optimistic_delete_removes_locally_and_remotely() {
    let conn = setup();
    store::insert_transaction(
        &conn,
        &record("1", "alice", TransactionType::Expense, 10, "Food"),
    )
    .unwrap();
    store::insert_transaction(
        &conn,
        &record("2", "alice", TransactionType::Expense, 20, "Transport"),
    )
    .unwrap();
    let mut local = store::load_snapshot(&conn, "alice").unwrap();

    let n = store::delete_optimistic(&conn, &mut local, "alice", "1").unwrap();
    assert_eq!(n, 1);
    assert_eq!(local.len(), 1);
    assert_eq!(local[0].id, "2");
    assert_eq!(store::load_snapshot(&conn, "alice").unwrap(), local);
}

#[test]
fn optimistic_delete_restores_local_set_on_failure() {
    // No schema: the store delete fails.
    let conn = Connection::open_in_memory().unwrap();
    let original = vec![
        record("1", "alice", TransactionType::Expense, 10, "Food"),
        record("2", "alice", TransactionType::Income, 20, "Gift"),
    ];
    let mut local = original.clone();

    assert!(store::delete_optimistic(&conn, &mut local, "alice", "1").is_err());
    assert_eq!(local, original);
}
