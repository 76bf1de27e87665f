// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cedi::analysis::advice;
use cedi::commands::{dashboard, insights};
use cedi::view::TypeFilter;
use cedi::{db, utils};
use rusqlite::{Connection, params};
use rust_decimal::Decimal;
use serde_json::json;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    utils::set_active_user(&conn, "u1").unwrap();
    conn
}

fn insert(conn: &Connection, id: &str, kind: &str, amount: &str, category: &str, date: &str) {
    conn.execute(
        "INSERT INTO transactions(id,uid,type,amount,category,note,date,created_at) VALUES (?1,'u1',?2,?3,?4,NULL,?5,NULL)",
        params![id, kind, amount, category, date],
    )
    .unwrap();
}

#[test]
fn dashboard_shows_five_most_recent() {
    let conn = setup();
    for day in 1..=7 {
        insert(&conn, &format!("e{}", day), "expense", "10", "Food", &format!("2025-05-0{}", day));
    }
    insert(&conn, "salary", "income", "1000", "Salary", "2025-04-30");

    let d = dashboard::build(&conn, "u1", TypeFilter::All).unwrap();
    assert_eq!(d.balance, Decimal::from(930));
    // 500 + 20 + 7 * 5
    assert_eq!(d.credit_score, 555);
    assert_eq!(d.band.to_string(), "Fair");
    let ids: Vec<_> = d.recent.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["e7", "e6", "e5", "e4", "e3"]);
    assert!(d.has_more);

    let incomes = dashboard::build(&conn, "u1", TypeFilter::Income).unwrap();
    assert_eq!(incomes.recent.len(), 1);
    assert!(!incomes.has_more);
    // Filtering the view never changes the derived figures.
    assert_eq!(incomes.balance, d.balance);
    assert_eq!(incomes.credit_score, d.credit_score);
}

#[test]
fn insights_for_food_heavy_spending() {
    let conn = setup();
    insert(&conn, "1", "expense", "300", "Food", "2025-05-01");

    let v = insights::build(&conn, "u1").unwrap();
    assert!(!v.nothing_to_show);
    assert_eq!(v.total_spent, Decimal::from(300));
    assert_eq!(v.chart, vec![("Food".to_string(), Decimal::from(300))]);
    assert_eq!(
        v.tips,
        vec![advice::FOOD_TIP.to_string(), advice::LOW_BALANCE_TIP.to_string()]
    );
    assert_eq!(v.request_suggestion.as_deref(), Some(advice::REQUEST_SUGGESTION));
}

#[test]
fn insights_fall_back_to_balanced_message() {
    let conn = setup();
    insert(&conn, "1", "income", "300", "Allowance", "2025-05-01");
    insert(&conn, "2", "expense", "50", "Other", "2025-05-02");

    let v = insights::build(&conn, "u1").unwrap();
    assert!(!v.nothing_to_show);
    assert!(v.tips.is_empty());
    assert_eq!(v.fallback, Some(advice::BALANCED_MESSAGE));
    assert!(v.request_suggestion.is_none());

    let value = serde_json::to_value(&v).unwrap();
    assert_eq!(value["tips"], json!([]));
    assert_eq!(value["fallback"], json!(advice::BALANCED_MESSAGE));
}

#[test]
fn insights_survive_totals_beyond_decimal_range() {
    let conn = setup();
    let max = Decimal::MAX.to_string();
    insert(&conn, "1", "expense", &max, "Food", "2025-05-01");
    insert(&conn, "2", "expense", &max, "Food", "2025-05-02");

    let v = insights::build(&conn, "u1").unwrap();
    assert_eq!(v.total_spent, Decimal::MAX);
    assert_eq!(v.balance, Decimal::MIN);
    assert_eq!(v.tips[0], advice::FOOD_TIP);
    assert!(v.fallback.is_none());

    let d = dashboard::build(&conn, "u1", TypeFilter::All).unwrap();
    assert_eq!(d.balance, Decimal::MIN);
}

#[test]
fn insights_suppressed_without_spending_and_with_healthy_balance() {
    let conn = setup();
    insert(&conn, "1", "income", "150", "Gift", "2025-05-01");

    let v = insights::build(&conn, "u1").unwrap();
    assert!(v.nothing_to_show);

    let value = serde_json::to_value(&v).unwrap();
    assert_eq!(value["request_suggestion"], json!(null));
    assert_eq!(value["chart"], json!([]));
    assert_eq!(value["tips"], json!([]));
    assert_eq!(value["fallback"], json!(null));
}
