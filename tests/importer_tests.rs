// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cedi::{cli, commands::importer, db, store, utils};
use rusqlite::Connection;
use std::io::Write;
use tempfile::NamedTempFile;

fn base_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    utils::set_active_user(&conn, "u1").unwrap();
    conn
}

fn run_import(conn: &mut Connection, path: &str) -> anyhow::Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["cedi", "import", "transactions", "--path", path]);
    if let Some(("import", import_m)) = matches.subcommand() {
        importer::handle(conn, import_m)
    } else {
        panic!("no import subcommand");
    }
}

fn count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM transactions", [], |r| r.get(0))
        .unwrap()
}

#[test]
fn importer_trims_cli_path_argument() {
    let mut conn = base_conn();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "date,type,amount,category,note\n2025-02-03,expense,5.00,Food,"
    )
    .unwrap();
    file.flush().unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let padded = format!("  {}  ", path);
    run_import(&mut conn, &padded).unwrap();
    assert_eq!(count(&conn), 1);
}

#[test]
fn importer_keeps_supplied_id_and_created_at() {
    let mut conn = base_conn();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "date,type,amount,category,note,id,created_at\n\
         2025-02-03,income,250,Salary,February,abc,2025-02-03T09:15:00+00:00\n\
         2025-02-04,expense,20,Transport,,,"
    )
    .unwrap();
    file.flush().unwrap();

    run_import(&mut conn, file.path().to_str().unwrap()).unwrap();
    let snap = store::load_snapshot(&conn, "u1").unwrap();
    assert_eq!(snap.len(), 2);
    let salary = snap.iter().find(|t| t.id == "abc").unwrap();
    assert_eq!(salary.note.as_deref(), Some("February"));
    assert_eq!(
        salary.created_at.unwrap().to_rfc3339(),
        "2025-02-03T09:15:00+00:00"
    );
    let bus = snap.iter().find(|t| t.category == "Transport").unwrap();
    assert!(!bus.id.is_empty());
    assert!(bus.created_at.is_some());
}

#[test]
fn importer_is_all_or_nothing() {
    let mut conn = base_conn();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "date,type,amount,category,note\n\
         2025-02-03,expense,5.00,Food,\n\
         2025-02-04,income,9.00,Food,"
    )
    .unwrap();
    file.flush().unwrap();

    let err = run_import(&mut conn, file.path().to_str().unwrap()).unwrap_err();
    assert!(format!("{:#}", err).contains("Row 3"));
    assert_eq!(count(&conn), 0);
}
