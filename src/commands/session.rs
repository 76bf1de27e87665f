// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{clear_active_user, get_active_user, set_active_user};
use anyhow::{Result, bail};
use rusqlite::Connection;

pub fn login(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let uid = sub
        .get_one::<String>("uid")
        .map(|s| s.trim())
        .unwrap_or_default();
    if uid.is_empty() {
        bail!("User id cannot be empty");
    }
    set_active_user(conn, uid)?;
    tracing::info!("active user set to {}", uid);
    println!("Logged in as '{}'", uid);
    Ok(())
}

pub fn logout(conn: &Connection) -> Result<()> {
    match get_active_user(conn)? {
        Some(uid) => {
            clear_active_user(conn)?;
            println!("Logged out '{}'", uid);
        }
        None => println!("Not logged in"),
    }
    Ok(())
}

pub fn whoami(conn: &Connection) -> Result<()> {
    match get_active_user(conn)? {
        Some(uid) => println!("{}", uid),
        None => println!("Not logged in"),
    }
    Ok(())
}
