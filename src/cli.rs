// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    ]
}

fn type_filter_arg() -> Arg {
    Arg::new("type")
        .long("type")
        .value_parser(["all", "income", "expense"])
        .default_value("all")
        .help("Show only income or only expense records")
}

pub fn build_cli() -> Command {
    Command::new("cedi")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Track income and expenses, with balance, credit score, and spending insights")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(
            Command::new("login")
                .about("Set the active user")
                .arg(Arg::new("uid").required(true)),
        )
        .subcommand(Command::new("logout").about("Clear the active user"))
        .subcommand(Command::new("whoami").about("Show the active user"))
        .subcommand(
            Command::new("tx")
                .about("Record, list, and delete transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record an income or expense")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["income", "expense"])
                                .default_value("expense"),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD, defaults to today"),
                        )
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(type_filter_arg())
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Balance, credit score, and recent transactions")
                .arg(type_filter_arg())
                .args(json_args()),
        )
        .subcommand(
            Command::new("insights")
                .about("Spending breakdown and budgeting tips")
                .args(json_args()),
        )
        .subcommand(
            Command::new("split")
                .about("Split an income amount with the 50/30/20 rule")
                .arg(Arg::new("amount").required(true))
                .args(json_args()),
        )
        .subcommand(
            Command::new("categories").about("List valid categories").arg(
                Arg::new("type")
                    .long("type")
                    .value_parser(["income", "expense"]),
            ),
        )
        .subcommand(
            Command::new("import")
                .about("Import data")
                .subcommand(
                    Command::new("transactions")
                        .about("Import transactions from CSV")
                        .arg(Arg::new("path").long("path").required(true)),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("transactions")
                        .about("Export transactions as CSV or JSON")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Show or change settings")
                .subcommand(
                    Command::new("currency")
                        .about("Show or set the display currency symbol")
                        .arg(Arg::new("symbol")),
                ),
        )
}
