// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

pub fn build_cli() -> Command {
    Command::new("finlog")
        .about("Record income and expenses to a CSV ledger and summarize date ranges")
        .version(clap::crate_version!())
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .global(true)
                .env("FINLOG_FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Ledger CSV file (defaults to the platform data dir)"),
        )
        .arg(
            Arg::new("date-format")
                .long("date-format")
                .global(true)
                .env("FINLOG_DATE_FORMAT")
                .help("strftime pattern for dates on input, output and disk [default: %d-%m-%Y]"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("More log output on stderr (-v info, -vv debug)"),
        )
        .subcommand(Command::new("init").about("Create the ledger file if it does not exist"))
        .subcommand(
            Command::new("add")
                .about("Add a transaction; missing fields are prompted for")
                .arg(
                    Arg::new("date")
                        .long("date")
                        .short('d')
                        .help("Transaction date; empty means today"),
                )
                .arg(Arg::new("amount").long("amount").short('a').help("Positive amount"))
                .arg(
                    Arg::new("category")
                        .long("category")
                        .short('c')
                        .help("I for Income, E for Expense"),
                )
                .arg(
                    Arg::new("description")
                        .long("description")
                        .short('m')
                        .help("Free-form note"),
                ),
        )
        .subcommand(
            Command::new("view")
                .about("List transactions in an inclusive date range with totals")
                .arg(Arg::new("start").long("start").short('s').required(true))
                .arg(Arg::new("end").long("end").short('e').required(true))
                .arg(
                    Arg::new("chart")
                        .long("chart")
                        .value_parser(value_parser!(PathBuf))
                        .help("Also write an income/expense line chart (SVG)"),
                )
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
                .arg(
                    Arg::new("jsonl")
                        .long("jsonl")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("json"),
                ),
        )
        .subcommand(Command::new("menu").about("Interactive menu (the default)"))
}
