// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::chart;
use crate::models::{Transaction, TransactionRow};
use crate::store::Ledger;
use crate::summary::{Summary, daily_totals, summarize};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use crate::validate::parse_date;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub fn handle(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let fmt = ledger.date_format();
    let start = parse_date(
        sub.get_one::<String>("start").context("--start is required")?,
        false,
        fmt,
    )?;
    let end = parse_date(
        sub.get_one::<String>("end").context("--end is required")?,
        false,
        fmt,
    )?;

    let records = ledger.query_range(start, end)?;
    let report = Report::new(&records, start, end, fmt);
    if !maybe_print_json(json_flag, jsonl_flag, &report)? {
        print_report(&records, start, end, fmt);
    }
    if let Some(path) = sub.get_one::<PathBuf>("chart") {
        write_chart(&records, path, fmt)?;
        println!("Chart written to {}", path.display());
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub start: String,
    pub end: String,
    pub transactions: Vec<TransactionRow>,
    pub summary: Summary,
}

impl Report {
    pub fn new(records: &[Transaction], start: NaiveDate, end: NaiveDate, fmt: &str) -> Self {
        Self {
            start: start.format(fmt).to_string(),
            end: end.format(fmt).to_string(),
            transactions: records
                .iter()
                .map(|t| TransactionRow::from_transaction(t, fmt))
                .collect(),
            summary: summarize(records),
        }
    }
}

pub fn print_report(records: &[Transaction], start: NaiveDate, end: NaiveDate, fmt: &str) {
    if records.is_empty() {
        println!("No transactions found in the given date range.");
        return;
    }
    println!(
        "Transactions from {} to {}",
        start.format(fmt),
        end.format(fmt)
    );
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|t| {
            let r = TransactionRow::from_transaction(t, fmt);
            vec![r.date, r.amount, r.category, r.description]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Amount", "Category", "Description"], rows)
    );

    let s = summarize(records);
    println!("\nSummary:");
    println!("Total Income: {}", fmt_money(&s.total_income));
    println!("Total Expense: {}", fmt_money(&s.total_expense));
    println!("Net Savings: {}", fmt_money(&s.net_savings));
}

pub fn write_chart(records: &[Transaction], path: &Path, fmt: &str) -> Result<()> {
    chart::render_svg(path, &daily_totals(records), fmt)
        .with_context(|| format!("Write chart {}", path.display()))
}
