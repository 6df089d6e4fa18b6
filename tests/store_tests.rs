// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use finlog::models::{Category, Transaction};
use finlog::store::Ledger;
use rust_decimal::Decimal;
use std::fs;
use tempfile::tempdir;

const FMT: &str = "%d-%m-%Y";

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn tx(date: NaiveDate, cents: i64, category: Category, desc: &str) -> Transaction {
    Transaction::new(date, Decimal::new(cents, 2), category, desc)
}

#[test]
fn initialize_creates_header_only_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("finance_data.csv");
    let ledger = Ledger::open(&path, FMT).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "date,amount,category,description\n"
    );
    assert!(ledger.all().unwrap().is_empty());
}

#[test]
fn initialize_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.csv");
    let ledger = Ledger::open(&path, FMT).unwrap();
    ledger
        .append(&tx(d(2025, 1, 2), 10000, Category::Income, "salary"))
        .unwrap();
    let before = fs::read_to_string(&path).unwrap();

    ledger.initialize().unwrap();
    Ledger::open(&path, FMT).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
    assert_eq!(ledger.all().unwrap().len(), 1);
}

#[test]
fn empty_file_gets_a_header() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.csv");
    fs::write(&path, "").unwrap();
    Ledger::open(&path, FMT).unwrap();
    assert!(fs::read_to_string(&path).unwrap().starts_with("date,amount"));
}

#[test]
fn append_then_query_returns_equal_record() {
    let dir = tempdir().unwrap();
    let ledger = Ledger::open(dir.path().join("ledger.csv"), FMT).unwrap();
    let t = tx(d(2025, 3, 9), 4250, Category::Expense, "");
    ledger.append(&t).unwrap();

    let got = ledger.query_range(d(2025, 3, 9), d(2025, 3, 9)).unwrap();
    assert_eq!(got, vec![t]);
    assert_eq!(got[0].description, "");
}

#[test]
fn append_writes_fixed_row_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.csv");
    let ledger = Ledger::open(&path, FMT).unwrap();
    ledger
        .append(&tx(d(2025, 7, 4), 1999, Category::Expense, "fireworks"))
        .unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "date,amount,category,description\n04-07-2025,19.99,Expense,fireworks\n"
    );
}

#[test]
fn descriptions_with_delimiters_survive() {
    let dir = tempdir().unwrap();
    let ledger = Ledger::open(dir.path().join("ledger.csv"), FMT).unwrap();
    let t = tx(
        d(2025, 2, 1),
        500,
        Category::Expense,
        "coffee, \"large\"\nand a bagel",
    );
    ledger.append(&t).unwrap();
    assert_eq!(ledger.all().unwrap(), vec![t]);
}

#[test]
fn append_preserves_previous_rows_and_order() {
    let dir = tempdir().unwrap();
    let ledger = Ledger::open(dir.path().join("ledger.csv"), FMT).unwrap();
    let rows = vec![
        tx(d(2025, 1, 20), 100, Category::Expense, "late"),
        tx(d(2025, 1, 5), 200, Category::Income, "early"),
        tx(d(2025, 1, 5), 200, Category::Income, "early"),
    ];
    for t in &rows {
        ledger.append(t).unwrap();
    }
    // insertion order, duplicates kept, no sorting by date
    assert_eq!(ledger.all().unwrap(), rows);
}

#[test]
fn query_range_is_inclusive_and_filters() {
    let dir = tempdir().unwrap();
    let ledger = Ledger::open(dir.path().join("ledger.csv"), FMT).unwrap();
    for day in [1, 10, 15, 20, 28] {
        ledger
            .append(&tx(d(2025, 2, day), 100, Category::Income, ""))
            .unwrap();
    }
    let got: Vec<u32> = ledger
        .query_range(d(2025, 2, 10), d(2025, 2, 20))
        .unwrap()
        .iter()
        .map(|t| chrono::Datelike::day(&t.date))
        .collect();
    assert_eq!(got, vec![10, 15, 20]);
}

#[test]
fn query_range_without_matches_is_empty() {
    let dir = tempdir().unwrap();
    let ledger = Ledger::open(dir.path().join("ledger.csv"), FMT).unwrap();
    ledger
        .append(&tx(d(2025, 2, 1), 100, Category::Income, ""))
        .unwrap();
    assert!(ledger.query_range(d(2024, 1, 1), d(2024, 12, 31)).unwrap().is_empty());
    // reversed bounds select nothing
    assert!(ledger.query_range(d(2025, 3, 1), d(2025, 1, 1)).unwrap().is_empty());
}

#[test]
fn append_after_missing_trailing_newline() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.csv");
    fs::write(
        &path,
        "date,amount,category,description\n01-01-2025,5,Income,gift",
    )
    .unwrap();
    let ledger = Ledger::open(&path, FMT).unwrap();
    ledger
        .append(&tx(d(2025, 1, 2), 300, Category::Expense, "snack"))
        .unwrap();
    let all = ledger.all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].description, "gift");
    assert_eq!(all[1].amount, Decimal::new(300, 2));
}

#[test]
fn malformed_rows_report_their_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.csv");
    fs::write(
        &path,
        "date,amount,category,description\n01-01-2025,5,Income,ok\n2025-01-02,5,Income,bad\n",
    )
    .unwrap();
    let ledger = Ledger::open(&path, FMT).unwrap();
    let err = ledger.all().unwrap_err();
    assert!(format!("{:#}", err).contains(":3:"), "{:#}", err);

    fs::write(
        &path,
        "date,amount,category,description\n01-01-2025,5,Gift,ok\n",
    )
    .unwrap();
    assert!(ledger.all().is_err());
}

#[test]
fn ledger_stays_readable_when_display_format_changes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.csv");
    let t = tx(d(2025, 12, 31), 100, Category::Income, "");
    Ledger::open(&path, FMT).unwrap().append(&t).unwrap();

    let iso = Ledger::open(&path, "%Y-%m-%d").unwrap();
    iso.append(&tx(d(2026, 1, 2), 250, Category::Expense, "fee"))
        .unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "date,amount,category,description\n31-12-2025,1.00,Income,\n02-01-2026,2.50,Expense,fee\n"
    );
    assert_eq!(
        iso.query_range(d(2025, 12, 31), d(2025, 12, 31)).unwrap(),
        vec![t]
    );

    let us = Ledger::open(&path, "%m/%d/%Y").unwrap();
    assert_eq!(us.all().unwrap().len(), 2);
}

#[test]
fn rows_with_extra_fields_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.csv");
    fs::write(
        &path,
        "date,amount,category,description\n01-01-2025,5,Income,ok\n02-01-2025,5,Income,gift,extra\n",
    )
    .unwrap();
    let ledger = Ledger::open(&path, FMT).unwrap();
    let err = ledger.all().unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains(":3:"), "{}", msg);
    assert!(msg.contains("at most 4 fields"), "{}", msg);
}

#[test]
fn rows_without_description_are_tolerated() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.csv");
    fs::write(
        &path,
        "date,amount,category,description\n01-01-2025,5,Income\n",
    )
    .unwrap();
    let all = Ledger::open(&path, FMT).unwrap().all().unwrap();
    assert_eq!(all, vec![tx(d(2025, 1, 1), 500, Category::Income, "")]);
}
