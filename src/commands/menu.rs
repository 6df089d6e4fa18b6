// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{add, view};
use crate::prompt::{Prompter, ask};
use crate::store::Ledger;
use crate::validate::{format_hint, parse_date};
use anyhow::Result;
use std::path::Path;
use tracing::debug;

const MENU: [&str; 3] = [
    "1. Add a new transaction",
    "2. View transactions and summary within a date range",
    "3. Exit",
];

/// The interactive loop. Returns when the user picks "Exit".
pub fn run(ledger: &Ledger, chart_path: &Path, p: &mut dyn Prompter) -> Result<()> {
    loop {
        p.say("")?;
        for line in MENU {
            p.say(line)?;
        }
        let choice = p.read("Enter your choice (1-3)")?;
        debug!(choice = %choice.trim(), "menu");
        match choice.trim() {
            "1" => {
                let t = add::collect(p, ledger.date_format(), add::Preset::default())?;
                add::record(ledger, &t)?;
            }
            "2" => browse(ledger, chart_path, p)?,
            "3" => {
                p.say("Exiting...")?;
                return Ok(());
            }
            _ => p.warn("Invalid choice. Enter 1, 2 or 3.")?,
        }
    }
}

fn browse(ledger: &Ledger, chart_path: &Path, p: &mut dyn Prompter) -> Result<()> {
    let fmt = ledger.date_format();
    let hint = format_hint(fmt);
    let start = ask(p, &format!("Enter the start date ({})", hint), |s| {
        parse_date(s, false, fmt)
    })?;
    let end = ask(p, &format!("Enter the end date ({})", hint), |s| {
        parse_date(s, false, fmt)
    })?;

    let records = ledger.query_range(start, end)?;
    view::print_report(&records, start, end, fmt);

    let answer = p.read("Do you want to see a plot? (y/n)")?;
    if !answer.trim().eq_ignore_ascii_case("y") {
        return Ok(());
    }
    if records.is_empty() {
        p.say("Nothing to plot.")?;
        return Ok(());
    }
    view::write_chart(&records, chart_path, fmt)?;
    p.say(&format!("Chart written to {}", chart_path.display()))?;
    Ok(())
}
