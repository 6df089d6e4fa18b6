// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Transaction;
use crate::prompt::{Prompter, ask};
use crate::store::Ledger;
use crate::validate::{
    format_hint, parse_amount, parse_category, parse_date, parse_description,
};
use anyhow::Result;

/// Field values supplied up front; anything left as `None` is prompted for.
#[derive(Debug, Clone, Default)]
pub struct Preset {
    pub date: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl Preset {
    pub fn from_matches(sub: &clap::ArgMatches) -> Self {
        Self {
            date: sub.get_one::<String>("date").cloned(),
            amount: sub.get_one::<String>("amount").cloned(),
            category: sub.get_one::<String>("category").cloned(),
            description: sub.get_one::<String>("description").cloned(),
        }
    }
}

pub fn handle(ledger: &Ledger, sub: &clap::ArgMatches, p: &mut dyn Prompter) -> Result<()> {
    let t = collect(p, ledger.date_format(), Preset::from_matches(sub))?;
    record(ledger, &t)
}

/// Build a validated transaction from presets, prompting for the rest.
/// A bad preset is an error; a bad prompted answer is asked again.
pub fn collect(p: &mut dyn Prompter, date_format: &str, preset: Preset) -> Result<Transaction> {
    let date = match preset.date {
        Some(s) => parse_date(&s, true, date_format)?,
        None => ask(
            p,
            &format!(
                "Enter the date of the transaction ({}) or enter for today's date",
                format_hint(date_format)
            ),
            |s| parse_date(s, true, date_format),
        )?,
    };
    let amount = match preset.amount {
        Some(s) => parse_amount(&s)?,
        None => ask(p, "Enter the amount", parse_amount)?,
    };
    let category = match preset.category {
        Some(s) => parse_category(&s)?,
        None => ask(
            p,
            "Enter the category ('I' for Income or 'E' for Expense)",
            parse_category,
        )?,
    };
    let description = match preset.description {
        Some(s) => parse_description(&s),
        None => parse_description(&p.read("Enter a description (optional)")?),
    };
    Ok(Transaction::new(date, amount, category, description))
}

pub fn record(ledger: &Ledger, t: &Transaction) -> Result<()> {
    ledger.append(t)?;
    println!("Entry added successfully");
    Ok(())
}
