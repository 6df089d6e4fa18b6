// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, Transaction};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_savings: Decimal,
}

/// Sums saturate at `Decimal::MAX`; amounts are capped on input, so this only
/// matters for hand-built record sets.
pub fn summarize<'a, I>(records: I) -> Summary
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let (income, expense) =
        records
            .into_iter()
            .fold((Decimal::ZERO, Decimal::ZERO), |(inc, exp), t| match t.category {
                Category::Income => (inc.saturating_add(t.amount), exp),
                Category::Expense => (inc, exp.saturating_add(t.amount)),
            });
    Summary {
        total_income: income,
        total_expense: expense,
        net_savings: income.saturating_sub(expense),
    }
}

/// Income and expense booked on a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub income: Decimal,
    pub expense: Decimal,
}

/// One entry per distinct date in `records`, ascending.
pub fn daily_totals<'a, I>(records: I) -> Vec<DailyTotals>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut map: BTreeMap<NaiveDate, (Decimal, Decimal)> = BTreeMap::new();
    for t in records {
        let entry = map.entry(t.date).or_insert((Decimal::ZERO, Decimal::ZERO));
        match t.category {
            Category::Income => entry.0 = entry.0.saturating_add(t.amount),
            Category::Expense => entry.1 = entry.1.saturating_add(t.amount),
        }
    }
    map.into_iter()
        .map(|(date, (income, expense))| DailyTotals {
            date,
            income,
            expense,
        })
        .collect()
}
