// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::summary::DailyTotals;
use anyhow::{Result, anyhow, bail};
use chrono::{Duration, NaiveDate};
use plotters::prelude::*;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::path::Path;
use tracing::info;

const INCOME_COLOR: RGBColor = RGBColor(0, 128, 0);
const EXPENSE_COLOR: RGBColor = RGBColor(200, 0, 0);
const SIZE: (u32, u32) = (1000, 500);

/// Draw daily income and expense as two line series into an SVG file.
///
/// The x axis counts days from the first entry so that gaps between
/// entries keep their real width; labels are rendered with `date_format`.
pub fn render_svg(path: &Path, days: &[DailyTotals], date_format: &str) -> Result<()> {
    let (first, last) = match (days.first(), days.last()) {
        (Some(f), Some(l)) => (f.date, l.date),
        _ => bail!("Nothing to plot: no transactions in range"),
    };
    let span = (last - first).num_days().max(1);

    let income: Vec<(i64, f64)> = days
        .iter()
        .map(|d| (offset(first, d.date), to_f64(d.income)))
        .collect();
    let expense: Vec<(i64, f64)> = days
        .iter()
        .map(|d| (offset(first, d.date), to_f64(d.expense)))
        .collect();
    let peak = income
        .iter()
        .chain(expense.iter())
        .map(|p| p.1)
        .fold(0.0_f64, f64::max);
    let y_max = if peak > 0.0 { peak * 1.1 } else { 1.0 };

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Income and Expenses Over Time", ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(0i64..span, 0f64..y_max)
        .map_err(plot_err)?;

    let x_fmt = |x: &i64| (first + Duration::days(*x)).format(date_format).to_string();
    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Amount")
        .x_labels(8)
        .y_labels(8)
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&|v| format!("{:.2}", v))
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(
            income.iter().copied(),
            INCOME_COLOR.stroke_width(2),
        ))
        .map_err(plot_err)?
        .label("Income")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &INCOME_COLOR));
    chart
        .draw_series(LineSeries::new(
            expense.iter().copied(),
            EXPENSE_COLOR.stroke_width(2),
        ))
        .map_err(plot_err)?
        .label("Expense")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &EXPENSE_COLOR));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    info!(path = %path.display(), points = days.len(), "chart written");
    Ok(())
}

fn offset(first: NaiveDate, date: NaiveDate) -> i64 {
    (date - first).num_days()
}

fn to_f64(d: Decimal) -> f64 {
    d.to_f64().unwrap_or_default()
}

fn plot_err<E: std::fmt::Display>(e: E) -> anyhow::Error {
    anyhow!("Chart rendering failed: {}", e)
}
