// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Finlog", "finlog"));

pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y";
pub const LEDGER_FILE_NAME: &str = "finance_data.csv";

/// Runtime settings shared by the validator and the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub ledger_path: PathBuf,
    pub date_format: String,
}

impl Config {
    /// Build a config from already-resolved CLI/env values, filling in defaults.
    pub fn resolve(ledger_path: Option<PathBuf>, date_format: Option<String>) -> Result<Self> {
        let ledger_path = match ledger_path {
            Some(p) => p,
            None => default_ledger_path()?,
        };
        let date_format = date_format.unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string());
        check_date_format(&date_format)?;
        Ok(Self {
            ledger_path,
            date_format,
        })
    }

    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        Self::resolve(
            m.get_one::<PathBuf>("file").cloned(),
            m.get_one::<String>("date-format").cloned(),
        )
    }

    /// Where the interactive menu writes its chart.
    pub fn chart_path(&self) -> PathBuf {
        self.ledger_path.with_file_name("finlog-chart.svg")
    }
}

pub fn default_ledger_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join(LEDGER_FILE_NAME))
}

/// A usable format has to be a full calendar date that survives a
/// format/parse round trip.
pub fn check_date_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|i| matches!(i, Item::Error)) {
        return Err(anyhow!("Invalid date format '{}'", format));
    }
    let probe = NaiveDate::from_ymd_opt(2001, 2, 3).context("probe date")?;
    let text = probe.format(format).to_string();
    match NaiveDate::parse_from_str(&text, format) {
        Ok(back) if back == probe => Ok(()),
        _ => Err(anyhow!(
            "Date format '{}' does not identify a single calendar day",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_values_win() {
        let cfg = Config::resolve(Some("/tmp/x.csv".into()), Some("%Y-%m-%d".into())).unwrap();
        assert_eq!(cfg.ledger_path, PathBuf::from("/tmp/x.csv"));
        assert_eq!(cfg.date_format, "%Y-%m-%d");
        assert_eq!(cfg.chart_path(), PathBuf::from("/tmp/finlog-chart.svg"));
    }

    #[test]
    fn date_format_defaults_to_day_month_year() {
        let cfg = Config::resolve(Some("ledger.csv".into()), None).unwrap();
        assert_eq!(cfg.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn incomplete_or_broken_formats_are_rejected() {
        assert!(check_date_format("%d-%m-%Y").is_ok());
        assert!(check_date_format("%m/%d/%Y").is_ok());
        assert!(check_date_format("%m-%Y").is_err());
        assert!(check_date_format("%Q").is_err());
    }
}
