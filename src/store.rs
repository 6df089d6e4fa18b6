// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::models::{Category, Transaction};
use crate::validate::{parse_amount, parse_date};
use anyhow::{Context, Result, ensure};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const HEADER: [&str; 4] = ["date", "amount", "category", "description"];

/// Date layout on disk, independent of the user-facing `--date-format`.
pub const STORAGE_DATE_FORMAT: &str = "%d-%m-%Y";

/// Append-only CSV ledger. Rows come back in the order they were written.
///
/// `date_format` is only carried for prompts and display; the file itself
/// always uses [`STORAGE_DATE_FORMAT`].
#[derive(Debug, Clone)]
pub struct Ledger {
    path: PathBuf,
    date_format: String,
}

impl Ledger {
    pub fn open(path: impl Into<PathBuf>, date_format: impl Into<String>) -> Result<Self> {
        let ledger = Self {
            path: path.into(),
            date_format: date_format.into(),
        };
        ledger.initialize()?;
        Ok(ledger)
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        Self::open(&cfg.ledger_path, &cfg.date_format)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Create the file with just the header row if it is missing or empty.
    /// Existing rows are never touched.
    pub fn initialize(&self) -> Result<()> {
        let needs_header = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(e) if e.kind() == ErrorKind::NotFound => true,
            Err(e) => {
                return Err(e).with_context(|| format!("Stat ledger {}", self.path.display()));
            }
        };
        if !needs_header {
            debug!(path = %self.path.display(), "ledger already initialized");
            return Ok(());
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Create ledger dir {}", parent.display()))?;
        }
        let mut wtr = csv::Writer::from_path(&self.path)
            .with_context(|| format!("Create ledger {}", self.path.display()))?;
        wtr.write_record(HEADER)?;
        wtr.flush()?;
        info!(path = %self.path.display(), "created ledger file");
        Ok(())
    }

    pub fn append(&self, t: &Transaction) -> Result<()> {
        self.initialize()?;
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Open ledger {} for append", self.path.display()))?;
        ensure_trailing_newline(&mut file)?;

        let date = t.date.format(STORAGE_DATE_FORMAT).to_string();
        let amount = t.amount.to_string();
        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
        wtr.write_record([
            date.as_str(),
            amount.as_str(),
            t.category.as_str(),
            t.description.as_str(),
        ])?;
        wtr.flush()
            .with_context(|| format!("Write ledger {}", self.path.display()))?;
        debug!(path = %self.path.display(), %date, %amount, category = %t.category, "appended row");
        Ok(())
    }

    /// Every record, in file order.
    pub fn all(&self) -> Result<Vec<Transaction>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .with_context(|| format!("Open ledger {}", self.path.display()))?;

        let mut out = Vec::new();
        for result in rdr.records() {
            let rec = result.with_context(|| format!("Read ledger {}", self.path.display()))?;
            let line = rec.position().map(|p| p.line()).unwrap_or_default();
            let t = self
                .parse_record(&rec)
                .with_context(|| format!("{}:{}: malformed row", self.path.display(), line))?;
            out.push(t);
        }
        debug!(path = %self.path.display(), rows = out.len(), "loaded ledger");
        Ok(out)
    }

    /// Records with `start <= date <= end`, in insertion order.
    pub fn query_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Transaction>> {
        if start > end {
            debug!(%start, %end, "empty range");
            return Ok(Vec::new());
        }
        let hits: Vec<Transaction> = self
            .all()?
            .into_iter()
            .filter(|t| t.date >= start && t.date <= end)
            .collect();
        debug!(%start, %end, hits = hits.len(), "range query");
        Ok(hits)
    }

    fn parse_record(&self, rec: &StringRecord) -> Result<Transaction> {
        ensure!(
            rec.len() <= HEADER.len(),
            "expected at most {} fields, found {}",
            HEADER.len(),
            rec.len()
        );
        let date_raw = rec.get(0).context("date missing")?;
        let amount_raw = rec.get(1).context("amount missing")?;
        let category_raw = rec.get(2).context("category missing")?;
        let description = rec.get(3).unwrap_or("").to_string();

        let date = parse_date(date_raw, false, STORAGE_DATE_FORMAT)?;
        let amount = parse_amount(amount_raw)?;
        let category: Category = category_raw.parse()?;
        Ok(Transaction {
            date,
            amount,
            category,
            description,
        })
    }
}

// A hand-edited file may lack the final newline; without one the next row
// would be glued onto the last line.
fn ensure_trailing_newline(file: &mut File) -> Result<()> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(());
    }
    file.seek(SeekFrom::Start(len - 1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    if last[0] != b'\n' {
        file.write_all(b"\n")?;
    }
    Ok(())
}
