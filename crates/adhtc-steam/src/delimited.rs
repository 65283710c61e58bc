//! Comma-separated reader for the reference steam tables.
//!
//! The tables are plain numeric exports: one header row, comma-separated cells,
//! optional double quotes around text cells. Nothing more is supported.

use std::io::Read;
use std::path::Path;

use crate::error::{SteamError, SteamResult};

/// Header plus the trimmed cells of every non-blank line.
#[derive(Debug)]
pub(crate) struct DelimitedTable {
    headers: Vec<String>,
    records: Vec<Vec<String>>,
}

fn split_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut quoted = false;
    for ch in line.chars() {
        match ch {
            '"' => quoted = !quoted,
            ',' if !quoted => cells.push(std::mem::take(&mut cell).trim().to_string()),
            _ => cell.push(ch),
        }
    }
    cells.push(cell.trim().to_string());
    cells
}

impl DelimitedTable {
    pub(crate) fn read<R: Read>(mut reader: R, origin: &Path) -> SteamResult<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|e| SteamError::parse(origin, e.to_string()))?;

        let mut lines = content
            .trim_start_matches('\u{feff}')
            .lines()
            .filter(|l| !l.trim().is_empty());
        let headers = match lines.next() {
            Some(line) => split_line(line),
            None => return Err(SteamError::parse(origin, "missing header row")),
        };
        let records = lines.map(split_line).collect();
        Ok(Self { headers, records })
    }

    pub(crate) fn column(&self, name: &str, origin: &Path) -> SteamResult<usize> {
        self.optional_column(name)
            .ok_or_else(|| SteamError::parse(origin, format!("missing column '{name}'")))
    }

    pub(crate) fn optional_column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub(crate) fn records(&self) -> &[Vec<String>] {
        &self.records
    }
}

/// Numeric cell; `None` for a missing or non-numeric cell.
pub(crate) fn number(record: &[String], idx: usize) -> Option<f64> {
    record.get(idx)?.parse().ok()
}

pub(crate) fn text(record: &[String], idx: usize) -> Option<&str> {
    record.get(idx).map(String::as_str)
}
