//! Timestamp normalization with batch-wide date-order detection.
//!
//! Android exports write dates as `M/D/YY` or `D/M/YY` depending on the phone's
//! locale, and nothing in the file says which. The whole batch is tried
//! month-first; if any single timestamp fails, the whole batch is retried
//! day-first. A transcript that needs both orders is rejected.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{ChatlensError, Result};

/// Order of the day and month fields in a transcript's dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// `MM/DD/YY, HH:MM` (tried first)
    /// Example: 1/31/24, 10:00
    MonthFirst,
    /// `DD/MM/YY, HH:MM`
    /// Example: 31/1/24, 10:00
    DayFirst,
}

impl DateOrder {
    /// Returns chrono parse formats for this order: two-digit years, then
    /// four-digit years.
    pub fn parse_formats(self) -> &'static [&'static str] {
        match self {
            DateOrder::MonthFirst => &["%m/%d/%y, %H:%M", "%m/%d/%Y, %H:%M"],
            DateOrder::DayFirst => &["%d/%m/%y, %H:%M", "%d/%m/%Y, %H:%M"],
        }
    }

    /// Returns the orders in the sequence they are attempted.
    pub fn all() -> &'static [DateOrder] {
        &[DateOrder::MonthFirst, DateOrder::DayFirst]
    }

    /// Parses one raw timestamp (`"1/15/24, 10:30"`) under this order.
    ///
    /// The year must have exactly two digits (`24` is 2024) or four; any
    /// other width is rejected.
    pub fn parse(self, raw: &str) -> Option<NaiveDateTime> {
        let formats = self.parse_formats();
        let year = raw.split(',').next()?.rsplit('/').next()?;
        let format = match year.len() {
            2 => formats.first()?,
            4 => formats.get(1)?,
            _ => return None,
        };
        NaiveDateTime::parse_from_str(raw, format).ok()
    }
}

impl fmt::Display for DateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateOrder::MonthFirst => write!(f, "month-first"),
            DateOrder::DayFirst => write!(f, "day-first"),
        }
    }
}

/// Parses every timestamp in `raw` under a single date order.
///
/// Returns the order that succeeded together with the parsed instants, in
/// input order. Fails with [`ChatlensError::Format`] naming the first
/// timestamp rejected by the last order tried.
pub fn normalize_timestamps(raw: &[&str]) -> Result<(DateOrder, Vec<NaiveDateTime>)> {
    let mut rejected = None;

    for &order in DateOrder::all() {
        match parse_batch(raw, order) {
            Ok(parsed) => return Ok((order, parsed)),
            Err(timestamp) => {
                tracing::debug!(%order, %timestamp, "timestamp batch rejected");
                rejected = Some((order, timestamp));
            }
        }
    }

    let (order, timestamp) = rejected.unwrap_or((DateOrder::DayFirst, String::new()));
    Err(ChatlensError::format(order, timestamp))
}

/// Parses the batch or returns the first timestamp that failed.
fn parse_batch(raw: &[&str], order: DateOrder) -> std::result::Result<Vec<NaiveDateTime>, String> {
    raw.iter()
        .map(|ts| order.parse(ts).ok_or_else(|| (*ts).to_string()))
        .collect()
}
