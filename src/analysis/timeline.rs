//! Time-bucketed message counts.
//!
//! Monthly and daily tables only contain buckets that have messages and are
//! ordered by calendar time, never by label (`2024-02` comes before
//! `2024-10`, December 2023 before January 2024). Weekday and hour tables
//! always have all 7 / 24 rows, with zero counts where nothing was sent.

use std::collections::BTreeMap;

use chrono::{Month, NaiveDate, Weekday};
use serde::{Serialize, Serializer};

use super::SenderFilter;
use crate::record::{WEEK, weekday_name};
use crate::transcript::Transcript;

/// Messages in one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub year: i32,
    #[serde(serialize_with = "month_name")]
    pub month: Month,
    pub count: usize,
}

impl MonthlyCount {
    /// `"YYYY-MM"` label, e.g. `"2024-02"`.
    pub fn label(&self) -> String {
        format!("{}-{:02}", self.year, self.month.number_from_month())
    }
}

/// Messages on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Messages on one day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekdayCount {
    #[serde(serialize_with = "weekday_label")]
    pub weekday: Weekday,
    pub count: usize,
}

/// Messages in one hour of the day (0-23).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourlyCount {
    pub hour: u32,
    pub count: usize,
}

/// Weekday x hour message counts, Monday first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ActivityGrid {
    cells: [[usize; 24]; 7],
}

impl ActivityGrid {
    /// Count for one cell. Hours past 23 read as zero.
    pub fn get(&self, weekday: Weekday, hour: u32) -> usize {
        self.cells[weekday.num_days_from_monday() as usize]
            .get(hour as usize)
            .copied()
            .unwrap_or(0)
    }

    /// The 24 hourly counts of one weekday.
    pub fn row(&self, weekday: Weekday) -> &[usize; 24] {
        &self.cells[weekday.num_days_from_monday() as usize]
    }

    /// Rows in Monday to Sunday order.
    pub fn rows(&self) -> impl Iterator<Item = (Weekday, &[usize; 24])> {
        WEEK.iter().copied().zip(self.cells.iter())
    }

    /// The raw 7x24 matrix.
    pub fn cells(&self) -> &[[usize; 24]; 7] {
        &self.cells
    }

    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    /// Largest single cell, useful for scaling a heatmap.
    pub fn max(&self) -> usize {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }
}

/// Counts messages per `(year, month)`, chronologically.
pub fn monthly_counts(table: &Transcript, filter: &SenderFilter) -> Vec<MonthlyCount> {
    let mut buckets: BTreeMap<(i32, u32), (Month, usize)> = BTreeMap::new();
    for record in table.filtered(filter) {
        let month = record.month();
        buckets
            .entry((record.year(), month.number_from_month()))
            .or_insert((month, 0))
            .1 += 1;
    }

    buckets
        .into_iter()
        .map(|((year, _), (month, count))| MonthlyCount { year, month, count })
        .collect()
}

/// Counts messages per calendar date, chronologically.
pub fn daily_counts(table: &Transcript, filter: &SenderFilter) -> Vec<DailyCount> {
    let mut buckets: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in table.filtered(filter) {
        *buckets.entry(record.date()).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}

/// Counts messages per weekday; always 7 rows, Monday to Sunday.
pub fn weekday_counts(table: &Transcript, filter: &SenderFilter) -> Vec<WeekdayCount> {
    let mut counts = [0usize; 7];
    for record in table.filtered(filter) {
        counts[record.weekday().num_days_from_monday() as usize] += 1;
    }

    WEEK.iter()
        .zip(counts)
        .map(|(&weekday, count)| WeekdayCount { weekday, count })
        .collect()
}

/// Counts messages per hour of day; always 24 rows, 0 to 23.
pub fn hourly_counts(table: &Transcript, filter: &SenderFilter) -> Vec<HourlyCount> {
    let mut counts = [0usize; 24];
    for record in table.filtered(filter) {
        counts[record.hour() as usize] += 1;
    }

    (0u32..)
        .zip(counts)
        .map(|(hour, count)| HourlyCount { hour, count })
        .collect()
}

/// Builds the 7x24 weekday/hour matrix for the heatmap.
pub fn weekday_hour_grid(table: &Transcript, filter: &SenderFilter) -> ActivityGrid {
    let mut grid = ActivityGrid::default();
    for record in table.filtered(filter) {
        grid.cells[record.weekday().num_days_from_monday() as usize][record.hour() as usize] += 1;
    }
    grid
}

fn month_name<S: Serializer>(month: &Month, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(month.name())
}

fn weekday_label<S: Serializer>(weekday: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(weekday_name(*weekday))
}
