//! Plain-text report.

use std::fmt::Write;

use crate::session::Analysis;

const BAR_WIDTH: usize = 30;

/// Renders an analysis as a human-readable report.
///
/// Sections with no data are skipped; the weekday and hour tables are
/// always printed in full.
pub fn render_report(analysis: &Analysis) -> String {
    let mut out = String::new();
    write_report(&mut out, analysis).ok();
    out
}

fn write_report(out: &mut String, a: &Analysis) -> std::fmt::Result {
    writeln!(out, "Chat analysis: {}", a.selection)?;
    writeln!(out, "==================================")?;
    writeln!(out, "Messages:  {}", a.stats.messages)?;
    writeln!(out, "Words:     {}", a.stats.words)?;
    writeln!(out, "Media:     {}", a.stats.media)?;
    writeln!(out, "Links:     {}", a.stats.links)?;

    if let Some(busiest) = a.busiest_senders.as_deref().filter(|b| !b.is_empty()) {
        section(out, "Busiest senders")?;
        for row in busiest {
            writeln!(out, "  {:<20} {:>6}", row.sender, row.count)?;
        }
    }

    if let Some(shares) = a.contribution.as_deref().filter(|s| !s.is_empty()) {
        section(out, "Contribution")?;
        for row in shares {
            writeln!(out, "  {:<20} {:>6.2}%", row.sender, row.percent)?;
        }
    }

    if !a.monthly.is_empty() {
        section(out, "Monthly timeline")?;
        let max = a.monthly.iter().map(|m| m.count).max().unwrap_or(0);
        for row in &a.monthly {
            writeln!(out, "  {}  {:>6} {}", row.label(), row.count, bar(row.count, max))?;
        }
    }

    if let (Some(first), Some(last)) = (a.daily.first(), a.daily.last()) {
        section(out, "Daily timeline")?;
        let busiest = a.daily.iter().max_by_key(|d| d.count).map_or(0, |d| d.count);
        writeln!(out, "  {} active days, {} to {}", a.daily.len(), first.date, last.date)?;
        writeln!(out, "  busiest day: {busiest} messages")?;
    }

    section(out, "Weekdays")?;
    let max = a.weekdays.iter().map(|w| w.count).max().unwrap_or(0);
    for row in &a.weekdays {
        let name = crate::record::weekday_name(row.weekday);
        writeln!(out, "  {:<10} {:>6} {}", name, row.count, bar(row.count, max))?;
    }

    section(out, "Hours")?;
    let max = a.hours.iter().map(|h| h.count).max().unwrap_or(0);
    for row in &a.hours {
        writeln!(out, "  {:02}:00 {:>6} {}", row.hour, row.count, bar(row.count, max))?;
    }

    if !a.symbols.is_empty() {
        section(out, "Emoji")?;
        writeln!(out, "  total: {}", a.symbols.total)?;
        for row in a.symbols.top(10) {
            writeln!(out, "  {} {:>6}", row.symbol, row.count)?;
        }
    }

    if !a.words.is_empty() {
        section(out, "Common words")?;
        for row in &a.words {
            writeln!(out, "  {:<20} {:>6}", row.word, row.count)?;
        }
    }

    Ok(())
}

fn section(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(title.len()))
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    "#".repeat((count * BAR_WIDTH).div_ceil(max))
}
