//! One parsed chat message with its derived time buckets.
//!
//! A [`Record`] is built once by the parser and never changes afterwards: the
//! calendar fields (`year`, `month`, `weekday`, ...) and the media flag are
//! computed at construction and exposed through accessors only.
//!
//! # Example
//!
//! ```
//! use chatlens::Record;
//! use chatlens::parsing::MediaMatch;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 15)
//!     .and_then(|d| d.and_hms_opt(10, 30, 0))
//!     .unwrap();
//! let record = Record::new(ts, "Alice", "see https://example.com", MediaMatch::Contains);
//!
//! assert_eq!(record.month_name(), "January");
//! assert_eq!(record.weekday_name(), "Monday");
//! assert!(record.has_link());
//! assert!(!record.is_media());
//! ```

use chrono::{Datelike, Month, NaiveDate, NaiveDateTime, Timelike, Weekday};

use crate::parsing::{GROUP_NOTIFICATION, MediaMatch, contains_link};

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Weekdays in display order, Monday first.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// A single message from a transcript.
///
/// | Field | Description |
/// |-------|-------------|
/// | `timestamp` | Local send time, no timezone |
/// | `sender` | Display name or [`GROUP_NOTIFICATION`] |
/// | `content` | Body with the sender prefix removed |
/// | `year`, `month`, `day`, `hour`, `minute`, `weekday` | Derived from `timestamp` |
/// | `is_media` | Content matched the media placeholder |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    timestamp: NaiveDateTime,
    sender: String,
    content: String,
    year: i32,
    month: Month,
    day: u32,
    hour: u32,
    minute: u32,
    weekday: Weekday,
    is_media: bool,
}

impl Record {
    /// Creates a record and derives its calendar fields.
    ///
    /// An empty `sender` is replaced by [`GROUP_NOTIFICATION`].
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        content: impl Into<String>,
        media: MediaMatch,
    ) -> Self {
        let mut sender = sender.into();
        if sender.is_empty() {
            sender = GROUP_NOTIFICATION.to_string();
        }
        let content = content.into();
        let is_media = media.matches(&content);

        Self {
            timestamp,
            sender,
            content,
            year: timestamp.year(),
            month: MONTHS[timestamp.month0() as usize],
            day: timestamp.day(),
            hour: timestamp.hour(),
            minute: timestamp.minute(),
            weekday: timestamp.weekday(),
            is_media,
        }
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the send time.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the calendar date of the send time.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Returns the sender name (or the sentinel).
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    /// English month name, e.g. `"January"`.
    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// Day of the month, 1-based.
    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// English weekday name, e.g. `"Monday"`.
    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.weekday)
    }

    // =========================================================================
    // Classification
    // =========================================================================

    /// Returns `true` if the content is a media placeholder.
    pub fn is_media(&self) -> bool {
        self.is_media
    }

    /// Returns `true` if the content contains a link marker.
    pub fn has_link(&self) -> bool {
        contains_link(&self.content)
    }

    /// Returns `true` if this is a group notification rather than a user message.
    pub fn is_notification(&self) -> bool {
        self.sender == GROUP_NOTIFICATION
    }

    /// Number of whitespace-delimited tokens in the content.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

/// English full name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
