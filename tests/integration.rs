//! Integration tests for chatlens.
//!
//! Run the whole pipeline (parse, select, aggregate, render) on realistic
//! exports and check the tables against hand-counted values.

use chatlens::prelude::*;
use chatlens::analysis::SymbolCount;
use chrono::{Datelike, Month, Weekday};

// =========================================================================
// Fixtures
// =========================================================================

/// Small group chat, month-first dates, crossing a year boundary.
const GROUP_CHAT: &str = "\
12/31/23, 23:58 - Messages and calls are end-to-end encrypted. No one outside of this chat, not even WhatsApp, can read or listen to them.
12/31/23, 23:58 - Alice created group \"New Year\"
12/31/23, 23:59 - Alice: Almost midnight! 🎉
1/1/24, 0:00 - Bob: Happy new year!! 🎉🎉
1/1/24, 0:01 - Carol: <Media omitted>
1/1/24, 0:02 - Alice: Photos here https://photos.example.com/album
1/1/24, 0:03 - Bob: wow
that was fast
1/6/24, 14:20 - Carol: Reminder: dinner at 7:30, bring snacks 😂
1/6/24, 14:21 - Dan joined using this group's invite link
2/14/24, 9:00 - Dan: Hi all";

/// Day-first export from a UK phone.
const UK_CHAT: &str = "\
25/12/2023, 10:00 - Emma: Merry Christmas!
25/12/2023, 10:05 - Tom: And to you ❤️
31/01/2024, 18:45 - Emma: Still here?";

// =========================================================================
// Parsing
// =========================================================================

#[test]
fn test_group_chat_records() {
    let t = parse_transcript(GROUP_CHAT).unwrap();

    assert_eq!(t.len(), 10);
    assert_eq!(t.date_order(), DateOrder::MonthFirst);

    let senders: Vec<_> = t.iter().map(Record::sender).collect();
    assert_eq!(
        senders,
        [
            "group_notification",
            "group_notification",
            "Alice",
            "Bob",
            "Carol",
            "Alice",
            "Bob",
            "Carol",
            "group_notification",
            "Dan"
        ]
    );

    let multi = &t.records()[6];
    assert_eq!(multi.content(), "wow\nthat was fast");

    let colon = &t.records()[7];
    assert_eq!(colon.content(), "Reminder: dinner at 7:30, bring snacks 😂");
}

#[test]
fn test_uk_chat_day_first() {
    let t = parse_transcript(UK_CHAT).unwrap();
    assert_eq!(t.date_order(), DateOrder::DayFirst);

    let first = &t.records()[0];
    assert_eq!(first.month(), Month::December);
    assert_eq!(first.day(), 25);
    assert_eq!(first.year(), 2023);
    assert_eq!(first.weekday(), Weekday::Mon);

    let last = &t.records()[2];
    assert_eq!(last.timestamp().date().month(), 1);
    assert_eq!(last.weekday_name(), "Wednesday");
}

// =========================================================================
// Aggregation
// =========================================================================

#[test]
fn test_overall_stats() {
    let t = parse_transcript(GROUP_CHAT).unwrap();
    let stats = basic_stats(&t, &SenderFilter::All);

    assert_eq!(stats.messages, 10);
    assert_eq!(stats.media, 1);
    assert_eq!(stats.links, 1);
}

#[test]
fn test_senders_and_selection_list() {
    let t = parse_transcript(GROUP_CHAT).unwrap();

    assert_eq!(sender_list(&t), ["Overall", "Alice", "Bob", "Carol", "Dan"]);

    let top = top_senders(&t, 1);
    assert_eq!(top[0].sender, "group_notification");
    assert_eq!(top[0].count, 3);

    let busiest = busiest_senders(&t, 3);
    let names: Vec<_> = busiest.iter().map(|r| r.sender.as_str()).collect();
    assert_eq!(names, ["Alice", "Bob", "Carol"]);
}

#[test]
fn test_timelines_cross_year() {
    let t = parse_transcript(GROUP_CHAT).unwrap();

    let monthly = monthly_counts(&t, &SenderFilter::All);
    let labels: Vec<_> = monthly.iter().map(|m| m.label()).collect();
    assert_eq!(labels, ["2023-12", "2024-01", "2024-02"]);
    assert_eq!(monthly.iter().map(|m| m.count).collect::<Vec<_>>(), [3, 6, 1]);

    let daily = daily_counts(&t, &SenderFilter::All);
    assert_eq!(daily.len(), 4);
    assert_eq!(daily[0].date.year(), 2023);

    let hours = hourly_counts(&t, &SenderFilter::All);
    assert_eq!(hours[0].count, 4);
    assert_eq!(hours[23].count, 3);
    assert_eq!(hours.iter().map(|h| h.count).sum::<usize>(), t.len());
}

#[test]
fn test_single_sender_tables() {
    let t = parse_transcript(GROUP_CHAT).unwrap();
    let bob = SenderFilter::only("Bob");

    let stats = basic_stats(&t, &bob);
    assert_eq!(stats.messages, 2);
    assert_eq!(stats.words, 8);

    let symbols = symbol_frequency(&t, &bob, &UnicodePictographic);
    assert_eq!(symbols.total, 2);
    assert_eq!(symbols.rows, [SymbolCount { symbol: '🎉', count: 2 }]);

    let grid = weekday_hour_grid(&t, &bob);
    // 2024-01-01 was a Monday
    assert_eq!(grid.get(Weekday::Mon, 0), 2);
    assert_eq!(grid.total(), 2);
}

#[test]
fn test_emoji_overall() {
    let t = parse_transcript(GROUP_CHAT).unwrap();
    let symbols = symbol_frequency(&t, &SenderFilter::All, &UnicodePictographic);

    assert_eq!(symbols.total, 4);
    assert_eq!(symbols.rows[0], SymbolCount { symbol: '🎉', count: 3 });
    assert_eq!(symbols.rows[1], SymbolCount { symbol: '😂', count: 1 });
}

// =========================================================================
// Session + output
// =========================================================================

#[test]
fn test_session_round() {
    let session = Session::from_text(GROUP_CHAT).unwrap();
    let overall = session.analyze().unwrap();

    assert_eq!(overall.stats.messages, 10);
    assert_eq!(overall.weekdays.len(), 7);
    assert_eq!(overall.hours.len(), 24);
    let shares: f64 = overall.contribution.as_ref().unwrap().iter().map(|s| s.percent).sum();
    assert!((shares - 100.0).abs() < 0.05);

    let carol = session.select(SenderFilter::only("Carol")).analyze().unwrap();
    assert_eq!(carol.stats.messages, 2);
    assert_eq!(carol.stats.media, 1);
    assert!(carol.busiest_senders.is_none());
}

#[test]
fn test_report_mentions_every_section() {
    let analysis = Session::from_text(GROUP_CHAT).unwrap().analyze().unwrap();
    let report = render_report(&analysis);

    for heading in [
        "Busiest senders",
        "Contribution",
        "Monthly timeline",
        "Daily timeline",
        "Weekdays",
        "Hours",
        "Emoji",
        "Common words",
    ] {
        assert!(report.contains(heading), "missing {heading}");
    }
}

#[test]
fn test_json_document() {
    let analysis = Session::from_text(UK_CHAT).unwrap().analyze().unwrap();
    let json = to_json(&analysis).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["monthly"][0]["year"], 2023);
    assert_eq!(value["monthly"][0]["month"], "December");
    assert_eq!(value["monthly"][1]["month"], "January");
    assert_eq!(value["symbols"]["rows"][0]["symbol"], "❤");
}

#[test]
fn test_csv_view_for_selection() {
    let session = Session::from_text(GROUP_CHAT)
        .unwrap()
        .select(SenderFilter::only("Alice"));

    let out = to_csv(&session.view(false)).unwrap();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(out.as_bytes());

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "2023-12-31 23:59:00");
    assert_eq!(&rows[1][2], "Photos here https://photos.example.com/album");
    assert_eq!(&rows[1][4], "true");

    let full = to_csv(&session.view(true)).unwrap();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(full.as_bytes());
    assert_eq!(reader.records().count(), 10);
}
