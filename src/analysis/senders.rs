//! Per-sender rankings and the selection list.

use std::collections::BTreeSet;

use serde::Serialize;

use super::{OVERALL, Tally};
use crate::parsing::GROUP_NOTIFICATION;
use crate::record::Record;
use crate::transcript::Transcript;

/// Messages sent by one sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SenderCount {
    pub sender: String,
    pub count: usize,
}

/// One sender's share of all messages, in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SenderShare {
    pub sender: String,
    /// Rounded to two decimals
    pub percent: f64,
}

/// Ranks senders by message count and returns the first `k`.
///
/// Ties keep first-encounter order. The group-notification sentinel is
/// ranked like any other sender; use [`busiest_senders`] to leave it out.
pub fn top_senders(table: &Transcript, k: usize) -> Vec<SenderCount> {
    rank(table.iter(), k)
}

/// Like [`top_senders`], but without group notifications.
pub fn busiest_senders(table: &Transcript, k: usize) -> Vec<SenderCount> {
    rank(table.iter().filter(|r| !r.is_notification()), k)
}

fn rank<'a>(records: impl Iterator<Item = &'a Record>, k: usize) -> Vec<SenderCount> {
    let mut tally = Tally::new();
    for record in records {
        tally.add(record.sender());
    }
    tally
        .ranked()
        .into_iter()
        .take(k)
        .map(|(sender, count)| SenderCount {
            sender: sender.to_string(),
            count,
        })
        .collect()
}

/// Selection list: [`OVERALL`] followed by every real sender, sorted.
///
/// A sender literally named `"Overall"` is not listed, since selecting that
/// label means the whole chat.
pub fn sender_list(table: &Transcript) -> Vec<String> {
    let senders: BTreeSet<&str> = table
        .iter()
        .map(Record::sender)
        .filter(|s| *s != GROUP_NOTIFICATION && *s != OVERALL)
        .collect();

    std::iter::once(OVERALL)
        .chain(senders)
        .map(str::to_string)
        .collect()
}

/// Percentage of all messages contributed by each sender.
///
/// Ordered like [`top_senders`]; group notifications are included so that the
/// shares add up to 100. Empty for an empty transcript.
pub fn sender_contribution(table: &Transcript) -> Vec<SenderShare> {
    let total = table.len();
    if total == 0 {
        return Vec::new();
    }

    top_senders(table, usize::MAX)
        .into_iter()
        .map(|row| SenderShare {
            percent: round2(row.count as f64 * 100.0 / total as f64),
            sender: row.sender,
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_transcript;

    const CHAT: &str = "\
1/1/24, 10:00 - Alice created group \"Trip\"
1/1/24, 10:01 - Bob: hi
1/1/24, 10:02 - Alice: hello
1/1/24, 10:03 - Carol: hey
1/1/24, 10:04 - Carol: again
1/1/24, 10:05 - Bob: yes
1/1/24, 10:06 - Dan: late";

    #[test]
    fn test_top_senders_ranking_and_ties() {
        let t = parse_transcript(CHAT).unwrap();
        let top = top_senders(&t, 5);
        let names: Vec<_> = top.iter().map(|r| (r.sender.as_str(), r.count)).collect();
        assert_eq!(
            names,
            [
                ("Bob", 2),
                ("Carol", 2),
                (GROUP_NOTIFICATION, 1),
                ("Alice", 1),
                ("Dan", 1)
            ]
        );
    }

    #[test]
    fn test_top_senders_truncates() {
        let t = parse_transcript(CHAT).unwrap();
        assert_eq!(top_senders(&t, 2).len(), 2);
        assert!(top_senders(&t, 0).is_empty());
    }

    #[test]
    fn test_busiest_senders_excludes_sentinel() {
        let t = parse_transcript(CHAT).unwrap();
        let busiest = busiest_senders(&t, 10);
        assert_eq!(busiest.len(), 4);
        assert!(busiest.iter().all(|r| r.sender != GROUP_NOTIFICATION));
    }

    #[test]
    fn test_partition_over_all_senders() {
        let t = parse_transcript(CHAT).unwrap();
        let sum: usize = top_senders(&t, usize::MAX).iter().map(|r| r.count).sum();
        assert_eq!(sum, t.len());
    }

    #[test]
    fn test_sender_list() {
        let t = parse_transcript(CHAT).unwrap();
        assert_eq!(sender_list(&t), ["Overall", "Alice", "Bob", "Carol", "Dan"]);
    }

    #[test]
    fn test_sender_named_overall_not_listed_twice() {
        let t =
            parse_transcript("1/1/24, 10:00 - Overall: hi\n1/1/24, 10:01 - Bob: hey").unwrap();
        assert_eq!(sender_list(&t), ["Overall", "Bob"]);
    }

    #[test]
    fn test_sender_contribution() {
        let t = parse_transcript(CHAT).unwrap();
        let shares = sender_contribution(&t);
        assert_eq!(shares[0].sender, "Bob");
        assert!((shares[0].percent - 28.57).abs() < f64::EPSILON);
        let total: f64 = shares.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 0.05);
    }
}
