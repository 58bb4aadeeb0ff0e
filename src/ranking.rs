use std::cmp::Ordering;

use crate::models::{RankedRecord, Record};

/// Higher accuracy first, then lower speed, then higher engagement.
pub fn compare(a: &Record, b: &Record) -> Ordering {
    b.accuracy
        .cmp(&a.accuracy)
        .then_with(|| a.speed.cmp(&b.speed))
        .then_with(|| b.engagement.cmp(&a.engagement))
}

pub fn rank(roster: &[Record]) -> Vec<RankedRecord<'_>> {
    let mut ordered: Vec<&Record> = roster.iter().collect();
    // sort_by is stable, so full ties keep roster order.
    ordered.sort_by(|a, b| compare(a, b));

    ordered
        .into_iter()
        .enumerate()
        .map(|(index, record)| RankedRecord {
            rank: index + 1,
            record,
        })
        .collect()
}

/// `round(accuracy + speed / 2 + engagement * 10)`, halves rounded away from zero.
pub fn score(record: &Record) -> i64 {
    let doubled = 2 * i64::from(record.accuracy)
        + i64::from(record.speed)
        + 20 * i64::from(record.engagement);

    if doubled >= 0 {
        (doubled + 1) / 2
    } else {
        (doubled - 1) / 2
    }
}

pub fn query<'a>(ranked: &[RankedRecord<'a>], text: &str) -> Vec<RankedRecord<'a>> {
    if text.is_empty() {
        return ranked.to_vec();
    }
    let needle = text.to_lowercase();

    ranked
        .iter()
        .filter(|entry| contains_lowercase(entry.record, &needle))
        .copied()
        .collect()
}

fn contains_lowercase(record: &Record, needle: &str) -> bool {
    record.name.to_lowercase().contains(needle)
        || record.department.to_lowercase().contains(needle)
}
