use std::fmt::Write;

use anyhow::Context;
use serde::Serialize;

use crate::models::{PageView, RankedRecord, Record};

#[derive(Serialize)]
struct JsonEntry<'a> {
    rank: usize,
    score: i64,
    podium: bool,
    #[serde(flatten)]
    record: &'a Record,
}

#[derive(Serialize)]
struct JsonPage<'a> {
    query: &'a str,
    page: usize,
    total_pages: usize,
    total_matches: usize,
    entries: Vec<JsonEntry<'a>>,
}

impl<'a> From<&RankedRecord<'a>> for JsonEntry<'a> {
    fn from(entry: &RankedRecord<'a>) -> Self {
        Self {
            rank: entry.rank,
            score: entry.score(),
            podium: entry.is_podium(),
            record: entry.record,
        }
    }
}

pub fn render_json(view: &PageView<'_>) -> anyhow::Result<String> {
    let page = JsonPage {
        query: &view.query,
        page: view.page,
        total_pages: view.total_pages,
        total_matches: view.total_matches,
        entries: view.entries.iter().map(JsonEntry::from).collect(),
    };
    serde_json::to_string_pretty(&page).context("failed to encode page as JSON")
}

pub fn render_table(view: &PageView<'_>) -> String {
    let mut output = String::new();

    if view.entries.is_empty() {
        if view.query.is_empty() {
            let _ = writeln!(output, "The leaderboard is empty.");
        } else {
            let _ = writeln!(output, "No records match \"{}\".", view.query);
        }
    } else {
        let _ = writeln!(
            output,
            "{:>5}      {:<20} {:<20} {:<18} {:>5} {:>8} {:>6} {:>5}",
            "Rank", "Name", "Department", "Completed", "Speed", "Accuracy", "Engage", "Score"
        );
    }

    for entry in view.entries.iter() {
        let record = entry.record;
        let marker = if entry.is_podium() { '*' } else { ' ' };
        let _ = writeln!(
            output,
            "{}{:>4} {}  {} {:<20} {:<20} {:<18} {:>5} {:>7}% {:>6} {:>5}",
            marker,
            entry.rank,
            record.change.arrow(),
            entry.initial().unwrap_or(' '),
            record.name,
            record.department,
            record.completion_date.as_deref().unwrap_or("-"),
            record.speed,
            record.accuracy,
            record.engagement,
            entry.score()
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "Page {} of {} ({} {})",
        view.page,
        view.total_pages,
        view.total_matches,
        if view.total_matches == 1 { "match" } else { "matches" }
    );
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardState, Leaderboard};
    use crate::pagination::DEFAULT_PAGE_SIZE;
    use crate::roster;

    #[test]
    fn table_marks_podium_and_reports_paging() {
        let board = Leaderboard::new(roster::builtin(), DEFAULT_PAGE_SIZE);
        let table = render_table(&board.view(&BoardState::new("an", 1)));
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 13);
        assert!(lines[1].starts_with("*   1 -  A Aisha Abdullah"));
        assert!(lines[5].starts_with("    6 ↓  R Raj Patel"));
        assert!(lines[1].contains("December 8, 2024"));
        assert!(lines[1].trim_end().ends_with("185"));
        assert_eq!(lines[12], "Page 1 of 2 (14 matches)");
    }

    #[test]
    fn table_for_no_matches_says_so() {
        let board = Leaderboard::new(roster::builtin(), DEFAULT_PAGE_SIZE);
        let table = render_table(&board.view(&BoardState::new("zzz", 1)));
        assert_eq!(table, "No records match \"zzz\".\n\nPage 1 of 1 (0 matches)\n");
    }

    #[test]
    fn empty_roster_keeps_footer() {
        let board = Leaderboard::new(Vec::new(), DEFAULT_PAGE_SIZE);
        let table = render_table(&board.view(&BoardState::default()));
        assert_eq!(table, "The leaderboard is empty.\n\nPage 1 of 1 (0 matches)\n");
    }

    #[test]
    fn json_carries_rank_score_and_record_fields() {
        let board = Leaderboard::new(roster::builtin(), DEFAULT_PAGE_SIZE);
        let json = render_json(&board.view(&BoardState::new("treasury", 7))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["page"], 1);
        assert_eq!(value["total_pages"], 1);
        assert_eq!(value["total_matches"], 1);
        assert_eq!(value["query"], "treasury");

        let entry = &value["entries"][0];
        assert_eq!(entry["rank"], 5);
        assert_eq!(entry["score"], 170);
        assert_eq!(entry["podium"], false);
        assert_eq!(entry["name"], "Omar Farouk");
        assert_eq!(entry["change"], "up");
        assert_eq!(entry["completion_date"], "November 22, 2024");
    }
}
