use std::collections::HashMap;
use std::fmt::Write;

use chrono::NaiveDate;

use crate::board::Leaderboard;
use crate::models::{DepartmentSummary, RankedRecord};

pub fn summarize_by_department(entries: &[RankedRecord<'_>]) -> Vec<DepartmentSummary> {
    let mut map: HashMap<&str, (usize, i64)> = HashMap::new();

    for entry in entries {
        let bucket = map.entry(entry.record.department.as_str()).or_insert((0, 0));
        bucket.0 += 1;
        bucket.1 += entry.score();
    }

    let mut summaries: Vec<DepartmentSummary> = map
        .into_iter()
        .map(|(department, (count, total_score))| DepartmentSummary {
            department: department.to_string(),
            count,
            avg_score: if count == 0 {
                0.0
            } else {
                total_score as f64 / count as f64
            },
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.department.cmp(&b.department))
    });
    summaries
}

pub fn build_report(board: &Leaderboard, query: Option<&str>, generated_on: NaiveDate) -> String {
    let query = query.filter(|text| !text.is_empty());
    let entries = board.matching(query.unwrap_or_default());
    let summaries = summarize_by_department(&entries);

    let mut output = String::new();
    let scope_label = match query {
        Some(text) => format!("records matching \"{text}\""),
        None => "the full roster".to_string(),
    };

    let _ = writeln!(output, "# Culture Leaderboard Report");
    let _ = writeln!(
        output,
        "Generated on {} for {} ({} of {} records)",
        generated_on.format("%B %-d, %Y"),
        scope_label,
        entries.len(),
        board.roster().len()
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Podium");

    let podium: Vec<&RankedRecord<'_>> = entries.iter().filter(|entry| entry.is_podium()).collect();
    if podium.is_empty() {
        let _ = writeln!(output, "No podium finishers in this view.");
    } else {
        for entry in podium {
            let _ = writeln!(
                output,
                "{}. {} ({}) score {}",
                entry.rank,
                entry.record.name,
                entry.record.department,
                entry.score()
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Rankings");

    if entries.is_empty() {
        let _ = writeln!(output, "No records match this view.");
    } else {
        let _ = writeln!(
            output,
            "| Rank | Trend | Name | Department | Speed | Accuracy | Engagement | Score |"
        );
        let _ = writeln!(output, "|---:|:---:|---|---|---:|---:|---:|---:|");
        for entry in entries.iter() {
            let record = entry.record;
            let _ = writeln!(
                output,
                "| {} | {} | {} | {} | {} | {}% | {} | {} |",
                entry.rank,
                record.change.arrow(),
                record.name,
                record.department,
                record.speed,
                record.accuracy,
                record.engagement,
                entry.score()
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Departments");

    if summaries.is_empty() {
        let _ = writeln!(output, "No departments represented.");
    } else {
        for summary in summaries.iter() {
            let _ = writeln!(
                output,
                "- {}: {} {} (avg score {:.1})",
                summary.department,
                summary.count,
                if summary.count == 1 { "person" } else { "people" },
                summary.avg_score
            );
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Change, Record};
    use crate::pagination::DEFAULT_PAGE_SIZE;
    use crate::roster;

    fn sample_record(name: &str, department: &str, accuracy: i32) -> Record {
        Record {
            name: name.to_string(),
            department: department.to_string(),
            speed: 60,
            accuracy,
            engagement: 4,
            change: Change::Up,
            completion_date: None,
        }
    }

    fn report_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 15).unwrap()
    }

    #[test]
    fn departments_group_and_average_scores() {
        let roster = vec![
            sample_record("A", "Treasury", 90),
            sample_record("B", "Treasury", 91),
            sample_record("C", "Audit", 80),
        ];
        let board = Leaderboard::new(roster, DEFAULT_PAGE_SIZE);
        let summaries = summarize_by_department(&board.ranked());

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].department, "Treasury");
        assert_eq!(summaries[0].count, 2);
        // 160 and 161 average to 160.5.
        assert!((summaries[0].avg_score - 160.5).abs() < 0.001);
        assert_eq!(summaries[1].department, "Audit");
    }

    #[test]
    fn full_report_lists_podium_and_every_record() {
        let board = Leaderboard::new(roster::builtin(), DEFAULT_PAGE_SIZE);
        let report = build_report(&board, None, report_date());

        assert!(report.starts_with("# Culture Leaderboard Report\n"));
        assert!(report.contains("Generated on December 15, 2024 for the full roster (20 of 20 records)"));
        assert!(report.contains("1. Aisha Abdullah (Compliance) score 185"));
        assert!(report.contains("2. Fatima Al-Sayed (Corporate Banking) score 186"));
        assert!(report.contains("| 20 | ↓ | Tariq Aziz | Cards & Payments | 76 | 84% | 3 | 152 |"));
        assert!(report.contains("- Operations: 1 person"));
    }

    #[test]
    fn filtered_report_keeps_absolute_ranks() {
        let board = Leaderboard::new(roster::builtin(), DEFAULT_PAGE_SIZE);
        let report = build_report(&board, Some("banking"), report_date());

        assert!(report.contains("records matching \"banking\" (5 of 20 records)"));
        assert!(report.contains("2. Fatima Al-Sayed"));
        assert!(!report.contains("1. Aisha Abdullah"));
        assert!(report.contains("| 6 | ↓ | Raj Patel |"));
    }

    #[test]
    fn empty_match_still_renders_every_section() {
        let board = Leaderboard::new(roster::builtin(), DEFAULT_PAGE_SIZE);
        let report = build_report(&board, Some("nobody"), report_date());

        assert!(report.contains("No podium finishers in this view."));
        assert!(report.contains("No records match this view."));
        assert!(report.contains("No departments represented."));
    }
}
