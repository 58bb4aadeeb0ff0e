use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Change {
    Up,
    Down,
    Same,
}

impl Change {
    pub fn as_str(self) -> &'static str {
        match self {
            Change::Up => "up",
            Change::Down => "down",
            Change::Same => "same",
        }
    }

    pub fn arrow(self) -> char {
        match self {
            Change::Up => '↑',
            Change::Down => '↓',
            Change::Same => '-',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub department: String,
    pub speed: i32,
    pub accuracy: i32,
    pub engagement: i32,
    pub change: Change,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,
}

/// A record paired with its 1-based position in the sorted roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedRecord<'a> {
    pub rank: usize,
    pub record: &'a Record,
}

impl RankedRecord<'_> {
    pub fn score(&self) -> i64 {
        crate::ranking::score(self.record)
    }

    pub fn is_podium(&self) -> bool {
        self.rank <= 3
    }

    pub fn initial(&self) -> Option<char> {
        self.record.name.chars().next()
    }
}

/// One page of the leaderboard, with the totals it was sliced from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    pub query: String,
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    pub entries: Vec<RankedRecord<'a>>,
}

#[derive(Debug, Clone)]
pub struct DepartmentSummary {
    pub department: String,
    pub count: usize,
    pub avg_score: f64,
}
