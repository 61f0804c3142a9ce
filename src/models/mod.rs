use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

pub type SongId = u64;

// Song id -> accumulated weight (votes for a round, points for the standings)
pub type Tally = HashMap<SongId, u64>;

// Best songs first, at most PLACING_SIZE of them
pub type Placing = Vec<SongId>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Delta {
    /// The song was not in the previous placing.
    New,
    /// Previous position minus current position; positive means the song climbed.
    Moved(i64),
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delta::New => write!(f, "-"),
            Delta::Moved(change) => write!(f, "{}", change),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparisonEntry {
    pub song: SongId,
    pub delta: Delta,
}

impl fmt::Display for ComparisonEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.song, self.delta)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Round,
    Standings,
}

// What a closed round or a standings request produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub kind: ReportKind,
    pub entries: Vec<ComparisonEntry>,
}

impl Report {
    pub fn new(kind: ReportKind, entries: Vec<ComparisonEntry>) -> Self {
        Self { kind, entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_display() {
        let climbed = ComparisonEntry { song: 4, delta: Delta::Moved(2) };
        let dropped = ComparisonEntry { song: 1, delta: Delta::Moved(-1) };
        let fresh = ComparisonEntry { song: 9, delta: Delta::New };
        assert_eq!(climbed.to_string(), "4 2");
        assert_eq!(dropped.to_string(), "1 -1");
        assert_eq!(fresh.to_string(), "9 -");
    }

    #[test]
    fn test_report_json_shape() {
        let report = Report::new(
            ReportKind::Standings,
            vec![
                ComparisonEntry { song: 3, delta: Delta::Moved(0) },
                ComparisonEntry { song: 7, delta: Delta::New },
            ],
        );
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"standings","entries":[{"song":3,"delta":{"moved":0}},{"song":7,"delta":"new"}]}"#
        );
    }
}
