//! Summary - Working/Non-Working Aggregate Counts

use serde::{Deserialize, Serialize};

/// Network-wide status summary for one sensor type and date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub working: u64,
    pub not_working: u64,
}

impl StatusSummary {
    pub fn total(&self) -> u64 {
        self.working + self.not_working
    }
}

/// Percentage labels for the two proportion-chart slices.
///
/// Integer truncation, not rounding, so the slices need not sum to exactly
/// 100. Returns (0, 0) for an empty summary.
pub fn slice_percentages(working: u64, not_working: u64) -> (u8, u8) {
    let total = working + not_working;
    if total == 0 {
        return (0, 0);
    }
    (
        (working * 100 / total) as u8,
        (not_working * 100 / total) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentages_floor() {
        // 1/3 and 2/3 truncate to 33 and 66; they do not sum to 100
        assert_eq!(slice_percentages(1, 2), (33, 66));
        assert_eq!(slice_percentages(2, 1), (66, 33));
    }

    #[test]
    fn test_percentages_exact() {
        assert_eq!(slice_percentages(7, 3), (70, 30));
        assert_eq!(slice_percentages(10, 0), (100, 0));
        assert_eq!(slice_percentages(0, 5), (0, 100));
    }

    #[test]
    fn test_percentages_empty() {
        assert_eq!(slice_percentages(0, 0), (0, 0));
    }

    #[test]
    fn test_summary_parse() {
        let s: StatusSummary =
            serde_json::from_str(r#"{"working": 120, "not_working": 14}"#).expect("parse");
        assert_eq!(s.working, 120);
        assert_eq!(s.not_working, 14);
        assert_eq!(s.total(), 134);
    }
}
