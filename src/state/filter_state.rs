//! FilterState - Top-Level Dashboard Filters

use chrono::{Local, NaiveDate};

use crate::domain::filter::{SensorType, StatusFilter};

/// The three top-level filters: sensor type, date, and status.
///
/// Always fully defined. Mutated only through the dashboard controller.
/// Invariant: `date <= today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterState {
    pub sensor_type: SensorType,
    pub date: NaiveDate,
    pub status_filter: StatusFilter,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            sensor_type: SensorType::default(),
            date: Local::now().date_naive(),
            status_filter: StatusFilter::default(),
        }
    }
}

impl FilterState {
    /// Set the date, clamped at today. Returns the date actually applied.
    pub fn set_date(&mut self, date: NaiveDate) -> NaiveDate {
        let today = Local::now().date_naive();
        self.date = date.min(today);
        self.date
    }

    /// Step one day back
    pub fn prev_day(&mut self) {
        if let Some(prev) = self.date.pred_opt() {
            self.date = prev;
        }
    }

    /// Step one day forward, capped at today
    pub fn next_day(&mut self) {
        let today = Local::now().date_naive();
        if let Some(next) = self.date.succ_opt() {
            self.date = next.min(today);
        }
    }

    /// Date formatted for backend queries (ISO calendar date)
    pub fn date_param(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = FilterState::default();
        assert_eq!(state.sensor_type, SensorType::Aws);
        assert_eq!(state.status_filter, StatusFilter::All);
        assert_eq!(state.date, Local::now().date_naive());
    }

    #[test]
    fn test_set_date_clamps_future() {
        let mut state = FilterState::default();
        let today = Local::now().date_naive();
        let future = today + chrono::Duration::days(30);
        assert_eq!(state.set_date(future), today);
        assert_eq!(state.date, today);
    }

    #[test]
    fn test_set_date_past_allowed() {
        let mut state = FilterState::default();
        let past = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        assert_eq!(state.set_date(past), past);
        assert_eq!(state.date_param(), "2024-01-01");
    }

    #[test]
    fn test_next_day_capped_at_today() {
        let mut state = FilterState::default();
        let today = Local::now().date_naive();
        state.next_day();
        assert_eq!(state.date, today);

        state.prev_day();
        assert_eq!(state.date, today - chrono::Duration::days(1));
        state.next_day();
        assert_eq!(state.date, today);
    }
}
