//! DashboardState - Fetched Dashboard Data with Stale-Response Guards
//!
//! Holds everything the dashboard views render. Each top-level collection is
//! fully replaced on refresh; sequence numbers keep a reordered network from
//! letting an older refresh overwrite a newer one.

use crate::domain::district::DistrictSummaryRow;
use crate::domain::fault::BlockFaultRow;
use crate::domain::station::StationPoint;
use crate::domain::summary::StatusSummary;
use crate::domain::vendor::VendorSummaryRow;

/// State for the dashboard's fetched collections
#[derive(Debug, Default)]
pub struct DashboardState {
    pub summary: Option<StatusSummary>,
    pub stations: Vec<StationPoint>,
    pub vendor_rows: Vec<VendorSummaryRow>,
    pub district_rows: Vec<DistrictSummaryRow>,
    pub fault_rows: Vec<BlockFaultRow>,

    /// Loading flags
    pub summary_loading: bool,
    pub vendors_loading: bool,
    pub districts_loading: bool,
    pub faults_loading: bool,

    /// Last applied refresh sequence per top-level query kind
    summary_seq: u64,
    map_seq: u64,
    vendors_seq: u64,
}

impl DashboardState {
    /// Mark a new top-level refresh as in flight
    pub fn begin_refresh(&mut self) {
        self.summary_loading = true;
        self.vendors_loading = true;
    }

    /// Apply a summary response; stale sequences are dropped.
    pub fn apply_summary(&mut self, seq: u64, summary: StatusSummary) -> bool {
        if seq < self.summary_seq {
            return false;
        }
        self.summary_seq = seq;
        self.summary = Some(summary);
        self.summary_loading = false;
        true
    }

    /// Apply a map response, replacing the full marker set.
    pub fn apply_stations(&mut self, seq: u64, stations: Vec<StationPoint>) -> bool {
        if seq < self.map_seq {
            return false;
        }
        self.map_seq = seq;
        self.stations = stations;
        true
    }

    /// Apply a vendor-summary response.
    pub fn apply_vendors(&mut self, seq: u64, rows: Vec<VendorSummaryRow>) -> bool {
        if seq < self.vendors_seq {
            return false;
        }
        self.vendors_seq = seq;
        self.vendor_rows = rows;
        self.vendors_loading = false;
        true
    }

    /// Replace the district breakdown (selection matching is the caller's job)
    pub fn apply_districts(&mut self, rows: Vec<DistrictSummaryRow>) {
        self.district_rows = rows;
        self.districts_loading = false;
    }

    /// Replace the block-fault detail
    pub fn apply_faults(&mut self, rows: Vec<BlockFaultRow>) {
        self.fault_rows = rows;
        self.faults_loading = false;
    }

    /// Clear both drill-down tables (sensor type or date changed).
    ///
    /// Top-level collections are left alone; they are about to be replaced
    /// by the refresh that accompanies the reset.
    pub fn clear_drilldown(&mut self) {
        self.district_rows.clear();
        self.fault_rows.clear();
        self.districts_loading = false;
        self.faults_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: &str) -> StationPoint {
        serde_json::from_str(&format!(
            r#"{{"station_id": "{id}", "status": "WORKING", "lat": 25.0, "lon": 85.0}}"#
        ))
        .expect("station")
    }

    #[test]
    fn test_stale_summary_dropped() {
        let mut state = DashboardState::default();
        assert!(state.apply_summary(2, StatusSummary { working: 5, not_working: 1 }));
        // an older refresh resolving late must not overwrite
        assert!(!state.apply_summary(1, StatusSummary { working: 9, not_working: 9 }));
        assert_eq!(
            state.summary,
            Some(StatusSummary { working: 5, not_working: 1 })
        );
    }

    #[test]
    fn test_equal_seq_applies() {
        // two responses from the same dispatch replace in arrival order
        let mut state = DashboardState::default();
        assert!(state.apply_stations(3, vec![station("A")]));
        assert!(state.apply_stations(3, vec![station("B")]));
        assert_eq!(state.stations[0].station_id, "B");
    }

    #[test]
    fn test_map_full_replace() {
        let mut state = DashboardState::default();
        state.apply_stations(1, vec![station("A"), station("B")]);
        state.apply_stations(2, vec![station("C")]);
        assert_eq!(state.stations.len(), 1);
        assert_eq!(state.stations[0].station_id, "C");
    }

    #[test]
    fn test_clear_drilldown_leaves_top_level() {
        let mut state = DashboardState::default();
        state.apply_summary(1, StatusSummary { working: 3, not_working: 2 });
        state.apply_districts(vec![serde_json::from_str(
            r#"{"district": "Vaishali", "total_installed": 4}"#,
        )
        .expect("row")]);
        state.apply_faults(vec![BlockFaultRow::default()]);

        state.clear_drilldown();
        assert!(state.district_rows.is_empty());
        assert!(state.fault_rows.is_empty());
        assert!(state.summary.is_some());
    }

    #[test]
    fn test_vendor_seq_independent_of_summary_seq() {
        let mut state = DashboardState::default();
        assert!(state.apply_summary(5, StatusSummary::default()));
        // vendor stream has its own counter; seq 4 may still be the newest
        assert!(state.apply_vendors(4, Vec::new()));
    }
}
