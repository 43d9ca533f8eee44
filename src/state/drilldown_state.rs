//! DrillDown - Vendor → District → Block Navigation State Machine
//!
//! The single owner of the drill-down selection. All transitions run through
//! the dashboard controller; views only read.

use crate::domain::station::Status;

/// Drill-down selection state
///
/// `Collapsed` → `VendorSelected(vendor, branch)` → `DistrictSelected(...)`.
/// Both branches record a district selection; only the non-working branch
/// descends further into block faults, since faults are only meaningful for
/// non-working stations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DrillDown {
    #[default]
    Collapsed,
    VendorSelected {
        vendor: String,
        branch: Status,
    },
    DistrictSelected {
        vendor: String,
        branch: Status,
        district: String,
    },
}

impl DrillDown {
    /// Activate a vendor count badge. Replaces any previous selection.
    pub fn select_vendor(&mut self, vendor: impl Into<String>, branch: Status) {
        *self = DrillDown::VendorSelected {
            vendor: vendor.into(),
            branch,
        };
    }

    /// Select a district row, returning whether a block-fault fetch should
    /// follow.
    ///
    /// The district is recorded on both branches so the row highlight works
    /// everywhere, but only the non-working branch fetches fault detail;
    /// working stations have no faults to report.
    pub fn select_district(&mut self, district: impl Into<String>) -> bool {
        match self {
            DrillDown::VendorSelected { vendor, branch }
            | DrillDown::DistrictSelected { vendor, branch, .. } => {
                let fetch = *branch == Status::NonWorking;
                *self = DrillDown::DistrictSelected {
                    vendor: vendor.clone(),
                    branch: *branch,
                    district: district.into(),
                };
                fetch
            }
            DrillDown::Collapsed => false,
        }
    }

    /// Reset to `Collapsed` (top-level sensor type or date change)
    pub fn reset(&mut self) {
        *self = DrillDown::Collapsed;
    }

    pub fn vendor(&self) -> Option<&str> {
        match self {
            DrillDown::Collapsed => None,
            DrillDown::VendorSelected { vendor, .. }
            | DrillDown::DistrictSelected { vendor, .. } => Some(vendor),
        }
    }

    pub fn branch(&self) -> Option<Status> {
        match self {
            DrillDown::Collapsed => None,
            DrillDown::VendorSelected { branch, .. }
            | DrillDown::DistrictSelected { branch, .. } => Some(*branch),
        }
    }

    pub fn district(&self) -> Option<&str> {
        match self {
            DrillDown::DistrictSelected { district, .. } => Some(district),
            _ => None,
        }
    }

    /// Whether the district breakdown panel is shown
    pub fn district_panel_visible(&self) -> bool {
        !matches!(self, DrillDown::Collapsed)
    }

    /// Whether the block-fault panel is shown.
    ///
    /// The non-working branch always reveals it; the working branch hides it.
    pub fn block_panel_visible(&self) -> bool {
        self.branch() == Some(Status::NonWorking)
    }

    /// Status-branch indicator label for the district panel
    pub fn status_tag(&self) -> Option<&'static str> {
        self.branch().map(Status::as_param)
    }

    /// Whether this selection matches a (vendor, branch) pair.
    ///
    /// Used to drop district responses whose selection has been superseded.
    pub fn matches_vendor(&self, vendor: &str, branch: Status) -> bool {
        self.vendor() == Some(vendor) && self.branch() == Some(branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_collapsed() {
        let dd = DrillDown::default();
        assert_eq!(dd, DrillDown::Collapsed);
        assert!(!dd.district_panel_visible());
        assert!(!dd.block_panel_visible());
        assert!(dd.status_tag().is_none());
    }

    #[test]
    fn test_non_working_badge_reveals_block_panel() {
        let mut dd = DrillDown::default();
        dd.select_vendor("V1", Status::NonWorking);
        assert!(dd.district_panel_visible());
        assert!(dd.block_panel_visible());
        assert_eq!(dd.status_tag(), Some("NON-WORKING"));
        assert_eq!(dd.vendor(), Some("V1"));
    }

    #[test]
    fn test_working_badge_hides_block_panel() {
        let mut dd = DrillDown::default();
        dd.select_vendor("V1", Status::Working);
        assert!(dd.district_panel_visible());
        assert!(!dd.block_panel_visible());
        assert_eq!(dd.status_tag(), Some("WORKING"));
    }

    #[test]
    fn test_reselect_replaces_selection() {
        let mut dd = DrillDown::default();
        dd.select_vendor("V1", Status::NonWorking);
        dd.select_district("Vaishali");
        dd.select_vendor("V2", Status::Working);
        assert_eq!(dd.vendor(), Some("V2"));
        assert!(dd.district().is_none());
    }

    #[test]
    fn test_district_selection_non_working_branch() {
        let mut dd = DrillDown::default();
        dd.select_vendor("V1", Status::NonWorking);
        assert!(dd.select_district("Vaishali"));
        assert_eq!(dd.district(), Some("Vaishali"));
        assert!(dd.block_panel_visible());

        // re-selecting a different district replaces it
        assert!(dd.select_district("Samastipur"));
        assert_eq!(dd.district(), Some("Samastipur"));
    }

    #[test]
    fn test_district_selection_working_branch_highlights_without_fetch() {
        let mut dd = DrillDown::default();
        dd.select_vendor("V1", Status::Working);
        // the row is marked selected, but no fault fetch follows
        assert!(!dd.select_district("Vaishali"));
        assert_eq!(dd.district(), Some("Vaishali"));
        assert!(!dd.block_panel_visible());
    }

    #[test]
    fn test_district_selection_while_collapsed_is_ignored() {
        let mut dd = DrillDown::default();
        assert!(!dd.select_district("Vaishali"));
        assert_eq!(dd, DrillDown::Collapsed);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut dd = DrillDown::default();
        dd.select_vendor("V1", Status::NonWorking);
        dd.select_district("Vaishali");
        dd.reset();
        assert_eq!(dd, DrillDown::Collapsed);
        assert!(!dd.district_panel_visible());
        assert!(!dd.block_panel_visible());
    }

    #[test]
    fn test_matches_vendor() {
        let mut dd = DrillDown::default();
        dd.select_vendor("V1", Status::NonWorking);
        assert!(dd.matches_vendor("V1", Status::NonWorking));
        assert!(!dd.matches_vendor("V1", Status::Working));
        assert!(!dd.matches_vendor("V2", Status::NonWorking));
        dd.select_district("Vaishali");
        assert!(dd.matches_vendor("V1", Status::NonWorking));
    }
}
