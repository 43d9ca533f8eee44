//! Dashboard Controller
//!
//! The single mutation path for filters and the drill-down selection. Views
//! call into the controller; the controller updates state entities and
//! dispatches fetches through the service hub.

use chrono::NaiveDate;
use gpui::App;
use tracing::info;

use crate::app::entities::AppEntities;
use crate::domain::filter::{SensorType, StatusFilter};
use crate::domain::station::Status;
use crate::eventing::app_event::AppEvent;
use crate::features::report::exporter;
use crate::services::service_hub::ServiceHub;

/// Dashboard page controller
pub struct DashboardController {
    entities: AppEntities,
}

impl DashboardController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Dispatch a fresh top-level refresh with the current filters
    pub fn refresh(&self, cx: &mut App) {
        let filter = *self.entities.filter.read(cx);

        self.entities.dashboard.update(cx, |state, cx| {
            state.begin_refresh();
            cx.notify();
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            let seq = hub.next_refresh_seq();
            info!(seq, date = %filter.date_param(), "Refreshing dashboard");
            hub.refresh(filter, seq);
        }
    }

    /// Switch the sensor type. Resets the drill-down and refreshes.
    pub fn set_sensor_type(&self, sensor_type: SensorType, cx: &mut App) {
        let changed = self.entities.filter.update(cx, |filter, cx| {
            if filter.sensor_type == sensor_type {
                return false;
            }
            filter.sensor_type = sensor_type;
            cx.notify();
            true
        });

        if changed {
            self.reset_drilldown(cx);
            self.refresh(cx);
        }
    }

    /// Set the report date. Resets the drill-down and refreshes.
    pub fn set_date(&self, date: NaiveDate, cx: &mut App) {
        let changed = self.entities.filter.update(cx, |filter, cx| {
            let before = filter.date;
            filter.set_date(date);
            if filter.date == before {
                return false;
            }
            cx.notify();
            true
        });

        if changed {
            self.reset_drilldown(cx);
            self.refresh(cx);
        }
    }

    /// Step the date one day back
    pub fn prev_day(&self, cx: &mut App) {
        let date = self.entities.filter.read(cx).date;
        if let Some(prev) = date.pred_opt() {
            self.set_date(prev, cx);
        }
    }

    /// Step the date one day forward (capped at today)
    pub fn next_day(&self, cx: &mut App) {
        let date = self.entities.filter.read(cx).date;
        if let Some(next) = date.succ_opt() {
            self.set_date(next, cx);
        }
    }

    /// Switch the status filter.
    ///
    /// Refreshes the top-level data only; the drill-down selection and its
    /// panels are left alone, since they are scoped by their own status
    /// branch rather than the top-level filter.
    pub fn set_status_filter(&self, status_filter: StatusFilter, cx: &mut App) {
        let changed = self.entities.filter.update(cx, |filter, cx| {
            if filter.status_filter == status_filter {
                return false;
            }
            filter.status_filter = status_filter;
            cx.notify();
            true
        });

        if changed {
            self.refresh(cx);
        }
    }

    /// Activate a vendor count badge, loading its district breakdown
    pub fn select_vendor(&self, vendor: String, branch: Status, cx: &mut App) {
        self.entities.drilldown.update(cx, |dd, cx| {
            dd.select_vendor(vendor.clone(), branch);
            cx.notify();
        });

        // Stale panels from a previous selection must not linger
        self.entities.dashboard.update(cx, |state, cx| {
            state.district_rows.clear();
            state.fault_rows.clear();
            state.districts_loading = true;
            cx.notify();
        });

        let filter = *self.entities.filter.read(cx);
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.log(AppEvent::info(format!(
                "Loading {} districts for vendor {vendor}",
                branch.as_param()
            )));
            hub.load_districts(filter, vendor, branch);
        }
    }

    /// Select a district row, loading block-fault detail on the
    /// non-working branch
    pub fn select_district(&self, district: String, cx: &mut App) {
        let fetch = self.entities.drilldown.update(cx, |dd, cx| {
            let fetch = dd.select_district(district.clone());
            cx.notify();
            fetch
        });

        if !fetch {
            return;
        }

        let vendor = self
            .entities
            .drilldown
            .read(cx)
            .vendor()
            .unwrap_or_default()
            .to_string();

        self.entities.dashboard.update(cx, |state, cx| {
            state.fault_rows.clear();
            state.faults_loading = true;
            cx.notify();
        });

        let filter = *self.entities.filter.read(cx);
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.load_faults(filter, vendor, district);
        }
    }

    /// Collapse the drill-down and clear its panels
    pub fn reset_drilldown(&self, cx: &mut App) {
        self.entities.drilldown.update(cx, |dd, cx| {
            dd.reset();
            cx.notify();
        });
        self.entities.dashboard.update(cx, |state, cx| {
            state.clear_drilldown();
            cx.notify();
        });
    }

    /// Export the current block-fault detail as a printable report
    pub fn export_report(&self, cx: &mut App) {
        let filter = *self.entities.filter.read(cx);
        let drilldown = self.entities.drilldown.read(cx).clone();
        let rows = self.entities.dashboard.read(cx).fault_rows.clone();

        let outcome = exporter::export_report(&filter, &drilldown, &rows);
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            match outcome {
                Ok(path) => {
                    hub.log(AppEvent::info(format!(
                        "Report exported to {}",
                        path.display()
                    )));
                }
                Err(e) => {
                    hub.log(AppEvent::warn(format!("Report export failed: {e}")));
                }
            }
        }
    }
}
