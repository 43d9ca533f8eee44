//! Workspace - Main Shell with Layout and Event Pump
//!
//! The workspace holds the header, dashboard page, and log panel, and runs
//! the event pump bridging service events to entity updates. Stale-response
//! policy lives here: top-level payloads are dropped by sequence number in
//! the state layer, drill-down payloads are dropped when their selection no
//! longer matches.

use gpui::{div, prelude::*, App, Context, Entity, IntoElement, ParentElement, Render, Styled, Window};
use tracing::debug;

use crate::app::entities::AppEntities;
use crate::components::layout::header::Header;
use crate::components::layout::log_panel::LogPanel;
use crate::domain::district::DistrictSummaryRow;
use crate::domain::station::Status;
use crate::eventing::app_event::{AppEvent, FetchKind};
use crate::features::dashboard::page::DashboardPage;
use crate::services::service_hub::ServiceHub;
use crate::state::log_state::LogLevel;
use crate::theme::colors::SwColors;

/// Main workspace containing the application layout
pub struct Workspace {
    header: Entity<Header>,
    dashboard_page: Entity<DashboardPage>,
    log_panel: Entity<LogPanel>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        event_rx: flume::Receiver<AppEvent>,
        cx: &mut Context<Self>,
    ) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let dashboard_page = cx.new(|cx| DashboardPage::new(entities.clone(), cx));
        let log_panel = cx.new(|cx| LogPanel::new(entities.clone(), cx));

        Self::start_event_pump(event_rx, entities, cx);

        Self {
            header,
            dashboard_page,
            log_panel,
        }
    }

    /// Start the event pump that dispatches service events to UI
    fn start_event_pump(
        event_rx: flume::Receiver<AppEvent>,
        entities: AppEntities,
        cx: &mut Context<Self>,
    ) {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let entities = entities.clone();
                let _ = cx.update(|cx: &mut App| {
                    dispatch_event(event, &entities, cx);
                });
            }
        })
        .detach();
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(SwColors::background())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(self.dashboard_page.clone()),
            )
            .child(self.log_panel.clone())
    }
}

/// Dispatch an AppEvent to the appropriate entity
fn dispatch_event(event: AppEvent, entities: &AppEntities, cx: &mut App) {
    match event {
        AppEvent::Log { level, message, timestamp } => {
            entities.logs.update(cx, |logs, cx| {
                logs.push(level, message, timestamp);
                cx.notify();
            });
        }
        AppEvent::SummaryLoaded { seq, summary } => {
            entities.dashboard.update(cx, |state, cx| {
                if state.apply_summary(seq, summary) {
                    cx.notify();
                } else {
                    debug!(seq, "Dropped stale summary response");
                }
            });
        }
        AppEvent::MapLoaded { seq, stations } => {
            entities.dashboard.update(cx, |state, cx| {
                if state.apply_stations(seq, stations) {
                    cx.notify();
                } else {
                    debug!(seq, "Dropped stale map response");
                }
            });
        }
        AppEvent::VendorsLoaded { seq, rows } => {
            entities.dashboard.update(cx, |state, cx| {
                if state.apply_vendors(seq, rows) {
                    cx.notify();
                } else {
                    debug!(seq, "Dropped stale vendor response");
                }
            });
        }
        AppEvent::DistrictsLoaded { vendor, branch, rows } => {
            apply_districts(vendor, branch, rows, entities, cx);
        }
        AppEvent::FaultsLoaded { vendor, district, rows } => {
            let matches = {
                let dd = entities.drilldown.read(cx);
                dd.vendor() == Some(vendor.as_str()) && dd.district() == Some(district.as_str())
            };
            if !matches {
                debug!(vendor, district, "Dropped fault response for superseded selection");
                return;
            }
            entities.dashboard.update(cx, |state, cx| {
                state.apply_faults(rows);
                cx.notify();
            });
        }
        AppEvent::FetchFailed { kind, seq, message } => {
            entities.logs.update(cx, |logs, cx| {
                logs.push(
                    LogLevel::Error,
                    format!("{} fetch failed: {message}", kind.label()),
                    chrono::Local::now(),
                );
                cx.notify();
            });

            // Failed panels show as empty rather than holding stale data;
            // drill-down failures only clear their loading flag.
            entities.dashboard.update(cx, |state, cx| {
                match kind {
                    FetchKind::Summary => {
                        state.apply_summary(seq, Default::default());
                    }
                    FetchKind::Map => {
                        state.apply_stations(seq, Vec::new());
                    }
                    FetchKind::Vendors => {
                        state.apply_vendors(seq, Vec::new());
                    }
                    FetchKind::Districts => state.districts_loading = false,
                    FetchKind::Faults => state.faults_loading = false,
                }
                cx.notify();
            });
        }
    }
}

/// Which district to auto-select after a breakdown lands.
///
/// An existing selection is kept (e.g. a status-filter refresh landed while
/// the user was already drilled in); otherwise the first row is picked.
fn district_to_auto_select(
    current: Option<&str>,
    rows: &[DistrictSummaryRow],
) -> Option<String> {
    if current.is_some() {
        return None;
    }
    rows.first().map(|row| row.district.clone())
}

/// Apply a district breakdown, then auto-select the first row.
///
/// Responses for a selection the user has already moved past are dropped.
/// Both branches highlight the auto-selected row; only the non-working
/// branch follows up with a block-fault fetch.
fn apply_districts(
    vendor: String,
    branch: Status,
    rows: Vec<DistrictSummaryRow>,
    entities: &AppEntities,
    cx: &mut App,
) {
    if !entities.drilldown.read(cx).matches_vendor(&vendor, branch) {
        debug!(vendor, "Dropped district response for superseded selection");
        return;
    }

    let auto_select = district_to_auto_select(
        entities.drilldown.read(cx).district(),
        &rows,
    );

    entities.dashboard.update(cx, |state, cx| {
        state.apply_districts(rows);
        cx.notify();
    });

    let Some(district) = auto_select else {
        return;
    };

    let fetch = entities.drilldown.update(cx, |dd, cx| {
        let fetch = dd.select_district(district.clone());
        cx.notify();
        fetch
    });

    if fetch {
        entities.dashboard.update(cx, |state, cx| {
            state.faults_loading = true;
            cx.notify();
        });
        let filter = *entities.filter.read(cx);
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.load_faults(filter, vendor, district);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(district: &str) -> DistrictSummaryRow {
        serde_json::from_str(&format!(
            r#"{{"district": "{district}", "total_installed": 5}}"#
        ))
        .expect("row")
    }

    #[test]
    fn test_auto_select_picks_first_row() {
        let rows = vec![row("Vaishali"), row("Samastipur")];
        assert_eq!(
            district_to_auto_select(None, &rows),
            Some("Vaishali".to_string())
        );
    }

    #[test]
    fn test_auto_select_keeps_existing_selection() {
        let rows = vec![row("Vaishali"), row("Samastipur")];
        assert_eq!(district_to_auto_select(Some("Samastipur"), &rows), None);
    }

    #[test]
    fn test_auto_select_nothing_for_empty_breakdown() {
        assert_eq!(district_to_auto_select(None, &[]), None);
    }
}
