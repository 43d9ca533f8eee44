//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by update frequency: filters and the drill-down selection
//! change on user input, the dashboard data changes on fetch completion.

use gpui::{App, AppContext, Entity, Global};

use crate::constants::GLOBAL_LOG_CAPACITY;
use crate::state::{
    dashboard_state::DashboardState, drilldown_state::DrillDown, filter_state::FilterState,
    i18n_state::I18nState, log_state::LogState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Top-level filters (sensor type, date, status)
    pub filter: Entity<FilterState>,
    /// Drill-down selection state machine
    pub drilldown: Entity<DrillDown>,
    /// Fetched dashboard collections
    pub dashboard: Entity<DashboardState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
    /// Log messages (ring buffer)
    pub logs: Entity<LogState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities with default values
    pub fn init(cx: &mut App) -> Self {
        Self {
            filter: cx.new(|_| FilterState::default()),
            drilldown: cx.new(|_| DrillDown::default()),
            dashboard: cx.new(|_| DashboardState::default()),
            i18n: cx.new(|_| I18nState::default()),
            logs: cx.new(|_| LogState::new(GLOBAL_LOG_CAPACITY)),
        }
    }
}
