//! State - GPUI Entity State Modules
//!
//! Each state module represents a distinct piece of application state,
//! split by update frequency to avoid unnecessary re-renders.

pub mod dashboard_state;
pub mod drilldown_state;
pub mod filter_state;
pub mod i18n_state;
pub mod log_state;
