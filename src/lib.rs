//! StationWatch GUI
//!
//! Monitoring dashboard for environmental sensor stations (automatic weather
//! stations and rain gauges), with a vendor → district → block drill-down
//! over the aggregation backend's read API.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod i18n;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
