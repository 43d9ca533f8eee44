//! Dashboard Feature
//!
//! The single-page monitoring dashboard: filter bar, status summary with
//! proportion chart, station map, and the vendor → district → block
//! drill-down tables.

pub mod block_table;
pub mod controller;
pub mod district_table;
pub mod map_panel;
pub mod page;
pub mod summary_panel;
pub mod vendor_table;
