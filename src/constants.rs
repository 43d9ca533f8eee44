//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1400.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Map panel height
pub const MAP_PANEL_HEIGHT: f32 = 340.0;

/// Padding (as a fraction of panel size) around the plotted bounding box
pub const MAP_EDGE_PADDING: f64 = 0.06;

/// Log ring buffer capacity
pub const GLOBAL_LOG_CAPACITY: usize = 2000;

/// Config file name under the platform data directory
pub const CONFIG_FILE: &str = "config.json";
