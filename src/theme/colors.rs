//! Colors - StationWatch Theme Colors

use gpui::{rgb, Rgba};

/// StationWatch color palette - All colors are accessed via associated functions
pub struct SwColors;

impl SwColors {
    // Primary colors
    /// Header background - Dark navy
    pub fn header_bg() -> Rgba { rgb(0x0b2c4d) }
    /// Accent - Blue
    pub fn accent_blue() -> Rgba { rgb(0x3b82f6) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Log panel background - Dark blue
    pub fn log_panel_bg() -> Rgba { rgb(0x1a2332) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }
    /// Header text
    pub fn text_header() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Working stations - Green
    pub fn working() -> Rgba { rgb(0x198754) }
    /// Non-working stations - Red
    pub fn non_working() -> Rgba { rgb(0xdc3545) }
    /// Warning - Amber
    pub fn warning() -> Rgba { rgb(0xf59e0b) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    // Button colors
    /// Primary button background
    pub fn button_primary_bg() -> Rgba { rgb(0x0b2c4d) }
    /// Primary button text
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    /// Outline button border/text
    pub fn button_outline() -> Rgba { rgb(0x0b2c4d) }

    // Table colors
    /// Table header background
    pub fn table_header_bg() -> Rgba { rgb(0xf9fafb) }
    /// Table row hover
    pub fn table_row_hover() -> Rgba { rgb(0xf3f4f6) }
    /// Table row alternate
    pub fn table_row_alt() -> Rgba { rgb(0xf9fafb) }
    /// Selected table row
    pub fn table_row_selected() -> Rgba { rgb(0xdbeafe) }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    /// Input border
    pub fn input_border() -> Rgba { rgb(0xd1d5db) }
}
