//! Layout Components

pub mod header;
pub mod log_panel;

pub use header::Header;
pub use log_panel::LogPanel;
