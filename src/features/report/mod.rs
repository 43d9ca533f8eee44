//! Report Feature
//!
//! Printable HTML export of the current block-fault detail.

pub mod exporter;
