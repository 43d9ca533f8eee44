//! Features - Feature Slices
//!
//! Each feature owns its pages, controllers, and feature-local components.

pub mod dashboard;
pub mod report;
