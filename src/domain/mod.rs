//! Domain - Pure Data Structures and Payload Types
//!
//! These types don't depend on GPUI and represent the business domain.

pub mod config;
pub mod district;
pub mod fault;
pub mod filter;
pub mod station;
pub mod summary;
pub mod vendor;
