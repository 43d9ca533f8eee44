//! Service Layer
//!
//! Abstraction over the read-only aggregation backend. The gateway issues
//! typed HTTP reads; the hub owns the tokio runtime thread, dispatches
//! concurrent fetches, and streams results back to the UI as events.
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │                  ServiceHub                     │
//! │  FetchCommand channel → tokio runtime thread    │
//! │        │                                        │
//! │        ▼                                        │
//! │  AggregationGateway (reqwest, 5 endpoints)      │
//! └────────────────────────────────────────────────┘
//!                      │
//!                      ▼ AppEvent
//! ┌────────────────────────────────────────────────┐
//! │        Workspace event pump → State Layer       │
//! └────────────────────────────────────────────────┘
//! ```

pub mod gateway;
pub mod service_hub;

pub use gateway::AggregationGateway;
pub use service_hub::{FetchCommand, ServiceHub};
