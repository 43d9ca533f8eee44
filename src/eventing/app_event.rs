//! AppEvent - Application Event Enum
//!
//! All events that can be sent from services to the UI layer.

use chrono::{DateTime, Local};

use crate::domain::district::DistrictSummaryRow;
use crate::domain::fault::BlockFaultRow;
use crate::domain::station::{StationPoint, Status};
use crate::domain::summary::StatusSummary;
use crate::domain::vendor::VendorSummaryRow;
use crate::state::log_state::LogLevel;

/// Which query a fetch belonged to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Summary,
    Map,
    Vendors,
    Districts,
    Faults,
}

impl FetchKind {
    pub fn label(self) -> &'static str {
        match self {
            FetchKind::Summary => "summary",
            FetchKind::Map => "map",
            FetchKind::Vendors => "vendor-summary",
            FetchKind::Districts => "district-summary",
            FetchKind::Faults => "block-fault",
        }
    }
}

/// Application events for service -> UI communication
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Log message
    Log {
        level: LogLevel,
        message: String,
        timestamp: DateTime<Local>,
    },

    /// Status summary resolved for refresh `seq`
    SummaryLoaded {
        seq: u64,
        summary: StatusSummary,
    },

    /// Map point set resolved for refresh `seq`
    MapLoaded {
        seq: u64,
        stations: Vec<StationPoint>,
    },

    /// Vendor table rows resolved for refresh `seq`
    VendorsLoaded {
        seq: u64,
        rows: Vec<VendorSummaryRow>,
    },

    /// District breakdown resolved for a (vendor, branch) selection
    DistrictsLoaded {
        vendor: String,
        branch: Status,
        rows: Vec<DistrictSummaryRow>,
    },

    /// Block fault detail resolved for a (vendor, district) selection
    FaultsLoaded {
        vendor: String,
        district: String,
        rows: Vec<BlockFaultRow>,
    },

    /// A fetch failed; `seq` is only meaningful for top-level kinds
    FetchFailed {
        kind: FetchKind,
        seq: u64,
        message: String,
    },
}

impl AppEvent {
    /// Create a log event with current timestamp
    pub fn log(level: LogLevel, message: impl Into<String>) -> Self {
        Self::Log {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    /// Create an info log event
    pub fn info(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Info, message)
    }

    /// Create a warning log event
    pub fn warn(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Warn, message)
    }

    /// Create an error log event
    pub fn error(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Error, message)
    }
}
