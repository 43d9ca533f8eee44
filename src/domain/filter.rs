//! Filter - Sensor Type and Status Filter Enums

use serde::{Deserialize, Serialize};

/// Station instrumentation category
///
/// AWS stations carry the full sensor suite; ARG stations are rainfall-only.
/// The type changes which block-fault columns are relevant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensorType {
    /// Automatic Weather Station (full suite)
    #[default]
    Aws,
    /// Automatic Rain Gauge (rainfall only)
    Arg,
}

impl SensorType {
    /// Query-parameter value understood by the aggregation backend
    pub fn as_param(self) -> &'static str {
        match self {
            SensorType::Aws => "AWS",
            SensorType::Arg => "ARG",
        }
    }

    pub fn label(self) -> &'static str {
        self.as_param()
    }
}

/// Top-level status filter for the map query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Working,
    NonWorking,
}

impl StatusFilter {
    /// Query-parameter value understood by the aggregation backend
    pub fn as_param(self) -> &'static str {
        match self {
            StatusFilter::All => "ALL",
            StatusFilter::Working => "WORKING",
            StatusFilter::NonWorking => "NON-WORKING",
        }
    }

    pub fn title_key(self) -> &'static str {
        match self {
            StatusFilter::All => "filter-all",
            StatusFilter::Working => "filter-working",
            StatusFilter::NonWorking => "filter-non-working",
        }
    }

    pub fn all() -> &'static [StatusFilter] {
        &[
            StatusFilter::All,
            StatusFilter::Working,
            StatusFilter::NonWorking,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params() {
        assert_eq!(SensorType::Aws.as_param(), "AWS");
        assert_eq!(SensorType::Arg.as_param(), "ARG");
        assert_eq!(StatusFilter::All.as_param(), "ALL");
        assert_eq!(StatusFilter::NonWorking.as_param(), "NON-WORKING");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(SensorType::default(), SensorType::Aws);
        assert_eq!(StatusFilter::default(), StatusFilter::All);
    }
}
