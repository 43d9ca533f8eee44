//! Station - Station Status and Map Point Data

use serde::{Deserialize, Deserializer, Serialize};

/// Working status of a single station
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    #[default]
    #[serde(rename = "WORKING")]
    Working,
    #[serde(rename = "NON-WORKING")]
    NonWorking,
}

impl Status {
    /// Normalize a raw backend status string.
    ///
    /// Upstream feeds are inconsistent: "NOT WORKING", "NON WORKING",
    /// "NON-WORKING" and "FAULTY" all mean a faulty station. Anything else
    /// (including empty) counts as working.
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "NOT WORKING" | "NON WORKING" | "NON-WORKING" | "FAULTY" => Status::NonWorking,
            _ => Status::Working,
        }
    }

    pub fn as_param(self) -> &'static str {
        match self {
            Status::Working => "WORKING",
            Status::NonWorking => "NON-WORKING",
        }
    }

    pub fn is_working(self) -> bool {
        self == Status::Working
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Status::normalize(&raw))
    }
}

/// A station as returned by the map endpoint
///
/// Immutable snapshot; the full set is replaced (not merged) on every refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationPoint {
    #[serde(default)]
    pub station_id: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub block: String,
    #[serde(default)]
    pub panchayat: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_normalize() {
        assert_eq!(Status::normalize("WORKING"), Status::Working);
        assert_eq!(Status::normalize("working"), Status::Working);
        assert_eq!(Status::normalize("NON-WORKING"), Status::NonWorking);
        assert_eq!(Status::normalize("not working"), Status::NonWorking);
        assert_eq!(Status::normalize("NON WORKING"), Status::NonWorking);
        assert_eq!(Status::normalize("Faulty"), Status::NonWorking);
        assert_eq!(Status::normalize(""), Status::Working);
        assert_eq!(Status::normalize("unknown"), Status::Working);
    }

    #[test]
    fn test_point_parse() {
        let json = r#"{
            "station_id": "AWS0042",
            "district": "Samastipur",
            "block": "Pusa",
            "panchayat": "Birauli",
            "status": "NON-WORKING",
            "lat": 25.98,
            "lon": 85.67
        }"#;
        let p: StationPoint = serde_json::from_str(json).expect("parse point");
        assert_eq!(p.station_id, "AWS0042");
        assert_eq!(p.status, Status::NonWorking);
        assert_eq!(p.panchayat.as_deref(), Some("Birauli"));
    }

    #[test]
    fn test_point_parse_minimal() {
        // station_id can be missing in older feed rows
        let json = r#"{"status": "WORKING", "lat": 25.0, "lon": 85.0}"#;
        let p: StationPoint = serde_json::from_str(json).expect("parse point");
        assert!(p.station_id.is_empty());
        assert!(p.panchayat.is_none());
        assert_eq!(p.status, Status::Working);
    }
}
