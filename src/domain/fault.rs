//! Fault - Block-Level Fault Detail and Column Visibility Policy

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::filter::SensorType;

/// Columns of the block-fault table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockColumn {
    Block,
    StationId,
    TempRh,
    Rainfall,
    WindSpeed,
    AirPressure,
    SoilMoisture,
    SolarRadiation,
    DataPacket,
    Agency,
}

impl BlockColumn {
    /// Wire key of the column, matching the block-fault payload fields
    pub fn key(self) -> &'static str {
        match self {
            BlockColumn::Block => "block",
            BlockColumn::StationId => "station_id",
            BlockColumn::TempRh => "temp_rh",
            BlockColumn::Rainfall => "rf",
            BlockColumn::WindSpeed => "ws",
            BlockColumn::AirPressure => "ap",
            BlockColumn::SoilMoisture => "sm",
            BlockColumn::SolarRadiation => "sr",
            BlockColumn::DataPacket => "data_pkt",
            BlockColumn::Agency => "agency",
        }
    }

    /// Translation key for the column header
    pub fn title_key(self) -> &'static str {
        match self {
            BlockColumn::Block => "col-block",
            BlockColumn::StationId => "col-station-id",
            BlockColumn::TempRh => "col-temp-rh",
            BlockColumn::Rainfall => "col-rainfall",
            BlockColumn::WindSpeed => "col-wind-speed",
            BlockColumn::AirPressure => "col-air-pressure",
            BlockColumn::SoilMoisture => "col-soil-moisture",
            BlockColumn::SolarRadiation => "col-solar-radiation",
            BlockColumn::DataPacket => "col-data-packet",
            BlockColumn::Agency => "col-agency",
        }
    }
}

/// Visible block-table columns for a sensor type, in display order.
///
/// Pure and deterministic: ARG stations only report rainfall, AWS stations
/// carry the full suite.
pub fn visible_columns(sensor_type: SensorType) -> &'static [BlockColumn] {
    match sensor_type {
        SensorType::Arg => &[
            BlockColumn::Block,
            BlockColumn::StationId,
            BlockColumn::Rainfall,
        ],
        SensorType::Aws => &[
            BlockColumn::Block,
            BlockColumn::StationId,
            BlockColumn::TempRh,
            BlockColumn::Rainfall,
            BlockColumn::WindSpeed,
            BlockColumn::AirPressure,
            BlockColumn::SoilMoisture,
            BlockColumn::SolarRadiation,
            BlockColumn::DataPacket,
            BlockColumn::Agency,
        ],
    }
}

/// Placeholder for absent sensor readings
pub const MISSING_METRIC: &str = "-";

/// Per-station fault detail row
///
/// Metric fields come from scraped fault-sensor CSVs and can be strings,
/// numbers, or absent; all are normalized to optional strings on parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockFaultRow {
    #[serde(default)]
    pub block: String,
    #[serde(default)]
    pub station_id: String,
    #[serde(default, deserialize_with = "opt_scalar")]
    pub temp_rh: Option<String>,
    #[serde(default, deserialize_with = "opt_scalar")]
    pub rf: Option<String>,
    #[serde(default, deserialize_with = "opt_scalar")]
    pub ws: Option<String>,
    #[serde(default, deserialize_with = "opt_scalar")]
    pub ap: Option<String>,
    #[serde(default, deserialize_with = "opt_scalar")]
    pub sm: Option<String>,
    #[serde(default, deserialize_with = "opt_scalar")]
    pub sr: Option<String>,
    #[serde(default, deserialize_with = "opt_scalar")]
    pub data_pkt: Option<String>,
    #[serde(default, deserialize_with = "opt_scalar")]
    pub agency: Option<String>,
}

impl BlockFaultRow {
    /// Raw value of a column, if present
    pub fn metric(&self, column: BlockColumn) -> Option<&str> {
        match column {
            BlockColumn::Block => Some(&self.block),
            BlockColumn::StationId => Some(&self.station_id),
            BlockColumn::TempRh => self.temp_rh.as_deref(),
            BlockColumn::Rainfall => self.rf.as_deref(),
            BlockColumn::WindSpeed => self.ws.as_deref(),
            BlockColumn::AirPressure => self.ap.as_deref(),
            BlockColumn::SoilMoisture => self.sm.as_deref(),
            BlockColumn::SolarRadiation => self.sr.as_deref(),
            BlockColumn::DataPacket => self.data_pkt.as_deref(),
            BlockColumn::Agency => self.agency.as_deref(),
        }
    }

    /// Display value of a column; absent metrics render as a placeholder
    pub fn display(&self, column: BlockColumn) -> String {
        self.metric(column).unwrap_or(MISSING_METRIC).to_string()
    }
}

/// Accept a metric field as string, number, or null
fn opt_scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.trim().is_empty() => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_columns_arg() {
        let cols = visible_columns(SensorType::Arg);
        assert_eq!(
            cols,
            &[
                BlockColumn::Block,
                BlockColumn::StationId,
                BlockColumn::Rainfall
            ]
        );
    }

    #[test]
    fn test_visible_columns_aws() {
        let cols = visible_columns(SensorType::Aws);
        assert_eq!(cols.len(), 10);
        assert_eq!(cols[0], BlockColumn::Block);
        assert_eq!(cols[9], BlockColumn::Agency);
    }

    #[test]
    fn test_visible_columns_deterministic() {
        // repeated application yields the same ordered set
        assert_eq!(
            visible_columns(SensorType::Arg),
            visible_columns(SensorType::Arg)
        );
        assert_eq!(
            visible_columns(SensorType::Aws),
            visible_columns(SensorType::Aws)
        );
    }

    #[test]
    fn test_fault_row_parse_mixed_scalars() {
        let json = r#"{
            "block": "Pusa",
            "station_id": "AWS0042",
            "temp_rh": "OK",
            "rf": 1.5,
            "ws": null,
            "data_pkt": 0,
            "agency": "V1"
        }"#;
        let row: BlockFaultRow = serde_json::from_str(json).expect("parse");
        assert_eq!(row.metric(BlockColumn::TempRh), Some("OK"));
        assert_eq!(row.metric(BlockColumn::Rainfall), Some("1.5"));
        assert_eq!(row.metric(BlockColumn::WindSpeed), None);
        assert_eq!(row.metric(BlockColumn::DataPacket), Some("0"));
        assert_eq!(row.display(BlockColumn::WindSpeed), MISSING_METRIC);
        assert_eq!(row.display(BlockColumn::SoilMoisture), MISSING_METRIC);
    }

    #[test]
    fn test_fault_row_empty_string_is_missing() {
        let row: BlockFaultRow =
            serde_json::from_str(r#"{"block": "B", "station_id": "S", "sr": "  "}"#)
                .expect("parse");
        assert_eq!(row.metric(BlockColumn::SolarRadiation), None);
    }
}
