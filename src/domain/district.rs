//! District - Per-District Breakdown Rows

use serde::{Deserialize, Serialize};

/// District breakdown for a (vendor, status branch) pair.
///
/// Every field defaults; the aggregation backend omits counts that are zero
/// and older deployments omit the agency entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistrictSummaryRow {
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub total_installed: u64,
    #[serde(default)]
    pub working: u64,
    #[serde(default)]
    pub non_working: u64,
    #[serde(default)]
    pub agency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_district_row_parse() {
        let rows: Vec<DistrictSummaryRow> = serde_json::from_str(
            r#"[{
                "district": "Vaishali",
                "total_installed": 25,
                "working": 21,
                "non_working": 4,
                "agency": "V1"
            }]"#,
        )
        .expect("parse");
        assert_eq!(rows[0].district, "Vaishali");
        assert_eq!(rows[0].total_installed, 25);
        assert_eq!(rows[0].non_working, 4);
    }

    #[test]
    fn test_district_row_all_fields_optional() {
        let row: DistrictSummaryRow = serde_json::from_str("{}").expect("parse");
        assert_eq!(row.district, "");
        assert_eq!(row.total_installed, 0);
        assert_eq!(row.working, 0);
        assert_eq!(row.non_working, 0);
        assert_eq!(row.agency, "");
    }
}
