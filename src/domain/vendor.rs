//! Vendor - Per-Vendor Summary Rows

use serde::{Deserialize, Serialize};

/// One vendor's counts for the current sensor type and date
///
/// The working and non-working counts are the clickable entry points into
/// the district drill-down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorSummaryRow {
    pub vendor: String,
    pub total: u64,
    pub working: u64,
    pub not_working: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_row_parse() {
        let rows: Vec<VendorSummaryRow> = serde_json::from_str(
            r#"[{"vendor": "V1", "total": 10, "working": 7, "not_working": 3}]"#,
        )
        .expect("parse");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].vendor, "V1");
        assert_eq!(rows[0].not_working, 3);
    }
}
