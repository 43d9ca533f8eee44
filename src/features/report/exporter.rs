//! Report Exporter
//!
//! Renders the selected district's block-fault detail as a self-contained
//! HTML document and writes it under the platform data directory. The column
//! set mirrors the on-screen table, so a rain-gauge report never carries
//! weather-station columns.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::fault::{visible_columns, BlockFaultRow};
use crate::error::{Error, Result};
use crate::state::drilldown_state::DrillDown;
use crate::state::filter_state::FilterState;
use crate::utils::config_store;

/// Report title: `{type}_{vendor}_{district}_{date} Report`
pub fn report_title(filter: &FilterState, vendor: &str, district: &str) -> String {
    format!(
        "{}_{}_{}_{} Report",
        filter.sensor_type.as_param(),
        vendor,
        district,
        filter.date_param()
    )
}

/// Render the report as a printable HTML document
pub fn render_report_html(
    filter: &FilterState,
    vendor: &str,
    district: &str,
    rows: &[BlockFaultRow],
) -> String {
    let title = report_title(filter, vendor, district);
    let columns = visible_columns(filter.sensor_type);

    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(&title)));
    html.push_str(
        "<style>\n\
         body { font-family: sans-serif; margin: 24px; }\n\
         h1 { font-size: 18px; }\n\
         table { border-collapse: collapse; width: 100%; }\n\
         th, td { border: 1px solid #444; padding: 6px 10px; font-size: 13px; text-align: left; }\n\
         th { background: #0b2c4d; color: #fff; }\n\
         tr:nth-child(even) { background: #f5f5f5; }\n\
         .meta { margin-bottom: 16px; font-size: 13px; }\n\
         .meta dt { font-weight: bold; display: inline; }\n\
         .meta dd { display: inline; margin: 0 18px 0 4px; }\n\
         </style>\n</head>\n<body>\n",
    );
    html.push_str(&format!("<h1>{}</h1>\n", escape(&title)));
    html.push_str(&format!(
        "<dl class=\"meta\">\
         <dt>Sensor type</dt><dd>{}</dd>\
         <dt>Vendor</dt><dd>{}</dd>\
         <dt>District</dt><dd>{}</dd>\
         <dt>Date</dt><dd>{}</dd>\
         <dt>Stations</dt><dd>{}</dd>\
         </dl>\n",
        escape(filter.sensor_type.as_param()),
        escape(vendor),
        escape(district),
        escape(&filter.date_param()),
        rows.len(),
    ));
    html.push_str("<table>\n<thead>\n<tr>");
    for col in columns {
        // headers are always English in the export
        let header = crate::i18n::t(crate::i18n::Locale::EnUS, col.title_key());
        html.push_str(&format!("<th>{}</th>", escape(&header)));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in rows {
        html.push_str("<tr>");
        for &col in columns {
            html.push_str(&format!("<td>{}</td>", escape(&row.display(col))));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}

/// Export the report for the current drill-down selection.
///
/// Requires a district selected on the non-working branch; a working-branch
/// highlight has no fault detail to report.
pub fn export_report(
    filter: &FilterState,
    drilldown: &DrillDown,
    rows: &[BlockFaultRow],
) -> Result<PathBuf> {
    let (vendor, district) = match (drilldown.vendor(), drilldown.district()) {
        (Some(vendor), Some(district)) => (vendor.to_string(), district.to_string()),
        _ => {
            return Err(Error::Invalid {
                message: "no district selected".to_string(),
            });
        }
    };

    if !drilldown.block_panel_visible() {
        return Err(Error::Invalid {
            message: "fault report requires a non-working selection".to_string(),
        });
    }

    let dir = config_store::app_data_dir()
        .map_err(|e| Error::Invalid {
            message: format!("data directory unavailable: {e}"),
        })?
        .join("reports");

    write_report(&dir, filter, &vendor, &district, rows)
}

/// Write the rendered report into `dir`, creating it if needed
pub fn write_report(
    dir: &Path,
    filter: &FilterState,
    vendor: &str,
    district: &str,
    rows: &[BlockFaultRow],
) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let title = report_title(filter, vendor, district);
    let path = dir.join(format!("{}.html", sanitize_filename(&title)));
    fs::write(&path, render_report_html(filter, vendor, district, rows))?;

    info!(path = %path.display(), rows = rows.len(), "Report written");
    Ok(path)
}

/// Keep filenames portable: anything outside a safe set becomes `_`
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::SensorType;
    use crate::domain::station::Status;
    use chrono::NaiveDate;

    fn filter(sensor_type: SensorType) -> FilterState {
        let mut filter = FilterState {
            sensor_type,
            ..FilterState::default()
        };
        filter.set_date(NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date"));
        filter
    }

    fn fault_row(block: &str, station: &str) -> BlockFaultRow {
        serde_json::from_str(&format!(
            r#"{{"block": "{block}", "station_id": "{station}", "rf": "NO RAIN DATA"}}"#
        ))
        .expect("row")
    }

    #[test]
    fn test_report_title_template() {
        let title = report_title(&filter(SensorType::Aws), "Vendor A", "Vaishali");
        assert_eq!(title, "AWS_Vendor A_Vaishali_2024-06-01 Report");
    }

    #[test]
    fn test_html_contains_title_and_rows() {
        let html = render_report_html(
            &filter(SensorType::Aws),
            "V1",
            "Vaishali",
            &[fault_row("Pusa", "AWS0042")],
        );
        assert!(html.contains("AWS_V1_Vaishali_2024-06-01 Report"));
        assert!(html.contains("<dt>Vendor</dt><dd>V1</dd>"));
        assert!(html.contains("<dt>District</dt><dd>Vaishali</dd>"));
        assert!(html.contains("<td>Pusa</td>"));
        assert!(html.contains("<td>AWS0042</td>"));
        assert!(html.contains("<td>NO RAIN DATA</td>"));
    }

    #[test]
    fn test_missing_metrics_render_placeholder() {
        let html = render_report_html(
            &filter(SensorType::Aws),
            "V1",
            "Vaishali",
            &[fault_row("Pusa", "AWS0042")],
        );
        // absent AWS metrics come through as the dash placeholder
        assert!(html.contains("<td>-</td>"));
    }

    #[test]
    fn test_arg_report_has_three_columns() {
        let html = render_report_html(
            &filter(SensorType::Arg),
            "V1",
            "Vaishali",
            &[fault_row("Pusa", "ARG0007")],
        );
        assert_eq!(html.matches("<th>").count(), 3);
        assert!(html.contains("<th>Rainfall</th>"));
        assert!(!html.contains("<th>Wind Speed</th>"));
        assert!(!html.contains("<th>Agency</th>"));
    }

    #[test]
    fn test_export_requires_district_selection() {
        let collapsed = DrillDown::default();
        let err = export_report(&filter(SensorType::Aws), &collapsed, &[]);
        assert!(err.is_err());

        let mut vendor_only = DrillDown::default();
        vendor_only.select_vendor("V1", Status::NonWorking);
        let err = export_report(&filter(SensorType::Aws), &vendor_only, &[]);
        assert!(err.is_err());
    }

    #[test]
    fn test_export_rejects_working_branch_highlight() {
        let mut dd = DrillDown::default();
        dd.select_vendor("V1", Status::Working);
        dd.select_district("Vaishali");
        assert_eq!(dd.district(), Some("Vaishali"));
        let err = export_report(&filter(SensorType::Aws), &dd, &[]);
        assert!(err.is_err());
    }

    #[test]
    fn test_write_report_creates_file() {
        let dir = std::env::temp_dir().join("stationwatch-report-test");
        let path = write_report(
            &dir,
            &filter(SensorType::Arg),
            "V1",
            "Vaishali",
            &[fault_row("Pusa", "ARG0007")],
        )
        .expect("write");

        assert!(path.exists());
        let content = fs::read_to_string(&path).expect("read back");
        assert!(content.contains("ARG_V1_Vaishali_2024-06-01 Report"));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_filename_is_sanitized() {
        assert_eq!(
            sanitize_filename("AWS_Vendor A_Vaishali_2024-06-01 Report"),
            "AWS_Vendor_A_Vaishali_2024-06-01_Report"
        );
    }
}
