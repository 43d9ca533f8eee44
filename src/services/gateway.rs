//! AggregationGateway - Typed Reads Against the Aggregation Backend
//!
//! Wraps the five read endpoints. All operations are idempotent GETs with
//! query parameters; a failed or malformed response surfaces as an error and
//! is never retried here.

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::domain::district::DistrictSummaryRow;
use crate::domain::fault::BlockFaultRow;
use crate::domain::station::{StationPoint, Status};
use crate::domain::summary::StatusSummary;
use crate::domain::vendor::VendorSummaryRow;
use crate::error::{Error, Result};
use crate::state::filter_state::FilterState;

/// HTTP client for the aggregation backend
#[derive(Debug, Clone)]
pub struct AggregationGateway {
    client: Client,
    base_url: String,
}

impl AggregationGateway {
    /// Create a gateway for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), endpoint);
        let resp = self.client.get(&url).query(query).send().await?;

        if !resp.status().is_success() {
            return Err(Error::BackendStatus {
                endpoint: endpoint.to_string(),
                status: resp.status().as_u16(),
            });
        }

        Ok(resp.json().await?)
    }

    /// Fetch working/non-working totals
    pub async fn summary(&self, filter: &FilterState) -> Result<StatusSummary> {
        self.get_json(
            "/api/summary",
            &[
                ("type", filter.sensor_type.as_param().to_string()),
                ("date", filter.date_param()),
            ],
        )
        .await
    }

    /// Fetch the station point set for the map
    pub async fn map_points(&self, filter: &FilterState) -> Result<Vec<StationPoint>> {
        self.get_json(
            "/api/map",
            &[
                ("type", filter.sensor_type.as_param().to_string()),
                ("date", filter.date_param()),
                ("status", filter.status_filter.as_param().to_string()),
            ],
        )
        .await
    }

    /// Fetch per-vendor counts
    pub async fn vendor_summary(&self, filter: &FilterState) -> Result<Vec<VendorSummaryRow>> {
        self.get_json(
            "/api/vendor-summary",
            &[
                ("type", filter.sensor_type.as_param().to_string()),
                ("date", filter.date_param()),
            ],
        )
        .await
    }

    /// Fetch the district breakdown for a vendor and status branch
    pub async fn district_summary(
        &self,
        filter: &FilterState,
        vendor: &str,
        branch: Status,
    ) -> Result<Vec<DistrictSummaryRow>> {
        self.get_json(
            "/api/vendor-district-summary",
            &[
                ("type", filter.sensor_type.as_param().to_string()),
                ("date", filter.date_param()),
                ("vendor", vendor.to_string()),
                ("status", branch.as_param().to_string()),
            ],
        )
        .await
    }

    /// Fetch per-station fault detail for a vendor and district
    pub async fn block_faults(
        &self,
        filter: &FilterState,
        vendor: &str,
        district: &str,
    ) -> Result<Vec<BlockFaultRow>> {
        self.get_json(
            "/api/block-fault",
            &[
                ("type", filter.sensor_type.as_param().to_string()),
                ("date", filter.date_param()),
                ("vendor", vendor.to_string()),
                ("district", district.to_string()),
            ],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_tolerated() {
        let a = AggregationGateway::new("http://host:8080");
        let b = AggregationGateway::new("http://host:8080/");
        assert_eq!(a.base_url.trim_end_matches('/'), "http://host:8080");
        assert_eq!(b.base_url.trim_end_matches('/'), "http://host:8080");
    }
}
