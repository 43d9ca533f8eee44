//! Config - Application Configuration

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Aggregation backend
    pub server: ServerConfig,
    /// Map defaults
    pub map: MapConfig,
}

/// Aggregation backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the read-only aggregation API
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
        }
    }
}

/// Map fallback center, used when no stations are plotted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub center_lat: f64,
    pub center_lon: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: 25.8727,
            center_lon: 85.9162,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_roundtrip() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).expect("serialize");
        let back: AppConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.server.base_url, config.server.base_url);
        assert_eq!(back.map.center_lat, config.map.center_lat);
    }
}
