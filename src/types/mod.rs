//! Shared types for the MoodTune HTTP API.
//!
//! These types are used across the application for request/response handling.

pub mod api;

use serde::{Deserialize, Serialize};

pub use api::*;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    /// Whether a live music service is configured
    #[serde(default)]
    pub live_source: bool,
    #[serde(default)]
    pub uptime_s: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    /// Live source requested but unavailable; catalog data is served
    Degraded,
}

/// Service description returned at the root path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub status: String,
    pub service: String,
    pub version: String,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointInfo {
    pub method: String,
    pub path: String,
    pub description: String,
}

impl EndpointInfo {
    pub fn new(method: &str, path: &str, description: &str) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            description: description.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_serialization() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::Healthy).unwrap(),
            r#""healthy""#
        );
    }

    #[test]
    fn test_health_response_defaults() {
        let resp: HealthResponse =
            serde_json::from_str(r#"{"status": "degraded", "version": "0.1.0"}"#).unwrap();
        assert_eq!(resp.status, HealthStatus::Degraded);
        assert!(!resp.live_source);
        assert_eq!(resp.uptime_s, 0);
    }
}
