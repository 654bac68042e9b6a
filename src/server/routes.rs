//! Service-level route handlers and the response wrapper.

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::AppError;
use crate::types::{EndpointInfo, HealthResponse, HealthStatus, ServiceInfo};

use super::extractors::WireFormat;
use super::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const SERVICE_NAME: &str = "MoodTune API";

/// Response body encoded in the format the client asked for
pub struct Wire<T>(pub WireFormat, pub T);

impl<T: Serialize> IntoResponse for Wire<T> {
    fn into_response(self) -> Response {
        let Wire(format, body) = self;
        match format {
            WireFormat::Json => Json(body).into_response(),
            WireFormat::MsgPack => match rmp_serde::to_vec_named(&body) {
                Ok(bytes) => (
                    StatusCode::OK,
                    [(CONTENT_TYPE, format.content_type())],
                    bytes,
                )
                    .into_response(),
                Err(e) => {
                    AppError::Internal(format!("Failed to serialize response: {e}")).into_response()
                }
            },
        }
    }
}

/// Service description
///
/// GET /
pub async fn info(format: WireFormat) -> Wire<ServiceInfo> {
    Wire(
        format,
        ServiceInfo {
            status: "running".to_string(),
            service: SERVICE_NAME.to_string(),
            version: VERSION.to_string(),
            endpoints: vec![
                EndpointInfo::new("GET", "/api/v1/health", "Health check"),
                EndpointInfo::new(
                    "POST",
                    "/api/v1/analyze",
                    "Detect the mood of a text and recommend songs",
                ),
                EndpointInfo::new("GET", "/api/v1/moods", "List available moods"),
                EndpointInfo::new(
                    "GET",
                    "/api/v1/recommend/:mood",
                    "Recommend songs for a mood",
                ),
                EndpointInfo::new("GET", "/api/v1/search", "Search tracks on the live source"),
            ],
        },
    )
}

/// Health check endpoint
///
/// GET /api/v1/health
pub async fn health(State(state): State<AppState>, format: WireFormat) -> Wire<HealthResponse> {
    // Degraded if the live source was requested but could not be set up
    let status = if state.config.music_service.enabled && !state.recommender.has_live_source() {
        HealthStatus::Degraded
    } else {
        HealthStatus::Healthy
    };

    Wire(
        format,
        HealthResponse {
            status,
            version: VERSION.to_string(),
            live_source: state.recommender.has_live_source(),
            uptime_s: state.uptime_seconds(),
        },
    )
}

/// Fallback for unknown paths
pub async fn not_found() -> AppError {
    AppError::NotFound("The requested resource does not exist".to_string())
}
