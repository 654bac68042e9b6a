//! Live track search route handler.

use axum::extract::State;
use tracing::debug;

use crate::error::AppError;
use crate::types::{SearchQuery, SearchResponse};

use super::extractors::{QueryParams, WireFormat};
use super::routes::Wire;
use super::AppState;

/// GET /api/v1/search?q=...&limit=...
///
/// Search tracks on the live source. Answers with an empty list and source
/// `unavailable` when no live source is configured or the search fails.
pub async fn search(
    State(state): State<AppState>,
    format: WireFormat,
    QueryParams(query): QueryParams<SearchQuery>,
) -> Result<Wire<SearchResponse>, AppError> {
    let (query, limit) = query.validate()?;

    let (tracks, source) = state.recommender.search(&query, limit).await;
    debug!(query = %query, count = tracks.len(), ?source, "Track search");

    Ok(Wire(
        format,
        SearchResponse {
            query,
            tracks,
            source,
        },
    ))
}
