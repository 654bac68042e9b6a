//! Mood analysis and recommendation route handlers.

use axum::extract::{Path, State};
use tracing::info;

use crate::error::AppError;
use crate::source::Recommendations;
use crate::types::{
    AnalyzeRequest, AnalyzeResponse, MoodsResponse, RecommendQuery, RecommendResponse,
};

use super::extractors::{Payload, QueryParams, WireFormat};
use super::routes::Wire;
use super::AppState;

/// Characters of user input echoed into the logs
const LOG_PREVIEW_CHARS: usize = 50;

/// POST /api/v1/analyze
///
/// Detect the mood of free-form text and recommend songs for it.
pub async fn analyze(
    State(state): State<AppState>,
    format: WireFormat,
    Payload(req): Payload<AnalyzeRequest>,
) -> Result<Wire<AnalyzeResponse>, AppError> {
    let (text, num_songs) = req.validate()?;

    let preview: String = text.chars().take(LOG_PREVIEW_CHARS).collect();
    info!(input = %preview, num_songs, "Analyzing mood");

    let mut result = state.pipeline.analyze(&text, num_songs);
    info!(
        mood = %result.detected_mood,
        confidence = result.confidence,
        intensity = %result.intensity,
        "Detected mood"
    );

    let curated = std::mem::take(&mut result.recommendations);
    let recommendations = state
        .recommender
        .resolve(&result.detected_mood, num_songs, curated)
        .await;

    Ok(Wire(format, AnalyzeResponse::new(result, recommendations)))
}

/// GET /api/v1/moods
///
/// List the moods the catalog serves, in catalog order.
pub async fn list_moods(State(state): State<AppState>, format: WireFormat) -> Wire<MoodsResponse> {
    let moods = state
        .pipeline
        .catalog()
        .all_moods()
        .into_iter()
        .map(str::to_string)
        .collect();

    Wire(format, MoodsResponse { moods })
}

/// GET /api/v1/recommend/:mood
///
/// Recommend songs for a mood chosen by the client. Unlike the catalog
/// lookup, an unknown mood is rejected here.
pub async fn recommend(
    State(state): State<AppState>,
    format: WireFormat,
    Path(mood): Path<String>,
    QueryParams(query): QueryParams<RecommendQuery>,
) -> Result<Wire<RecommendResponse>, AppError> {
    let num_songs = query.count()?;

    let catalog = state.pipeline.catalog();
    if !catalog.contains(&mood) {
        return Err(AppError::validation(
            "mood",
            format!(
                "Invalid mood. Available moods: {}",
                catalog.all_moods().join(", ")
            ),
        ));
    }

    let curated = catalog.recommend(&mood, num_songs).to_vec();
    let Recommendations { items, source } =
        state.recommender.resolve(&mood, num_songs, curated).await;

    Ok(Wire(
        format,
        RecommendResponse {
            mood,
            recommendations: items,
            source,
        },
    ))
}
