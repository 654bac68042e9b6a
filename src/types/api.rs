//! API types for mood analysis and recommendation endpoints.
//!
//! Request bodies are decoded as untyped objects first so that a
//! wrong-typed field is reported by name instead of as a generic body parse
//! failure.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AppError;
use crate::mood::{Intensity, MoodScores};
use crate::pipeline::RecommendationResult;
use crate::source::{LiveTrack, Recommendation, RecommendationSource, Recommendations};

/// Songs returned when the client does not ask for a number
pub const DEFAULT_NUM_SONGS: usize = 5;

/// Inclusive bounds for `num_songs`
pub const MIN_NUM_SONGS: i64 = 1;
pub const MAX_NUM_SONGS: i64 = 20;

/// Check `num_songs` against the allowed range
pub fn validate_num_songs(value: Option<i64>) -> Result<usize, AppError> {
    match value {
        None => Ok(DEFAULT_NUM_SONGS),
        Some(n) if (MIN_NUM_SONGS..=MAX_NUM_SONGS).contains(&n) => Ok(n as usize),
        Some(_) => Err(num_songs_error()),
    }
}

fn num_songs_error() -> AppError {
    AppError::validation(
        "num_songs",
        format!("num_songs must be an integer between {MIN_NUM_SONGS} and {MAX_NUM_SONGS}"),
    )
}

/// Request to analyze text and recommend songs.
///
/// Only an object decodes; arrays and scalars are malformed bodies. A field
/// set to `null` is kept as `Some(Value::Null)` so it is told apart from an
/// absent one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct AnalyzeRequest {
    /// Free-form description of how the user feels (required string)
    pub text: Option<Value>,

    /// Number of songs to return (integer 1 to 20, default 5)
    pub num_songs: Option<Value>,
}

impl From<Map<String, Value>> for AnalyzeRequest {
    fn from(mut fields: Map<String, Value>) -> Self {
        Self {
            text: fields.remove("text"),
            num_songs: fields.remove("num_songs"),
        }
    }
}

impl AnalyzeRequest {
    /// Validate and return `(text, num_songs)`
    pub fn validate(self) -> Result<(String, usize), AppError> {
        let text = match self.text {
            None => return Err(AppError::validation("text", "Missing required field: text")),
            Some(Value::String(text)) => text,
            Some(_) => return Err(AppError::validation("text", "text must be a string")),
        };

        let num_songs = match self.num_songs {
            None => None,
            Some(Value::Number(n)) => Some(n.as_i64().ok_or_else(num_songs_error)?),
            Some(_) => return Err(num_songs_error()),
        };

        Ok((text, validate_num_songs(num_songs)?))
    }
}

/// Response from mood analysis
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub user_input: String,
    pub detected_mood: String,
    /// Confidence (0.0 to 1.0)
    pub confidence: f64,
    pub intensity: Intensity,
    pub recommendations: Vec<Recommendation>,
    pub emotion_scores: MoodScores,
    /// Which source produced `recommendations`
    pub source: RecommendationSource,
}

impl AnalyzeResponse {
    pub fn new(result: RecommendationResult, recommendations: Recommendations) -> Self {
        Self {
            user_input: result.user_input,
            detected_mood: result.detected_mood,
            confidence: result.confidence,
            intensity: result.intensity,
            recommendations: recommendations.items,
            emotion_scores: result.emotion_scores,
            source: recommendations.source,
        }
    }
}

/// Response listing available moods
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodsResponse {
    /// Mood identifiers in catalog order
    pub moods: Vec<String>,
}

/// Query parameters for per-mood recommendations
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendQuery {
    /// Kept as text so a non-numeric value can be reported by name
    #[serde(default)]
    pub num_songs: Option<String>,
}

impl RecommendQuery {
    pub fn count(&self) -> Result<usize, AppError> {
        let parsed = match self.num_songs.as_deref().map(str::trim) {
            None => None,
            Some(raw) => Some(raw.parse::<i64>().map_err(|_| num_songs_error())?),
        };
        validate_num_songs(parsed)
    }
}

/// Response with recommendations for one mood
#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse {
    pub mood: String,
    pub recommendations: Vec<Recommendation>,
    pub source: RecommendationSource,
}

/// Query parameters for live track search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

impl SearchQuery {
    /// Validate and return `(query, limit)`
    pub fn validate(&self) -> Result<(String, usize), AppError> {
        let query = self
            .q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or_else(|| AppError::validation("q", "Missing required parameter: q"))?;

        let limit_error = || {
            AppError::validation(
                "limit",
                format!("limit must be an integer between {MIN_NUM_SONGS} and {MAX_NUM_SONGS}"),
            )
        };
        let limit = match self.limit.as_deref().map(str::trim) {
            None => DEFAULT_NUM_SONGS,
            Some(raw) => match raw.parse::<i64>() {
                Ok(n) if (MIN_NUM_SONGS..=MAX_NUM_SONGS).contains(&n) => n as usize,
                _ => return Err(limit_error()),
            },
        };

        Ok((query.to_string(), limit))
    }
}

/// Response from live track search
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub tracks: Vec<LiveTrack>,
    pub source: RecommendationSource,
}
