//! Live track sources.
//!
//! A [`TrackSource`] fetches mood-matched tracks from an external music
//! service. The [`Recommender`] puts one in front of the static catalog and
//! falls back to the curated entries whenever the source fails.

pub mod profiles;
mod spotify;

pub use profiles::{profile_for, MoodAudioProfile, STANDARD_PROFILES};
pub use spotify::SpotifyClient;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::CatalogEntry;

/// Error type for live source operations
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Music service credentials not configured")]
    MissingCredentials,

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("HTTP {status}: {url}")]
    Status { status: u16, url: String },

    #[error("Invalid response payload: {0}")]
    Decode(String),
}

/// A track returned by a live music service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveTrack {
    pub title: String,
    /// Artist names joined with ", "
    pub artist: String,
    pub album: String,
    /// Release year, when the service reports a release date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_art: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u32>,
}

/// External music service queried by mood
#[async_trait]
pub trait TrackSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Up to `limit` tracks matching `mood`
    async fn recommend(&self, mood: &str, limit: usize) -> Result<Vec<LiveTrack>, SourceError>;

    /// Free-text track search
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<LiveTrack>, SourceError>;
}

/// One recommended item, curated or live.
///
/// Untagged, so both variants serialize as plain track objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recommendation {
    Curated(CatalogEntry),
    Live(LiveTrack),
}

/// Where a recommendation list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationSource {
    Catalog,
    Live,
    /// No live source answered (search only)
    Unavailable,
}

/// Recommendations together with their origin
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations {
    pub items: Vec<Recommendation>,
    pub source: RecommendationSource,
}

impl Recommendations {
    /// Wrap curated catalog entries
    pub fn curated(entries: Vec<CatalogEntry>) -> Self {
        Self {
            items: entries.into_iter().map(Recommendation::Curated).collect(),
            source: RecommendationSource::Catalog,
        }
    }

    fn live(tracks: Vec<LiveTrack>) -> Self {
        Self {
            items: tracks.into_iter().map(Recommendation::Live).collect(),
            source: RecommendationSource::Live,
        }
    }
}

/// Substitutes live tracks for curated entries when a source is configured
#[derive(Clone, Default)]
pub struct Recommender {
    live: Option<Arc<dyn TrackSource>>,
}

impl Recommender {
    /// Recommender that always serves the curated catalog
    pub fn catalog_only() -> Self {
        Self { live: None }
    }

    pub fn with_source(source: Arc<dyn TrackSource>) -> Self {
        Self { live: Some(source) }
    }

    pub fn has_live_source(&self) -> bool {
        self.live.is_some()
    }

    /// Live tracks for `mood` if the source delivers any, else `curated`
    /// unchanged.
    pub async fn resolve(
        &self,
        mood: &str,
        count: usize,
        curated: Vec<CatalogEntry>,
    ) -> Recommendations {
        let Some(source) = &self.live else {
            return Recommendations::curated(curated);
        };

        match source.recommend(mood, count).await {
            Ok(tracks) if !tracks.is_empty() => {
                debug!(source = source.name(), mood, count = tracks.len(), "Live recommendations");
                let mut tracks = tracks;
                tracks.truncate(count);
                Recommendations::live(tracks)
            }
            Ok(_) => {
                warn!(source = source.name(), mood, "Live source returned no tracks, using catalog");
                Recommendations::curated(curated)
            }
            Err(e) => {
                warn!(source = source.name(), mood, error = %e, "Live source failed, using catalog");
                Recommendations::curated(curated)
            }
        }
    }

    /// Track search; empty when no source is configured or it fails
    pub async fn search(&self, query: &str, limit: usize) -> (Vec<LiveTrack>, RecommendationSource) {
        let Some(source) = &self.live else {
            return (Vec::new(), RecommendationSource::Unavailable);
        };

        match source.search(query, limit).await {
            Ok(mut tracks) => {
                tracks.truncate(limit);
                (tracks, RecommendationSource::Live)
            }
            Err(e) => {
                warn!(source = source.name(), error = %e, "Live search failed");
                (Vec::new(), RecommendationSource::Unavailable)
            }
        }
    }
}
