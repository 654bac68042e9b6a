//! Text to recommendations: scores the text, then looks the mood up in the
//! catalog.

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::{Catalog, CatalogEntry, CatalogError};
use crate::mood::{EmotionScorer, Intensity, MoodScores, MoodVocabulary, VocabularyError};

/// Combined outcome of one analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub user_input: String,
    pub detected_mood: String,
    pub confidence: f64,
    pub intensity: Intensity,
    pub recommendations: Vec<CatalogEntry>,
    pub emotion_scores: MoodScores,
}

/// Errors raised while assembling the standard pipeline
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Invalid mood vocabulary: {0}")]
    Vocabulary(#[from] VocabularyError),

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Composes the emotion scorer with the catalog.
///
/// Holds only immutable data, so one instance is shared by every request.
#[derive(Debug, Clone)]
pub struct Pipeline {
    scorer: EmotionScorer,
    catalog: Arc<Catalog>,
}

impl Pipeline {
    pub fn new(vocabulary: Arc<MoodVocabulary>, catalog: Arc<Catalog>) -> Self {
        Self {
            scorer: EmotionScorer::new(vocabulary),
            catalog,
        }
    }

    /// Build the built-in vocabulary and catalog and wire them together
    pub fn standard() -> Result<Self, PipelineError> {
        let vocabulary = MoodVocabulary::standard()?;
        let catalog = Catalog::standard(&vocabulary)?;
        Ok(Self::new(Arc::new(vocabulary), Arc::new(catalog)))
    }

    pub fn scorer(&self) -> &EmotionScorer {
        &self.scorer
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Detect the mood of `text` and return up to `count` songs for it.
    ///
    /// `count` is not validated here; callers bound it.
    pub fn analyze(&self, text: &str, count: usize) -> RecommendationResult {
        let score = self.scorer.score(text);
        let recommendations = self.catalog.recommend(&score.mood, count).to_vec();

        RecommendationResult {
            user_input: text.to_string(),
            detected_mood: score.mood,
            confidence: score.confidence,
            intensity: score.intensity,
            recommendations,
            emotion_scores: score.all_scores,
        }
    }
}
