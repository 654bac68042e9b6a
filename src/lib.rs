//! MoodTune
//!
//! Detects the mood of a short free-form text with a weighted keyword
//! lexicon and recommends songs for it from a curated catalog, optionally
//! backed by a live music service.

pub mod catalog;
pub mod config;
pub mod error;
pub mod mood;
pub mod pipeline;
pub mod server;
pub mod source;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, Result};

pub use catalog::{Catalog, CatalogEntry};
pub use mood::{EmotionScorer, Intensity, MoodScores, MoodVocabulary, ScoreResult};
pub use pipeline::{Pipeline, RecommendationResult};
pub use source::{LiveTrack, Recommender, TrackSource};
