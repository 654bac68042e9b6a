//! Lexical emotion scorer.

use std::sync::Arc;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use super::{normalize_text, MoodVocabulary};

/// Confidence reported when no keyword matched
pub const NO_MATCH_CONFIDENCE: f64 = 0.5;

/// Winning score at or above which intensity is high
pub const HIGH_INTENSITY_SCORE: u32 = 5;

/// Winning score at or above which intensity is medium
pub const MEDIUM_INTENSITY_SCORE: u32 = 3;

/// Coarse banding of the winning mood's score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_INTENSITY_SCORE {
            Intensity::High
        } else if score >= MEDIUM_INTENSITY_SCORE {
            Intensity::Medium
        } else {
            Intensity::Low
        }
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intensity::Low => write!(f, "low"),
            Intensity::Medium => write!(f, "medium"),
            Intensity::High => write!(f, "high"),
        }
    }
}

/// Raw per-mood scores in vocabulary order.
///
/// Serializes as a map so clients see `{"happy": 6, "sad": 0, ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodScores(Vec<(String, u32)>);

impl MoodScores {
    /// Score of a single mood
    pub fn get(&self, mood: &str) -> Option<u32> {
        self.0.iter().find(|(m, _)| m == mood).map(|(_, s)| *s)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(m, s)| (m.as_str(), *s))
    }

    pub fn total(&self) -> u32 {
        self.0.iter().map(|(_, s)| s).sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First mood holding the highest score, or `None` if nothing scored
    fn winner(&self) -> Option<(String, u32)> {
        let mut best: Option<(&str, u32)> = None;
        for (mood, score) in self.iter() {
            // Strictly greater: earlier moods keep ties
            if score > 0 && best.map_or(true, |(_, top)| score > top) {
                best = Some((mood, score));
            }
        }
        best.map(|(mood, score)| (mood.to_string(), score))
    }
}

impl Serialize for MoodScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (mood, score) in &self.0 {
            map.serialize_entry(mood, score)?;
        }
        map.end()
    }
}

/// Result of scoring one piece of text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    /// Winning mood
    pub mood: String,
    /// Winning score relative to all matched signal (0.0 to 1.0, two decimals)
    pub confidence: f64,
    pub intensity: Intensity,
    /// Score of every mood in the vocabulary
    pub all_scores: MoodScores,
}

/// Maps free-form text to a mood using weighted keyword matching
#[derive(Debug, Clone)]
pub struct EmotionScorer {
    vocabulary: Arc<MoodVocabulary>,
}

impl EmotionScorer {
    pub fn new(vocabulary: Arc<MoodVocabulary>) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &MoodVocabulary {
        &self.vocabulary
    }

    /// Score `text` against every mood.
    ///
    /// Never fails: text without any keyword yields the default mood with
    /// confidence 0.5 and low intensity. Ties go to the mood declared first.
    pub fn score(&self, text: &str) -> ScoreResult {
        let normalized = normalize_text(text);

        let all_scores = MoodScores(
            self.vocabulary
                .moods()
                .map(|lexicon| (lexicon.id().to_string(), lexicon.score(&normalized)))
                .collect(),
        );

        let Some((mood, top)) = all_scores.winner() else {
            return ScoreResult {
                mood: self.vocabulary.default_mood().to_string(),
                confidence: NO_MATCH_CONFIDENCE,
                intensity: Intensity::Low,
                all_scores,
            };
        };

        ScoreResult {
            mood,
            confidence: confidence(top, all_scores.total()),
            intensity: Intensity::from_score(top),
            all_scores,
        }
    }
}

/// `top / (total + 1)`, capped at 1.0 and rounded to two decimals.
///
/// The `+ 1` keeps a lone match below full confidence. Rounding acts on the
/// exact binary value of the ratio, not on the ratio scaled by 100.
fn confidence(top: u32, total: u32) -> f64 {
    let raw = (f64::from(top) / (f64::from(total) + 1.0)).min(1.0);
    format!("{raw:.2}").parse().unwrap_or(raw)
}
