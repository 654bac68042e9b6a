//! Mood vocabulary and lexical emotion scoring.
//!
//! The vocabulary is built once from the keyword tables in [`lexicon`],
//! validated, and then shared read-only with the [`EmotionScorer`].

pub mod lexicon;
pub mod scorer;

pub use lexicon::{KeywordTier, MoodDefinition, DEFAULT_MOOD, STANDARD_MOODS};
pub use scorer::{EmotionScorer, Intensity, MoodScores, ScoreResult};

use std::collections::HashSet;

/// Errors raised while building a [`MoodVocabulary`]
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum VocabularyError {
    #[error("Vocabulary has no moods")]
    Empty,

    #[error("Mood declared twice: {0}")]
    DuplicateMood(String),

    #[error("Default mood {0} is not part of the vocabulary")]
    UnknownDefault(String),

    #[error("Mood {mood} has a keyword that is empty after normalization")]
    EmptyKeyword { mood: String },

    #[error("Keyword {keyword:?} appears in more than one tier of mood {mood}")]
    KeywordInMultipleTiers { mood: String, keyword: String },
}

/// Lowercase `text` and replace everything that is not a letter, digit or
/// whitespace with a single space.
///
/// Keywords are matched as substrings of the result, so punctuation such as
/// apostrophes and hyphens only ever acts as a separator.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Validated keyword set of a single mood
#[derive(Debug, Clone)]
pub struct MoodLexicon {
    id: String,
    keywords: Vec<(KeywordTier, String)>,
}

impl MoodLexicon {
    fn from_definition(def: &MoodDefinition) -> Result<Self, VocabularyError> {
        let mut seen = HashSet::new();
        let mut keywords = Vec::new();

        for tier in KeywordTier::ALL {
            for raw in def.keywords(tier) {
                let keyword = normalize_text(raw);
                if keyword.trim().is_empty() {
                    return Err(VocabularyError::EmptyKeyword {
                        mood: def.id.to_string(),
                    });
                }
                if !seen.insert(keyword.clone()) {
                    return Err(VocabularyError::KeywordInMultipleTiers {
                        mood: def.id.to_string(),
                        keyword,
                    });
                }
                keywords.push((tier, keyword));
            }
        }

        Ok(Self {
            id: def.id.to_string(),
            keywords,
        })
    }

    /// Mood identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Keywords with their tier, in tier order
    pub fn keywords(&self) -> impl Iterator<Item = (KeywordTier, &str)> {
        self.keywords.iter().map(|(tier, kw)| (*tier, kw.as_str()))
    }

    /// Sum of tier weights for every keyword contained in `normalized`.
    ///
    /// Each keyword contributes at most once, however often it occurs.
    pub fn score(&self, normalized: &str) -> u32 {
        self.keywords
            .iter()
            .filter(|(_, kw)| normalized.contains(kw.as_str()))
            .map(|(tier, _)| tier.weight())
            .sum()
    }
}

/// Immutable, ordered set of moods with their keyword tiers.
///
/// Iteration order is declaration order and doubles as tie-break precedence.
#[derive(Debug, Clone)]
pub struct MoodVocabulary {
    moods: Vec<MoodLexicon>,
    default_mood: String,
}

impl MoodVocabulary {
    /// Build and validate a vocabulary from mood definitions
    pub fn new(defs: &[MoodDefinition], default_mood: &str) -> Result<Self, VocabularyError> {
        if defs.is_empty() {
            return Err(VocabularyError::Empty);
        }

        let mut ids = HashSet::new();
        let mut moods = Vec::with_capacity(defs.len());
        for def in defs {
            if !ids.insert(def.id) {
                return Err(VocabularyError::DuplicateMood(def.id.to_string()));
            }
            moods.push(MoodLexicon::from_definition(def)?);
        }

        if !ids.contains(default_mood) {
            return Err(VocabularyError::UnknownDefault(default_mood.to_string()));
        }

        Ok(Self {
            moods,
            default_mood: default_mood.to_string(),
        })
    }

    /// The built-in nine-mood vocabulary with `calm` as default
    pub fn standard() -> Result<Self, VocabularyError> {
        Self::new(STANDARD_MOODS, DEFAULT_MOOD)
    }

    /// Moods in precedence order
    pub fn moods(&self) -> impl Iterator<Item = &MoodLexicon> {
        self.moods.iter()
    }

    /// Mood identifiers in precedence order
    pub fn mood_ids(&self) -> impl Iterator<Item = &str> {
        self.moods.iter().map(MoodLexicon::id)
    }

    pub fn contains(&self, mood: &str) -> bool {
        self.moods.iter().any(|m| m.id == mood)
    }

    pub fn default_mood(&self) -> &str {
        &self.default_mood
    }

    pub fn len(&self) -> usize {
        self.moods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moods.is_empty()
    }
}
