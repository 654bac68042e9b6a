//! Keyword lexicon definitions for lexical mood detection.
//!
//! Each mood carries three keyword tiers. The order of [`STANDARD_MOODS`] is
//! the mood precedence: when two moods reach the same score, the one declared
//! first wins.

use serde::{Deserialize, Serialize};

/// Keyword weight class within a mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordTier {
    /// Direct statements of the mood
    Primary,
    /// Weaker or contextual hints
    Secondary,
    /// Strong, high-intensity expressions of the mood
    Intensity,
}

impl KeywordTier {
    /// All tiers, in scoring order
    pub const ALL: [KeywordTier; 3] = [
        KeywordTier::Primary,
        KeywordTier::Secondary,
        KeywordTier::Intensity,
    ];

    /// Score added to a mood when a keyword of this tier matches
    pub const fn weight(self) -> u32 {
        match self {
            KeywordTier::Primary => 3,
            KeywordTier::Secondary => 1,
            KeywordTier::Intensity => 5,
        }
    }
}

impl std::fmt::Display for KeywordTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeywordTier::Primary => write!(f, "primary"),
            KeywordTier::Secondary => write!(f, "secondary"),
            KeywordTier::Intensity => write!(f, "intensity"),
        }
    }
}

/// A mood definition with its tiered keyword lists
#[derive(Debug, Clone)]
pub struct MoodDefinition {
    /// Mood identifier (lowercase)
    pub id: &'static str,
    pub primary: &'static [&'static str],
    pub secondary: &'static [&'static str],
    pub intensity: &'static [&'static str],
}

impl MoodDefinition {
    /// Keywords of a single tier
    pub fn keywords(&self, tier: KeywordTier) -> &'static [&'static str] {
        match tier {
            KeywordTier::Primary => self.primary,
            KeywordTier::Secondary => self.secondary,
            KeywordTier::Intensity => self.intensity,
        }
    }
}

/// Mood returned when no keyword matches at all
pub const DEFAULT_MOOD: &str = "calm";

// ============================================================================
// Positive moods
// ============================================================================

pub const MOOD_HAPPY: MoodDefinition = MoodDefinition {
    id: "happy",
    primary: &[
        "happy",
        "joy",
        "excited",
        "great",
        "amazing",
        "wonderful",
        "cheerful",
        "delighted",
    ],
    secondary: &["good", "nice", "pleased", "satisfied", "content", "upbeat"],
    intensity: &["ecstatic", "thrilled", "overjoyed", "euphoric"],
};

pub const MOOD_SAD: MoodDefinition = MoodDefinition {
    id: "sad",
    primary: &[
        "sad",
        "depressed",
        "down",
        "lonely",
        "heartbroken",
        "melancholy",
        "miserable",
    ],
    secondary: &["blue", "gloomy", "disappointed", "hurt", "upset"],
    intensity: &["devastated", "crushed", "despondent", "hopeless"],
};

pub const MOOD_ENERGETIC: MoodDefinition = MoodDefinition {
    id: "energetic",
    primary: &[
        "energetic",
        "pumped",
        "hyper",
        "motivated",
        "active",
        "powerful",
    ],
    secondary: &["workout", "exercise", "run", "dance", "move"],
    intensity: &["explosive", "unstoppable", "charged", "electrified"],
};

pub const MOOD_CALM: MoodDefinition = MoodDefinition {
    id: "calm",
    primary: &["calm", "peaceful", "relax", "chill", "tranquil", "serene"],
    secondary: &["meditate", "zen", "quiet", "still", "composed"],
    intensity: &["blissful", "centered", "harmonious"],
};

pub const MOOD_ROMANTIC: MoodDefinition = MoodDefinition {
    id: "romantic",
    primary: &["love", "romantic", "crush", "date", "relationship", "tender"],
    secondary: &["affection", "caring", "devoted", "intimate"],
    intensity: &["passionate", "smitten", "infatuated", "adoring"],
};

// ============================================================================
// Tense moods
// ============================================================================

pub const MOOD_ANGRY: MoodDefinition = MoodDefinition {
    id: "angry",
    primary: &["angry", "mad", "furious", "rage", "frustrated", "annoyed"],
    secondary: &["irritated", "bothered", "pissed", "livid"],
    intensity: &["enraged", "incensed", "outraged", "seething"],
};

pub const MOOD_ANXIOUS: MoodDefinition = MoodDefinition {
    id: "anxious",
    primary: &[
        "anxious",
        "nervous",
        "worried",
        "stressed",
        "tense",
        "overwhelmed",
    ],
    secondary: &["uneasy", "restless", "concerned", "troubled"],
    intensity: &["panicked", "terrified", "frantic", "distressed"],
};

// ============================================================================
// Reflective and assertive moods
// ============================================================================

pub const MOOD_NOSTALGIC: MoodDefinition = MoodDefinition {
    id: "nostalgic",
    primary: &[
        "nostalgic",
        "memories",
        "remember",
        "past",
        "throwback",
        "reminisce",
    ],
    secondary: &["missing", "longing", "sentimental", "wistful"],
    intensity: &["yearning", "pining"],
};

pub const MOOD_CONFIDENT: MoodDefinition = MoodDefinition {
    id: "confident",
    primary: &[
        "confident",
        "powerful",
        "strong",
        "fierce",
        "unstoppable",
        "boss",
    ],
    secondary: &["capable", "determined", "bold", "assured"],
    intensity: &["invincible", "dominant", "fearless", "triumphant"],
};

/// All moods, in precedence order
pub const STANDARD_MOODS: &[MoodDefinition] = &[
    MOOD_HAPPY,
    MOOD_SAD,
    MOOD_ENERGETIC,
    MOOD_CALM,
    MOOD_ROMANTIC,
    MOOD_ANGRY,
    MOOD_ANXIOUS,
    MOOD_NOSTALGIC,
    MOOD_CONFIDENT,
];
