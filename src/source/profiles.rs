//! Audio-feature targets used to query a live music service for a mood.

use serde::Serialize;

/// Target audio features for one mood
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoodAudioProfile {
    pub mood: &'static str,
    /// Target valence (0.0 to 1.0)
    pub target_valence: f32,
    /// Target energy (0.0 to 1.0)
    pub target_energy: f32,
    /// Seed genres, most representative first
    pub seed_genres: &'static [&'static str],
}

/// Number of seed genres sent per request
pub const MAX_SEED_GENRES: usize = 2;

pub const STANDARD_PROFILES: &[MoodAudioProfile] = &[
    MoodAudioProfile {
        mood: "happy",
        target_valence: 0.8,
        target_energy: 0.7,
        seed_genres: &["pop", "dance", "funk"],
    },
    MoodAudioProfile {
        mood: "sad",
        target_valence: 0.3,
        target_energy: 0.4,
        seed_genres: &["acoustic", "piano", "sad"],
    },
    MoodAudioProfile {
        mood: "energetic",
        target_valence: 0.6,
        target_energy: 0.9,
        seed_genres: &["rock", "edm", "workout"],
    },
    MoodAudioProfile {
        mood: "calm",
        target_valence: 0.5,
        target_energy: 0.3,
        seed_genres: &["ambient", "chill", "classical"],
    },
    MoodAudioProfile {
        mood: "romantic",
        target_valence: 0.7,
        target_energy: 0.5,
        seed_genres: &["r-n-b", "soul", "romance"],
    },
    MoodAudioProfile {
        mood: "angry",
        target_valence: 0.3,
        target_energy: 0.9,
        seed_genres: &["metal", "hard-rock", "punk"],
    },
    MoodAudioProfile {
        mood: "anxious",
        target_valence: 0.4,
        target_energy: 0.5,
        seed_genres: &["alternative", "indie", "folk"],
    },
    MoodAudioProfile {
        mood: "nostalgic",
        target_valence: 0.6,
        target_energy: 0.6,
        seed_genres: &["classic-rock", "oldies", "retro"],
    },
    MoodAudioProfile {
        mood: "confident",
        target_valence: 0.7,
        target_energy: 0.8,
        seed_genres: &["hip-hop", "rap", "power"],
    },
];

/// Profile used for moods without their own entry
pub const FALLBACK_PROFILE: MoodAudioProfile = MoodAudioProfile {
    mood: "calm",
    target_valence: 0.5,
    target_energy: 0.3,
    seed_genres: &["ambient", "chill", "classical"],
};

/// Profile for `mood`, or the calm profile when the mood is unknown
pub fn profile_for(mood: &str) -> &'static MoodAudioProfile {
    STANDARD_PROFILES
        .iter()
        .find(|p| p.mood == mood)
        .unwrap_or(&FALLBACK_PROFILE)
}

impl MoodAudioProfile {
    /// Comma-separated seed genres, limited to [`MAX_SEED_GENRES`]
    pub fn seed_param(&self) -> String {
        self.seed_genres
            .iter()
            .take(MAX_SEED_GENRES)
            .copied()
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::STANDARD_MOODS;

    #[test]
    fn test_every_mood_has_profile() {
        for mood in STANDARD_MOODS {
            assert_eq!(profile_for(mood.id).mood, mood.id);
        }
    }

    #[test]
    fn test_unknown_mood_uses_calm_profile() {
        let profile = profile_for("bored");
        assert_eq!(profile.mood, "calm");
        assert_eq!(profile, profile_for("calm"));
    }

    #[test]
    fn test_seed_param_takes_two_genres() {
        assert_eq!(profile_for("angry").seed_param(), "metal,hard-rock");
        assert_eq!(profile_for("romantic").seed_param(), "r-n-b,soul");
    }

    #[test]
    fn test_targets_in_range() {
        for profile in STANDARD_PROFILES {
            assert!((0.0..=1.0).contains(&profile.target_valence));
            assert!((0.0..=1.0).contains(&profile.target_energy));
        }
    }
}
