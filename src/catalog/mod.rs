//! Static mood catalog.
//!
//! Maps each mood to its curated, ordered song list. Built once at startup
//! against a [`MoodVocabulary`] and read-only afterwards.

pub mod songs;

pub use songs::{MoodShelf, SongRecord, STANDARD_SHELVES};

use serde::{Deserialize, Serialize};

use crate::mood::MoodVocabulary;

/// Errors raised while building a [`Catalog`]
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Mood {0} has no catalog entries")]
    MissingShelf(String),

    #[error("Mood {0} has more than one shelf")]
    DuplicateShelf(String),
}

/// A recommendable song
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    pub artist: String,
    pub year: u16,
    pub genre: String,
    /// Perceived energy (0.0 to 1.0)
    pub energy: f32,
    /// Musical positiveness (0.0 to 1.0)
    pub valence: f32,
    pub tags: Vec<String>,
}

impl From<&SongRecord> for CatalogEntry {
    fn from(song: &SongRecord) -> Self {
        Self {
            title: song.title.to_string(),
            artist: song.artist.to_string(),
            year: song.year,
            genre: song.genre.to_string(),
            energy: song.energy,
            valence: song.valence,
            tags: song.tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Immutable mood to song-list mapping.
///
/// Every mood of the vocabulary it was built for has at least one entry.
#[derive(Debug, Clone)]
pub struct Catalog {
    shelves: Vec<(String, Vec<CatalogEntry>)>,
    /// Index into `shelves` of the default mood
    default_shelf: usize,
}

impl Catalog {
    /// Build a catalog, checking that every vocabulary mood has songs.
    ///
    /// Shelves for moods outside the vocabulary are kept and served by
    /// [`Catalog::recommend`], but an empty shelf is never accepted.
    pub fn new(vocabulary: &MoodVocabulary, shelves: &[MoodShelf]) -> Result<Self, CatalogError> {
        let mut built: Vec<(String, Vec<CatalogEntry>)> = Vec::with_capacity(shelves.len());
        for shelf in shelves {
            if built.iter().any(|(mood, _)| mood == shelf.mood) {
                return Err(CatalogError::DuplicateShelf(shelf.mood.to_string()));
            }
            if shelf.songs.is_empty() {
                return Err(CatalogError::MissingShelf(shelf.mood.to_string()));
            }
            built.push((
                shelf.mood.to_string(),
                shelf.songs.iter().map(CatalogEntry::from).collect(),
            ));
        }

        for mood in vocabulary.mood_ids() {
            if !built.iter().any(|(m, _)| m == mood) {
                return Err(CatalogError::MissingShelf(mood.to_string()));
            }
        }

        let default_shelf = built
            .iter()
            .position(|(m, _)| m == vocabulary.default_mood())
            .ok_or_else(|| CatalogError::MissingShelf(vocabulary.default_mood().to_string()))?;

        Ok(Self {
            shelves: built,
            default_shelf,
        })
    }

    /// The curated nine-mood catalog
    pub fn standard(vocabulary: &MoodVocabulary) -> Result<Self, CatalogError> {
        Self::new(vocabulary, STANDARD_SHELVES)
    }

    /// First `count` entries for `mood`, in curation order.
    ///
    /// Unknown moods silently fall back to the default mood's shelf.
    pub fn recommend(&self, mood: &str, count: usize) -> &[CatalogEntry] {
        let entries = self.shelf(mood).unwrap_or_else(|| self.default_entries());
        &entries[..count.min(entries.len())]
    }

    /// Full shelf of a mood, if the catalog has one
    pub fn shelf(&self, mood: &str) -> Option<&[CatalogEntry]> {
        self.shelves
            .iter()
            .find(|(m, _)| m == mood)
            .map(|(_, entries)| entries.as_slice())
    }

    /// Mood keys in construction order
    pub fn all_moods(&self) -> Vec<&str> {
        self.shelves.iter().map(|(m, _)| m.as_str()).collect()
    }

    pub fn contains(&self, mood: &str) -> bool {
        self.shelf(mood).is_some()
    }

    pub fn default_mood(&self) -> &str {
        &self.shelves[self.default_shelf].0
    }

    fn default_entries(&self) -> &[CatalogEntry] {
        &self.shelves[self.default_shelf].1
    }
}
