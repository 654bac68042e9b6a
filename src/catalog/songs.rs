//! Curated song tables, one shelf per mood.
//!
//! Shelf order is the ranking: the first song of a shelf is its top
//! recommendation.

/// A static song record
#[derive(Debug, Clone, Copy)]
pub struct SongRecord {
    pub title: &'static str,
    pub artist: &'static str,
    pub year: u16,
    pub genre: &'static str,
    /// Perceived energy (0.0 to 1.0)
    pub energy: f32,
    /// Musical positiveness (0.0 to 1.0)
    pub valence: f32,
    pub tags: &'static [&'static str],
}

/// Songs curated for one mood
#[derive(Debug, Clone, Copy)]
pub struct MoodShelf {
    pub mood: &'static str,
    pub songs: &'static [SongRecord],
}

const HAPPY_SONGS: &[SongRecord] = &[
    SongRecord {
        title: "Good Vibrations",
        artist: "The Beach Boys",
        year: 1966,
        genre: "Pop",
        energy: 0.8,
        valence: 0.9,
        tags: &["Classic", "Feel-good", "Upbeat"],
    },
    SongRecord {
        title: "Walking on Sunshine",
        artist: "Katrina and the Waves",
        year: 1983,
        genre: "Pop",
        energy: 0.9,
        valence: 0.95,
        tags: &["80s", "Pop", "Energetic"],
    },
    SongRecord {
        title: "Happy",
        artist: "Pharrell Williams",
        year: 2013,
        genre: "Pop",
        energy: 0.8,
        valence: 0.9,
        tags: &["Pop", "Dance", "Positive"],
    },
    SongRecord {
        title: "Don't Stop Me Now",
        artist: "Queen",
        year: 1978,
        genre: "Rock",
        energy: 0.95,
        valence: 0.85,
        tags: &["Rock", "Classic", "Powerful"],
    },
    SongRecord {
        title: "I Wanna Dance with Somebody",
        artist: "Whitney Houston",
        year: 1987,
        genre: "Pop",
        energy: 0.9,
        valence: 0.9,
        tags: &["Pop", "Dance", "80s"],
    },
];

const SAD_SONGS: &[SongRecord] = &[
    SongRecord {
        title: "Someone Like You",
        artist: "Adele",
        year: 2011,
        genre: "Pop",
        energy: 0.3,
        valence: 0.2,
        tags: &["Ballad", "Emotional", "Piano"],
    },
    SongRecord {
        title: "The Night We Met",
        artist: "Lord Huron",
        year: 2015,
        genre: "Indie",
        energy: 0.4,
        valence: 0.3,
        tags: &["Indie", "Melancholic", "Acoustic"],
    },
    SongRecord {
        title: "Hurt",
        artist: "Johnny Cash",
        year: 2002,
        genre: "Country",
        energy: 0.3,
        valence: 0.15,
        tags: &["Country", "Deep", "Emotional"],
    },
    SongRecord {
        title: "Mad World",
        artist: "Gary Jules",
        year: 2001,
        genre: "Alternative",
        energy: 0.2,
        valence: 0.2,
        tags: &["Alternative", "Somber", "Reflective"],
    },
    SongRecord {
        title: "Fix You",
        artist: "Coldplay",
        year: 2005,
        genre: "Rock",
        energy: 0.5,
        valence: 0.4,
        tags: &["Rock", "Healing", "Hope"],
    },
];

const ENERGETIC_SONGS: &[SongRecord] = &[
    SongRecord {
        title: "Eye of the Tiger",
        artist: "Survivor",
        year: 1982,
        genre: "Rock",
        energy: 0.95,
        valence: 0.75,
        tags: &["Rock", "Motivational", "80s"],
    },
    SongRecord {
        title: "Lose Yourself",
        artist: "Eminem",
        year: 2002,
        genre: "Hip-Hop",
        energy: 0.9,
        valence: 0.7,
        tags: &["Hip-Hop", "Intense", "Powerful"],
    },
    SongRecord {
        title: "Thunderstruck",
        artist: "AC/DC",
        year: 1990,
        genre: "Rock",
        energy: 0.95,
        valence: 0.8,
        tags: &["Rock", "High-energy", "Classic"],
    },
    SongRecord {
        title: "Till I Collapse",
        artist: "Eminem ft. Nate Dogg",
        year: 2002,
        genre: "Hip-Hop",
        energy: 0.9,
        valence: 0.75,
        tags: &["Hip-Hop", "Workout", "Intense"],
    },
    SongRecord {
        title: "Pump It",
        artist: "The Black Eyed Peas",
        year: 2006,
        genre: "Hip-Hop",
        energy: 0.95,
        valence: 0.8,
        tags: &["Hip-Hop", "Dance", "Party"],
    },
];

const CALM_SONGS: &[SongRecord] = &[
    SongRecord {
        title: "Weightless",
        artist: "Marconi Union",
        year: 2011,
        genre: "Ambient",
        energy: 0.1,
        valence: 0.6,
        tags: &["Ambient", "Meditation", "Peaceful"],
    },
    SongRecord {
        title: "Clair de Lune",
        artist: "Claude Debussy",
        year: 1905,
        genre: "Classical",
        energy: 0.2,
        valence: 0.7,
        tags: &["Classical", "Piano", "Serene"],
    },
    SongRecord {
        title: "Breathe Me",
        artist: "Sia",
        year: 2004,
        genre: "Alternative",
        energy: 0.3,
        valence: 0.5,
        tags: &["Ambient", "Gentle", "Soothing"],
    },
    SongRecord {
        title: "Holocene",
        artist: "Bon Iver",
        year: 2011,
        genre: "Indie",
        energy: 0.3,
        valence: 0.6,
        tags: &["Indie", "Atmospheric", "Calm"],
    },
    SongRecord {
        title: "Intro",
        artist: "The xx",
        year: 2009,
        genre: "Indie",
        energy: 0.25,
        valence: 0.65,
        tags: &["Indie", "Minimal", "Dreamy"],
    },
];

const ROMANTIC_SONGS: &[SongRecord] = &[
    SongRecord {
        title: "Perfect",
        artist: "Ed Sheeran",
        year: 2017,
        genre: "Pop",
        energy: 0.4,
        valence: 0.8,
        tags: &["Pop", "Love", "Ballad"],
    },
    SongRecord {
        title: "All of Me",
        artist: "John Legend",
        year: 2013,
        genre: "R&B",
        energy: 0.35,
        valence: 0.75,
        tags: &["R&B", "Piano", "Tender"],
    },
    SongRecord {
        title: "Thinking Out Loud",
        artist: "Ed Sheeran",
        year: 2014,
        genre: "Pop",
        energy: 0.5,
        valence: 0.8,
        tags: &["Pop", "Romantic", "Sweet"],
    },
    SongRecord {
        title: "Can't Help Falling in Love",
        artist: "Elvis Presley",
        year: 1961,
        genre: "Pop",
        energy: 0.3,
        valence: 0.85,
        tags: &["Classic", "Timeless", "Love"],
    },
    SongRecord {
        title: "At Last",
        artist: "Etta James",
        year: 1960,
        genre: "Jazz",
        energy: 0.4,
        valence: 0.9,
        tags: &["Jazz", "Soulful", "Classic"],
    },
];

const ANGRY_SONGS: &[SongRecord] = &[
    SongRecord {
        title: "Break Stuff",
        artist: "Limp Bizkit",
        year: 1999,
        genre: "Nu-Metal",
        energy: 0.95,
        valence: 0.3,
        tags: &["Nu-Metal", "Aggressive", "Raw"],
    },
    SongRecord {
        title: "Killing in the Name",
        artist: "Rage Against the Machine",
        year: 1992,
        genre: "Rock",
        energy: 0.9,
        valence: 0.25,
        tags: &["Rock", "Protest", "Intense"],
    },
    SongRecord {
        title: "In the End",
        artist: "Linkin Park",
        year: 2000,
        genre: "Rock",
        energy: 0.8,
        valence: 0.35,
        tags: &["Rock", "Emotional", "Powerful"],
    },
    SongRecord {
        title: "Last Resort",
        artist: "Papa Roach",
        year: 2000,
        genre: "Nu-Metal",
        energy: 0.85,
        valence: 0.3,
        tags: &["Nu-Metal", "Intense", "Cathartic"],
    },
    SongRecord {
        title: "Bodies",
        artist: "Drowning Pool",
        year: 2001,
        genre: "Metal",
        energy: 0.95,
        valence: 0.4,
        tags: &["Metal", "Aggressive", "Heavy"],
    },
];

const ANXIOUS_SONGS: &[SongRecord] = &[
    SongRecord {
        title: "Breathe",
        artist: "Pink Floyd",
        year: 1973,
        genre: "Rock",
        energy: 0.4,
        valence: 0.5,
        tags: &["Rock", "Calming", "Progressive"],
    },
    SongRecord {
        title: "Stressed Out",
        artist: "Twenty One Pilots",
        year: 2015,
        genre: "Alternative",
        energy: 0.6,
        valence: 0.4,
        tags: &["Alternative", "Relatable", "Modern"],
    },
    SongRecord {
        title: "Everybody Hurts",
        artist: "R.E.M.",
        year: 1992,
        genre: "Rock",
        energy: 0.3,
        valence: 0.45,
        tags: &["Rock", "Comforting", "Supportive"],
    },
    SongRecord {
        title: "The Scientist",
        artist: "Coldplay",
        year: 2002,
        genre: "Alternative",
        energy: 0.4,
        valence: 0.5,
        tags: &["Alternative", "Reflective", "Soothing"],
    },
    SongRecord {
        title: "Let It Be",
        artist: "The Beatles",
        year: 1970,
        genre: "Rock",
        energy: 0.4,
        valence: 0.6,
        tags: &["Classic", "Reassuring", "Peaceful"],
    },
];

const NOSTALGIC_SONGS: &[SongRecord] = &[
    SongRecord {
        title: "Summer of '69",
        artist: "Bryan Adams",
        year: 1984,
        genre: "Rock",
        energy: 0.75,
        valence: 0.7,
        tags: &["Rock", "Classic", "Throwback"],
    },
    SongRecord {
        title: "Wonderwall",
        artist: "Oasis",
        year: 1995,
        genre: "Britpop",
        energy: 0.6,
        valence: 0.65,
        tags: &["Britpop", "90s", "Iconic"],
    },
    SongRecord {
        title: "Dream On",
        artist: "Aerosmith",
        year: 1973,
        genre: "Rock",
        energy: 0.7,
        valence: 0.6,
        tags: &["Rock", "Classic", "Timeless"],
    },
    SongRecord {
        title: "Tears in Heaven",
        artist: "Eric Clapton",
        year: 1992,
        genre: "Ballad",
        energy: 0.3,
        valence: 0.4,
        tags: &["Ballad", "Emotional", "Classic"],
    },
    SongRecord {
        title: "The Sound of Silence",
        artist: "Simon & Garfunkel",
        year: 1964,
        genre: "Folk",
        energy: 0.3,
        valence: 0.5,
        tags: &["Folk", "60s", "Reflective"],
    },
];

const CONFIDENT_SONGS: &[SongRecord] = &[
    SongRecord {
        title: "Stronger",
        artist: "Kanye West",
        year: 2007,
        genre: "Hip-Hop",
        energy: 0.85,
        valence: 0.75,
        tags: &["Hip-Hop", "Powerful", "Motivational"],
    },
    SongRecord {
        title: "Roar",
        artist: "Katy Perry",
        year: 2013,
        genre: "Pop",
        energy: 0.8,
        valence: 0.8,
        tags: &["Pop", "Empowering", "Uplifting"],
    },
    SongRecord {
        title: "We Will Rock You",
        artist: "Queen",
        year: 1977,
        genre: "Rock",
        energy: 0.9,
        valence: 0.75,
        tags: &["Rock", "Anthem", "Powerful"],
    },
    SongRecord {
        title: "Survivor",
        artist: "Destiny's Child",
        year: 2001,
        genre: "R&B",
        energy: 0.75,
        valence: 0.8,
        tags: &["R&B", "Empowering", "Strong"],
    },
    SongRecord {
        title: "Lose Control",
        artist: "Meduza, Becky Hill",
        year: 2019,
        genre: "Dance",
        energy: 0.9,
        valence: 0.85,
        tags: &["Dance", "Confident", "Energetic"],
    },
];

/// All curated shelves, in catalog order
pub const STANDARD_SHELVES: &[MoodShelf] = &[
    MoodShelf { mood: "happy", songs: HAPPY_SONGS },
    MoodShelf { mood: "sad", songs: SAD_SONGS },
    MoodShelf { mood: "energetic", songs: ENERGETIC_SONGS },
    MoodShelf { mood: "calm", songs: CALM_SONGS },
    MoodShelf { mood: "romantic", songs: ROMANTIC_SONGS },
    MoodShelf { mood: "angry", songs: ANGRY_SONGS },
    MoodShelf { mood: "anxious", songs: ANXIOUS_SONGS },
    MoodShelf { mood: "nostalgic", songs: NOSTALGIC_SONGS },
    MoodShelf { mood: "confident", songs: CONFIDENT_SONGS },
];
