//! Media type enumeration and display labels.

use serde::{Deserialize, Serialize};

/// The closed set of media kinds a record can catalogue.
///
/// Variant order drives the section order on archive pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Book,
    Music,
    TvFilm,
    Other,
}

impl MediaType {
    pub const ALL: [MediaType; 4] = [
        MediaType::Book,
        MediaType::Music,
        MediaType::TvFilm,
        MediaType::Other,
    ];

    /// The stored / wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Book => "book",
            MediaType::Music => "music",
            MediaType::TvFilm => "tv_film",
            MediaType::Other => "other",
        }
    }

    /// Strict parse used on writes. Unknown values are rejected.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    /// Lenient parse used on reads: anything outside the known set lands in
    /// [`MediaType::Other`].
    pub fn from_stored(value: &str) -> Self {
        Self::parse(value).unwrap_or(MediaType::Other)
    }

    /// Display label for badges and headings.
    pub fn label(self) -> &'static str {
        match self {
            MediaType::Book => "Book",
            MediaType::Music => "Music",
            MediaType::TvFilm => "TV/Film",
            MediaType::Other => "Other",
        }
    }

    /// Label for the `author_artist` field of this kind of media.
    pub fn creator_label(self) -> &'static str {
        match self {
            MediaType::Book => "Author",
            MediaType::Music => "Artist",
            MediaType::TvFilm => "Director",
            MediaType::Other => "Creator",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
