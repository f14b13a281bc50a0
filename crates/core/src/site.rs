//! User site configuration: color palettes, read-time defaults, favorites and
//! username rules.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

pub const DEFAULT_WELCOME_MESSAGE: &str =
    "Welcome to my personal archive of media, thoughts, and discoveries.";

pub const DEFAULT_QUOTE: &str = "\"The only way to deal with an unfree world is to become so \
     absolutely free that your very existence is an act of rebellion.\" - Albert Camus";

pub const DEFAULT_FAVORITE_BOOK: &str = "Diary of a Wimpy Kid: Rodrick Rules - Jeff Kinney";
pub const DEFAULT_FAVORITE_MUSIC: &str = "Heavy Metal Drummer - Wilco";
pub const DEFAULT_FAVORITE_TV_MOVIES: &str = "Fleabag - Phoebe Waller-Bridge";
pub const DEFAULT_FAVORITE_OTHER: &str = "The Daily - The New York Times";

/// Return `stored` unless it is absent or blank, otherwise `default`.
pub fn text_or_default(stored: Option<&str>, default: &str) -> String {
    match stored {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => default.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Color themes
// ---------------------------------------------------------------------------

/// Colors used to render one palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub main: &'static str,
    pub light: &'static str,
    pub background: &'static str,
    pub sidebar: &'static str,
}

/// The fixed set of site palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    DustyRose,
    Sage,
    Charcoal,
    WarmBeige,
    MutedBlue,
    Lavender,
}

impl ColorTheme {
    pub const DEFAULT: ColorTheme = ColorTheme::DustyRose;

    pub const ALL: [ColorTheme; 6] = [
        ColorTheme::DustyRose,
        ColorTheme::Sage,
        ColorTheme::Charcoal,
        ColorTheme::WarmBeige,
        ColorTheme::MutedBlue,
        ColorTheme::Lavender,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorTheme::DustyRose => "dusty_rose",
            ColorTheme::Sage => "sage",
            ColorTheme::Charcoal => "charcoal",
            ColorTheme::WarmBeige => "warm_beige",
            ColorTheme::MutedBlue => "muted_blue",
            ColorTheme::Lavender => "lavender",
        }
    }

    /// Human label shown on the site-creation form.
    pub fn label(self) -> &'static str {
        match self {
            ColorTheme::DustyRose => "dusty rose",
            ColorTheme::Sage => "sage green",
            ColorTheme::Charcoal => "charcoal",
            ColorTheme::WarmBeige => "warm beige",
            ColorTheme::MutedBlue => "muted blue",
            ColorTheme::Lavender => "lavender grey",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ColorTheme::DustyRose => Palette {
                main: "#c08a8a",
                light: "#f0e6e6",
                background: "#faf8f8",
                sidebar: "#e6d4d4",
            },
            ColorTheme::Sage => Palette {
                main: "#8b9a7a",
                light: "#e8ede4",
                background: "#fafbf9",
                sidebar: "#d4e0cb",
            },
            ColorTheme::Charcoal => Palette {
                main: "#6b7280",
                light: "#e5e7eb",
                background: "#fafafa",
                sidebar: "#d1d5db",
            },
            ColorTheme::WarmBeige => Palette {
                main: "#a3906f",
                light: "#f0ede6",
                background: "#fdfcfa",
                sidebar: "#e6dcc9",
            },
            ColorTheme::MutedBlue => Palette {
                main: "#7a8eb5",
                light: "#e4e8f1",
                background: "#fafbfc",
                sidebar: "#d1dce8",
            },
            ColorTheme::Lavender => Palette {
                main: "#9d8db5",
                light: "#ede8f1",
                background: "#fbfafc",
                sidebar: "#e0d6e8",
            },
        }
    }

    /// Parse a theme chosen by a user. Accepts the snake_case key or the
    /// human label ("sage green"), case-insensitively.
    pub fn parse_choice(input: &str) -> Option<Self> {
        let normalized = input.trim().to_lowercase();
        let as_key = normalized.replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == as_key || t.label() == normalized)
    }

    /// Resolve a stored value. Unknown values fall back to [`ColorTheme::DEFAULT`].
    pub fn resolve(stored: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == stored)
            .unwrap_or(Self::DEFAULT)
    }
}

// ---------------------------------------------------------------------------
// Favorites
// ---------------------------------------------------------------------------

/// The "current favorites" panel, as stored (any field may be missing).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritesInput {
    pub book: Option<String>,
    pub music: Option<String>,
    pub tv_movies: Option<String>,
    pub other: Option<String>,
}

/// The "current favorites" panel with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Favorites {
    pub book: String,
    pub music: String,
    pub tv_movies: String,
    pub other: String,
}

impl Favorites {
    /// Resolve stored JSON. Anything that is not an object, and any missing,
    /// non-string or blank field, falls back to the default.
    pub fn resolve(stored: Option<&serde_json::Value>) -> Self {
        let field = |name: &str| stored.and_then(|v| v.get(name)).and_then(|v| v.as_str());
        Self {
            book: text_or_default(field("book"), DEFAULT_FAVORITE_BOOK),
            music: text_or_default(field("music"), DEFAULT_FAVORITE_MUSIC),
            tv_movies: text_or_default(field("tv_movies"), DEFAULT_FAVORITE_TV_MOVIES),
            other: text_or_default(field("other"), DEFAULT_FAVORITE_OTHER),
        }
    }
}

/// Merge a partial favorites update into the stored JSON. Fields absent from
/// `update` keep their stored value.
pub fn merge_favorites(
    stored: Option<&serde_json::Value>,
    update: &FavoritesInput,
) -> serde_json::Value {
    let mut merged = stored
        .and_then(|v| v.as_object())
        .cloned()
        .unwrap_or_default();
    let fields = [
        ("book", &update.book),
        ("music", &update.music),
        ("tv_movies", &update.tv_movies),
        ("other", &update.other),
    ];
    for (key, value) in fields {
        if let Some(v) = value {
            merged.insert(key.to_string(), serde_json::Value::String(v.clone()));
        }
    }
    serde_json::Value::Object(merged)
}

// ---------------------------------------------------------------------------
// Usernames
// ---------------------------------------------------------------------------

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 30;

/// Canonical form of a username: trimmed and lowercased.
pub fn normalize_username(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Check a normalized username: 3-30 chars of `[a-z0-9_-]`, starting with a
/// letter or digit.
pub fn check_username(username: &str) -> Result<(), String> {
    let len = username.chars().count();
    if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
        return Err(format!(
            "Username must be between {USERNAME_MIN_LEN} and {USERNAME_MAX_LEN} characters"
        ));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
    {
        return Err(
            "Username may only contain lowercase letters, digits, '_' and '-'".to_string(),
        );
    }
    if !username
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric())
    {
        return Err("Username must start with a letter or digit".to_string());
    }
    Ok(())
}
