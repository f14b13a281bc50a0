//! Field validators plugged into `#[derive(validator::Validate)]` input DTOs.
//!
//! Each function checks one field and reports a stable error code plus a
//! human-readable message; [`CoreError`](crate::error::CoreError) collects
//! the failing field names from the resulting `ValidationErrors`.

use std::borrow::Cow;

use validator::ValidationError;

use crate::media::MediaType;
use crate::site::{check_username, normalize_username, ColorTheme};

fn error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Titles must contain something other than whitespace.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(error("required", "Title is required"));
    }
    Ok(())
}

/// Media type must be one of the closed set.
pub fn validate_media_type(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("required", "Type is required"));
    }
    if MediaType::parse(value).is_none() {
        return Err(error(
            "unknown_type",
            "Type must be one of book, music, tv_film, other",
        ));
    }
    Ok(())
}

/// Username is checked in its normalized (trimmed, lowercase) form.
pub fn validate_username(value: &str) -> Result<(), ValidationError> {
    check_username(&normalize_username(value)).map_err(|msg| error("username", msg))
}

/// The stored rating for `value`, if it is a whole number from 1 to 5.
pub fn rating_value(value: &serde_json::Number) -> Option<i16> {
    value
        .as_i64()
        .and_then(|n| i16::try_from(n).ok())
        .filter(|n| (1..=5).contains(n))
}

/// Ratings arrive as any JSON number so that 70000 or 4.5 are reported here
/// instead of failing body parsing.
pub fn validate_rating(value: &serde_json::Number) -> Result<(), ValidationError> {
    match rating_value(value) {
        Some(_) => Ok(()),
        None => Err(error("range", "Rating must be a whole number between 1 and 5")),
    }
}

pub fn validate_color_theme(value: &str) -> Result<(), ValidationError> {
    if ColorTheme::parse_choice(value).is_none() {
        return Err(error("unknown_theme", "Unknown color theme"));
    }
    Ok(())
}
