//! Query parameter types for API handlers.

use archiveand_core::error::CoreError;
use archiveand_core::media::MediaType;
use serde::Deserialize;

/// Which view of a site's records the caller asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Everything the caller may see. Owners get their full archive.
    #[default]
    Owner,
    /// Only what an anonymous visitor would see.
    Public,
}

/// Parameters for `GET /sites/{username}/media` (`?type=&scope=`).
#[derive(Debug, Default, Deserialize)]
pub struct ListMediaParams {
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    #[serde(default)]
    pub scope: Scope,
}

impl ListMediaParams {
    /// Parse the `type` filter. Unknown values are a validation error on `type`.
    pub fn type_filter(&self) -> Result<Option<MediaType>, CoreError> {
        match self.media_type.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => MediaType::parse(value).map(Some).ok_or_else(|| {
                CoreError::invalid_field("type", format!("Unknown media type: {value}"))
            }),
        }
    }
}
