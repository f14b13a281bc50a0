//! Media record entity model and DTOs.

use archiveand_core::media::MediaType;
use archiveand_core::ownership::Owned;
use archiveand_core::types::{DbId, Timestamp, UserId};
use archiveand_core::visibility::ArchiveEntry;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `media_records` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MediaRecord {
    pub id: DbId,
    pub owner_id: UserId,
    #[serde(rename = "type")]
    pub media_type: String,
    pub title: String,
    pub author_artist: Option<String>,
    pub rating: Option<i16>,
    pub review: Option<String>,
    /// `None` when redacted for a non-owner viewer.
    pub notes: Option<String>,
    pub notes_public: bool,
    pub completed: bool,
    pub completed_date: Option<Timestamp>,
    pub is_public: bool,
    pub added_date: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl MediaRecord {
    /// The stored type, with unknown values folded into `other`.
    pub fn kind(&self) -> MediaType {
        MediaType::from_stored(&self.media_type)
    }
}

impl Owned for MediaRecord {
    fn owner_id(&self) -> UserId {
        self.owner_id
    }
}

impl ArchiveEntry for MediaRecord {
    fn entry_id(&self) -> DbId {
        self.id
    }

    fn media_type(&self) -> MediaType {
        self.kind()
    }

    fn added_date(&self) -> Timestamp {
        self.added_date
    }

    fn is_public(&self) -> bool {
        self.is_public
    }

    fn notes_public(&self) -> bool {
        self.notes_public
    }

    fn redact_notes(&mut self) {
        self.notes = None;
    }
}

/// A record as served to clients, with display labels for its type.
#[derive(Debug, Clone, Serialize)]
pub struct MediaRecordView {
    #[serde(flatten)]
    pub record: MediaRecord,
    pub type_label: &'static str,
    pub creator_label: &'static str,
}

impl From<MediaRecord> for MediaRecordView {
    fn from(record: MediaRecord) -> Self {
        let kind = record.kind();
        Self {
            record,
            type_label: kind.label(),
            creator_label: kind.creator_label(),
        }
    }
}

/// DTO for creating a media record. The owner comes from the authenticated
/// principal, never from the body.
///
/// `title`, `type` and `rating` are parsed loosely (missing, null, any
/// number) so bad values surface as validation errors naming the field
/// rather than body parse failures.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMediaRecord {
    #[serde(rename = "type")]
    #[validate(
        required(message = "Type is required"),
        custom(function = "archiveand_core::validation::validate_media_type")
    )]
    pub media_type: Option<String>,
    #[validate(
        required(message = "Title is required"),
        custom(function = "archiveand_core::validation::validate_title")
    )]
    pub title: Option<String>,
    pub author_artist: Option<String>,
    #[validate(custom(function = "archiveand_core::validation::validate_rating"))]
    pub rating: Option<serde_json::Number>,
    pub review: Option<String>,
    pub notes: Option<String>,
    /// Defaults to `true` if omitted.
    pub notes_public: Option<bool>,
    /// Defaults to `false` if omitted.
    pub completed: Option<bool>,
    /// Defaults to `true` if omitted.
    pub is_public: Option<bool>,
}

/// DTO for updating a media record. All fields are optional; absent fields
/// are left unchanged. A null `rating` leaves the stored one in place. `completed_date` is not accepted; it is derived from
/// `completed`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMediaRecord {
    #[serde(rename = "type")]
    #[validate(custom(function = "archiveand_core::validation::validate_media_type"))]
    pub media_type: Option<String>,
    #[validate(custom(function = "archiveand_core::validation::validate_title"))]
    pub title: Option<String>,
    pub author_artist: Option<String>,
    #[validate(custom(function = "archiveand_core::validation::validate_rating"))]
    pub rating: Option<serde_json::Number>,
    pub review: Option<String>,
    pub notes: Option<String>,
    pub notes_public: Option<bool>,
    pub completed: Option<bool>,
    pub is_public: Option<bool>,
}

/// Filters for listing a user's records.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaRecordFilter {
    pub media_type: Option<MediaType>,
}
