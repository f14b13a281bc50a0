//! Repository for the `media_records` table.

use archiveand_core::completion::Completion;
use archiveand_core::media::MediaType;
use archiveand_core::types::{DbId, Timestamp, UserId};
use archiveand_core::validation::rating_value;
use chrono::Utc;
use sqlx::PgPool;

use crate::models::media_record::{
    CreateMediaRecord, MediaRecord, MediaRecordFilter, UpdateMediaRecord,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, media_type, title, author_artist, rating, review, notes, \
     notes_public, completed, completed_date, is_public, added_date, created_at, updated_at";

/// Provides owner-scoped CRUD operations for media records.
pub struct MediaRecordRepo;

impl MediaRecordRepo {
    /// Insert a new record owned by `owner_id`, returning the created row.
    ///
    /// `completed_date` is derived from `completed`; visibility flags default
    /// to public when omitted.
    pub async fn create(
        pool: &PgPool,
        owner_id: UserId,
        input: &CreateMediaRecord,
    ) -> Result<MediaRecord, sqlx::Error> {
        let media_type = MediaType::from_stored(input.media_type.as_deref().unwrap_or_default());
        let completion = Completion::initial(input.completed.unwrap_or(false), Utc::now());

        let query = format!(
            "INSERT INTO media_records
                (owner_id, media_type, title, author_artist, rating, review, notes,
                 notes_public, completed, completed_date, is_public)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, true), $9, $10, COALESCE($11, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MediaRecord>(&query)
            .bind(owner_id)
            .bind(media_type.as_str())
            .bind(input.title.as_deref().unwrap_or_default().trim())
            .bind(&input.author_artist)
            .bind(input.rating.as_ref().and_then(rating_value))
            .bind(&input.review)
            .bind(&input.notes)
            .bind(input.notes_public)
            .bind(completion.completed)
            .bind(completion.completed_date)
            .bind(input.is_public)
            .fetch_one(pool)
            .await
    }

    /// Find a record by its ID, regardless of owner. Visibility is applied
    /// by the caller.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MediaRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media_records WHERE id = $1");
        sqlx::query_as::<_, MediaRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every record owned by `owner_id`, newest first.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: UserId,
        filter: MediaRecordFilter,
    ) -> Result<Vec<MediaRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM media_records
             WHERE owner_id = $1 AND ($2::TEXT IS NULL OR media_type = $2)
             ORDER BY added_date DESC, id DESC"
        );
        sqlx::query_as::<_, MediaRecord>(&query)
            .bind(owner_id)
            .bind(filter.media_type.map(MediaType::as_str))
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update to a record owned by `owner_id`. Only non-`None`
    /// fields in `input` are applied.
    ///
    /// The row is locked while the completion transition is computed so
    /// concurrent toggles cannot interleave. Returns `None` if no row with
    /// the given `id` belongs to `owner_id`.
    pub async fn update_owned(
        pool: &PgPool,
        id: DbId,
        owner_id: UserId,
        input: &UpdateMediaRecord,
    ) -> Result<Option<MediaRecord>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let current: Option<(bool, Option<Timestamp>)> = sqlx::query_as(
            "SELECT completed, completed_date FROM media_records
             WHERE id = $1 AND owner_id = $2
             FOR UPDATE",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((completed, completed_date)) = current else {
            return Ok(None);
        };

        let stored = Completion::from_stored(completed, completed_date);
        let completion = match input.completed {
            Some(requested) => stored.set(requested, Utc::now()),
            None => stored,
        };

        let media_type = input
            .media_type
            .as_deref()
            .map(|t| MediaType::from_stored(t).as_str());

        let query = format!(
            "UPDATE media_records SET
                media_type = COALESCE($3, media_type),
                title = COALESCE($4, title),
                author_artist = COALESCE($5, author_artist),
                rating = COALESCE($6, rating),
                review = COALESCE($7, review),
                notes = COALESCE($8, notes),
                notes_public = COALESCE($9, notes_public),
                is_public = COALESCE($10, is_public),
                completed = $11,
                completed_date = $12
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        let record = sqlx::query_as::<_, MediaRecord>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(media_type)
            .bind(input.title.as_deref().map(str::trim))
            .bind(&input.author_artist)
            .bind(input.rating.as_ref().and_then(rating_value))
            .bind(&input.review)
            .bind(&input.notes)
            .bind(input.notes_public)
            .bind(input.is_public)
            .bind(completion.completed)
            .bind(completion.completed_date)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(record))
    }
}
