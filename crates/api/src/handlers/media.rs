//! Handlers for individual media records.

use archiveand_core::error::CoreError;
use archiveand_core::ownership::{ensure_owner, not_owner};
use archiveand_core::types::DbId;
use archiveand_core::visibility::view_record;
use archiveand_db::models::media_record::{CreateMediaRecord, MediaRecordView, UpdateMediaRecord};
use archiveand_db::repositories::{MediaRecordRepo, UserSiteRepo};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::{AuthUser, MaybePrincipal};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/media
///
/// Create a record owned by the caller. The caller must have a site first.
pub async fn create_media(
    user: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMediaRecord>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    if UserSiteRepo::find_by_user_id(&state.pool, user.user_id)
        .await?
        .is_none()
    {
        return Err(CoreError::Conflict("Create your site before adding media".into()).into());
    }

    let record = MediaRecordRepo::create(&state.pool, user.user_id, &input).await?;

    tracing::info!(
        user_id = %user.user_id,
        media_id = record.id,
        media_type = %record.media_type,
        "Media record created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: MediaRecordView::from(record),
        }),
    ))
}

/// GET /api/v1/media/{id}
///
/// A single record as the caller may see it. Records hidden from the caller
/// read as 404, the same as missing ones.
pub async fn get_media(
    MaybePrincipal(principal): MaybePrincipal,
    State(state): State<AppState>,
    AppPath(media_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let record = MediaRecordRepo::find_by_id(&state.pool, media_id)
        .await?
        .and_then(|r| view_record(&principal, r))
        .ok_or_else(|| CoreError::not_found("MediaRecord", media_id))?;

    Ok(Json(DataResponse {
        data: MediaRecordView::from(record),
    }))
}

/// PUT /api/v1/media/{id}
///
/// Partially update a record the caller owns. Answers 403 when the record is
/// missing or belongs to someone else.
pub async fn update_media(
    user: AuthUser,
    State(state): State<AppState>,
    AppPath(media_id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateMediaRecord>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let existing = MediaRecordRepo::find_by_id(&state.pool, media_id)
        .await?
        .ok_or_else(not_owner)?;
    ensure_owner(&user.principal(), &existing)?;

    let record = MediaRecordRepo::update_owned(&state.pool, media_id, user.user_id, &input)
        .await?
        .ok_or_else(not_owner)?;

    tracing::info!(
        user_id = %user.user_id,
        media_id = record.id,
        completed = record.completed,
        "Media record updated",
    );

    Ok(Json(DataResponse {
        data: MediaRecordView::from(record),
    }))
}
