//! Handlers for the caller's own site: creation, settings and dashboard.

use archiveand_core::aggregation::{count_by_type, TypeCounts};
use archiveand_core::error::CoreError;
use archiveand_core::visibility::visible_records;
use archiveand_db::models::media_record::{MediaRecordFilter, MediaRecordView};
use archiveand_db::models::user_site::{CreateUserSite, SiteView, UpdateUserSite, UserSite};
use archiveand_db::repositories::{MediaRecordRepo, UserSiteRepo};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::handlers::record_views;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Owner dashboard payload.
#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub site: SiteView,
    pub counts: TypeCounts,
    pub total: usize,
    pub records: Vec<MediaRecordView>,
}

async fn own_site(state: &AppState, user: &AuthUser) -> AppResult<UserSite> {
    let site = UserSiteRepo::find_by_user_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("UserSite", user.user_id))?;
    Ok(site)
}

/// POST /api/v1/user/site
///
/// Claim a username and create the caller's site. 409 if the username is
/// taken or the caller already has a site.
pub async fn create_site(
    user: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateUserSite>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let site = UserSiteRepo::create(&state.pool, user.user_id, &input).await?;

    tracing::info!(
        user_id = %user.user_id,
        username = %site.username,
        color_theme = %site.color_theme,
        "User site created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SiteView::from(&site),
        }),
    ))
}

/// GET /api/v1/user/site
///
/// The caller's site with defaults applied. 404 if none has been created.
pub async fn get_site(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let site = own_site(&state, &user).await?;

    Ok(Json(DataResponse {
        data: SiteView::from(&site),
    }))
}

/// PUT /api/v1/user/site
///
/// Partially update the caller's site. Favorites are merged per field.
pub async fn update_site(
    user: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<UpdateUserSite>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let site = UserSiteRepo::update_owned(&state.pool, user.user_id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("UserSite", user.user_id))?;

    tracing::info!(
        user_id = %user.user_id,
        username = %site.username,
        "User site updated",
    );

    Ok(Json(DataResponse {
        data: SiteView::from(&site),
    }))
}

/// GET /api/v1/user/dashboard
///
/// The caller's site, per-type counts and every record they own, newest first.
pub async fn get_dashboard(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let site = own_site(&state, &user).await?;
    let records =
        MediaRecordRepo::list_by_owner(&state.pool, user.user_id, MediaRecordFilter::default())
            .await?;
    let records = visible_records(&user.principal(), records);
    let counts = count_by_type(&records);

    Ok(Json(DataResponse {
        data: DashboardData {
            site: SiteView::from(&site),
            total: counts.total(),
            counts,
            records: record_views(records),
        },
    }))
}
