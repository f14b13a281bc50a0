//! Handlers for public archive pages, addressed by username.
//!
//! Every read here goes through the visibility policy with the caller's
//! principal, so the same URL serves the owner their full archive and
//! everyone else the public view.

use archiveand_core::aggregation::{
    count_by_type, group_by_month, group_by_type, most_recent, MonthBucket, TypeCounts,
};
use archiveand_core::error::CoreError;
use archiveand_core::media::MediaType;
use archiveand_core::ownership::{is_owner, Principal};
use archiveand_core::types::DbId;
use archiveand_core::visibility::visible_records;
use archiveand_db::models::media_record::{MediaRecord, MediaRecordFilter, MediaRecordView};
use archiveand_db::models::user_site::{SiteView, UserSite};
use archiveand_db::repositories::{MediaRecordRepo, UserSiteRepo};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::AppPath;
use crate::handlers::record_views;
use crate::middleware::auth::MaybePrincipal;
use crate::query::{ListMediaParams, Scope};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A public site page.
#[derive(Debug, Serialize)]
pub struct SitePage {
    pub site: SiteView,
    pub is_owner: bool,
    pub counts: TypeCounts,
    pub records: Vec<MediaRecordView>,
}

/// One media-type section of an archive page.
#[derive(Debug, Serialize)]
pub struct TypeSection {
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub label: &'static str,
    pub creator_label: &'static str,
    /// The most recently added item, highlighted at the top of the section.
    pub most_recent_id: Option<DbId>,
    pub items: Vec<MediaRecordView>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_site(state: &AppState, username: &str) -> AppResult<UserSite> {
    let site = UserSiteRepo::find_by_username(&state.pool, username)
        .await?
        .ok_or_else(|| CoreError::not_found("UserSite", username))?;
    Ok(site)
}

/// Load a site's records and filter them for `principal`, newest first.
async fn visible_archive(
    state: &AppState,
    site: &UserSite,
    principal: &Principal,
    filter: MediaRecordFilter,
) -> AppResult<Vec<MediaRecord>> {
    let records = MediaRecordRepo::list_by_owner(&state.pool, site.user_id, filter).await?;
    Ok(visible_records(principal, records))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/sites/{username}
///
/// Site settings plus every record the caller may see.
pub async fn get_site_page(
    MaybePrincipal(principal): MaybePrincipal,
    State(state): State<AppState>,
    AppPath(username): AppPath<String>,
) -> AppResult<impl IntoResponse> {
    let site = find_site(&state, &username).await?;
    let records =
        visible_archive(&state, &site, &principal, MediaRecordFilter::default()).await?;

    Ok(Json(DataResponse {
        data: SitePage {
            site: SiteView::from(&site),
            is_owner: is_owner(&principal, &site),
            counts: count_by_type(&records),
            records: record_views(records),
        },
    }))
}

/// GET /api/v1/sites/{username}/media?type=&scope=
///
/// Visible records, optionally narrowed to one type. `scope=public` shows the
/// owner what visitors see; it can never widen what the caller may see.
pub async fn list_site_media(
    MaybePrincipal(principal): MaybePrincipal,
    State(state): State<AppState>,
    AppPath(username): AppPath<String>,
    Query(params): Query<ListMediaParams>,
) -> AppResult<impl IntoResponse> {
    let filter = MediaRecordFilter {
        media_type: params.type_filter()?,
    };
    let viewer = match params.scope {
        Scope::Owner => principal,
        Scope::Public => Principal::Anonymous,
    };

    let site = find_site(&state, &username).await?;
    let records = visible_archive(&state, &site, &viewer, filter).await?;

    Ok(Json(DataResponse {
        data: record_views(records),
    }))
}

/// GET /api/v1/sites/{username}/timeline
///
/// Visible records bucketed by month, most recent month first.
pub async fn get_timeline(
    MaybePrincipal(principal): MaybePrincipal,
    State(state): State<AppState>,
    AppPath(username): AppPath<String>,
) -> AppResult<impl IntoResponse> {
    let site = find_site(&state, &username).await?;
    let records =
        visible_archive(&state, &site, &principal, MediaRecordFilter::default()).await?;

    let timeline: Vec<MonthBucket<MediaRecordView>> = group_by_month(records)
        .into_iter()
        .map(|bucket| MonthBucket {
            label: bucket.label,
            year: bucket.year,
            month: bucket.month,
            items: record_views(bucket.items),
        })
        .collect();

    Ok(Json(DataResponse { data: timeline }))
}

/// GET /api/v1/sites/{username}/sections
///
/// Visible records grouped by media type. Every type is present, in a fixed
/// order, even when empty.
pub async fn get_sections(
    MaybePrincipal(principal): MaybePrincipal,
    State(state): State<AppState>,
    AppPath(username): AppPath<String>,
) -> AppResult<impl IntoResponse> {
    let site = find_site(&state, &username).await?;
    let records =
        visible_archive(&state, &site, &principal, MediaRecordFilter::default()).await?;

    let sections: Vec<TypeSection> = group_by_type(records)
        .into_iter()
        .map(|(media_type, items)| TypeSection {
            media_type,
            label: media_type.label(),
            creator_label: media_type.creator_label(),
            most_recent_id: most_recent(&items).map(|r| r.id),
            items: record_views(items),
        })
        .collect();

    Ok(Json(DataResponse { data: sections }))
}
