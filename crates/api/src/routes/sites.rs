//! Routes for public archive pages, mounted at `/sites`.

use axum::routing::get;
use axum::Router;

use crate::handlers::sites;
use crate::state::AppState;

/// ```text
/// GET /{username}           -> get_site_page
/// GET /{username}/media     -> list_site_media
/// GET /{username}/timeline  -> get_timeline
/// GET /{username}/sections  -> get_sections
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{username}", get(sites::get_site_page))
        .route("/{username}/media", get(sites::list_site_media))
        .route("/{username}/timeline", get(sites::get_timeline))
        .route("/{username}/sections", get(sites::get_sections))
}
