//! Routes for media records, mounted at `/media`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// ```text
/// POST /      -> create_media
/// GET  /{id}  -> get_media
/// PUT  /{id}  -> update_media
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(media::create_media))
        .route("/{id}", get(media::get_media).put(media::update_media))
}
