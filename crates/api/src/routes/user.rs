//! Routes for the caller's own site, mounted at `/user`.

use axum::routing::get;
use axum::Router;

use crate::handlers::user_site;
use crate::state::AppState;

/// ```text
/// GET  /site       -> get_site
/// POST /site       -> create_site
/// PUT  /site       -> update_site
/// GET  /dashboard  -> get_dashboard
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/site",
            get(user_site::get_site)
                .post(user_site::create_site)
                .put(user_site::update_site),
        )
        .route("/dashboard", get(user_site::get_dashboard))
}
