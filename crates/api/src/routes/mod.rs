pub mod health;
pub mod media;
pub mod sites;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /user/site                                  get, create, update own site (auth)
/// /user/dashboard                             own site, counts and records (auth)
///
/// /media                                      create record (auth)
/// /media/{id}                                 get (optional auth), update (auth)
///
/// /sites/{username}                           site page (optional auth)
/// /sites/{username}/media                     list (?type=, ?scope=)
/// /sites/{username}/timeline                  month buckets
/// /sites/{username}/sections                  type sections
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/user", user::router())
        .nest("/media", media::router())
        .nest("/sites", sites::router())
}
