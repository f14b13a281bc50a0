//! Request extractors that resolve the calling [`Principal`](archiveand_core::ownership::Principal).
//!
//! - [`auth::AuthUser`] -- requires a valid bearer token (401 otherwise).
//! - [`auth::MaybePrincipal`] -- anonymous unless a valid bearer token is present.

pub mod auth;
