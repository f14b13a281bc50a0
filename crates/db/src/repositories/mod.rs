//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Every mutation is scoped by the
//! owner id passed in by the caller; a scoped write that matches nothing
//! returns `None`.

pub mod media_record_repo;
pub mod user_site_repo;

pub use media_record_repo::MediaRecordRepo;
pub use user_site_repo::UserSiteRepo;
