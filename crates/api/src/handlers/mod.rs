//! Request handlers.
//!
//! Handlers resolve the caller's principal, delegate storage to the
//! repositories in `archiveand_db`, apply the visibility and aggregation
//! policies from `archiveand_core`, and map errors via [`AppError`](crate::error::AppError).

pub mod media;
pub mod sites;
pub mod user_site;

use archiveand_db::models::media_record::{MediaRecord, MediaRecordView};

/// Attach display labels to already-filtered records.
pub(crate) fn record_views(records: Vec<MediaRecord>) -> Vec<MediaRecordView> {
    records.into_iter().map(MediaRecordView::from).collect()
}
