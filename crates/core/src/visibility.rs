//! Visibility policy: which records, and which fields of them, a principal
//! may see.
//!
//! - The owner sees every record, unfiltered.
//! - Anyone else sees only records with `is_public`, and never sees `notes`
//!   on a record whose `notes_public` is false.
//!
//! Ownership is checked per record, so a mixed input can never leak another
//! user's private rows to a principal that owns only some of them.

use std::cmp::Reverse;

use crate::media::MediaType;
use crate::ownership::{is_owner, Owned, Principal};
use crate::types::{DbId, Timestamp};

/// Read-side view of a media record as needed by the policies in this crate.
pub trait ArchiveEntry: Owned {
    fn entry_id(&self) -> DbId;
    fn media_type(&self) -> MediaType;
    fn added_date(&self) -> Timestamp;
    fn is_public(&self) -> bool;
    fn notes_public(&self) -> bool;
    /// Drop the notes from this copy of the record.
    fn redact_notes(&mut self);
}

/// Which branch of the policy applies to a principal for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerRole {
    Owner,
    Public,
}

impl ViewerRole {
    pub fn of<E: Owned + ?Sized>(principal: &Principal, entity: &E) -> Self {
        if is_owner(principal, entity) {
            ViewerRole::Owner
        } else {
            ViewerRole::Public
        }
    }
}

/// Apply the policy to a single record. `None` means the principal may not
/// see it at all.
pub fn view_record<T: ArchiveEntry>(principal: &Principal, mut record: T) -> Option<T> {
    match ViewerRole::of(principal, &record) {
        ViewerRole::Owner => Some(record),
        ViewerRole::Public => {
            if !record.is_public() {
                return None;
            }
            if !record.notes_public() {
                record.redact_notes();
            }
            Some(record)
        }
    }
}

/// Filter `records` down to what `principal` may see, newest `added_date`
/// first. Ties are broken by descending id so the order is deterministic.
pub fn visible_records<T: ArchiveEntry>(principal: &Principal, records: Vec<T>) -> Vec<T> {
    let mut visible: Vec<T> = records
        .into_iter()
        .filter_map(|r| view_record(principal, r))
        .collect();
    sort_newest_first(&mut visible);
    visible
}

/// Order records newest `added_date` first, then by descending id.
pub fn sort_newest_first<T: ArchiveEntry>(records: &mut [T]) {
    records.sort_by_key(|r| Reverse((r.added_date(), r.entry_id())));
}
