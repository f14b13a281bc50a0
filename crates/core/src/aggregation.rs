//! View-ready groupings of an already visibility-filtered record list.
//!
//! All functions are pure and preserve the input order inside each group, so
//! feeding them the newest-first output of
//! [`visible_records`](crate::visibility::visible_records) yields
//! newest-first groups.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::Serialize;

use crate::media::MediaType;
use crate::visibility::ArchiveEntry;

/// Partition records by media type. Every type has an entry, possibly empty.
pub fn group_by_type<T: ArchiveEntry>(records: Vec<T>) -> BTreeMap<MediaType, Vec<T>> {
    let mut groups: BTreeMap<MediaType, Vec<T>> =
        MediaType::ALL.into_iter().map(|t| (t, Vec::new())).collect();
    for record in records {
        groups.entry(record.media_type()).or_default().push(record);
    }
    groups
}

/// One calendar month of the archive timeline.
#[derive(Debug, Clone, Serialize)]
pub struct MonthBucket<T> {
    /// English "Month YYYY" label, e.g. `"March 2024"`.
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub items: Vec<T>,
}

/// Bucket records by the UTC calendar month of `added_date`.
///
/// Buckets appear in order of first occurrence in the input, which for
/// newest-first input means the most recent month comes first.
pub fn group_by_month<T: ArchiveEntry>(records: Vec<T>) -> Vec<MonthBucket<T>> {
    let mut buckets: Vec<MonthBucket<T>> = Vec::new();
    for record in records {
        let added = record.added_date();
        let (year, month) = (added.year(), added.month());
        match buckets
            .iter_mut()
            .find(|b| b.year == year && b.month == month)
        {
            Some(bucket) => bucket.items.push(record),
            None => buckets.push(MonthBucket {
                label: added.format("%B %Y").to_string(),
                year,
                month,
                items: vec![record],
            }),
        }
    }
    buckets
}

/// Per-type totals for the dashboard stat tiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TypeCounts {
    pub book: usize,
    pub music: usize,
    pub tv_film: usize,
    /// Catches `other` and anything outside the known set.
    pub other: usize,
}

impl TypeCounts {
    pub fn total(&self) -> usize {
        self.book + self.music + self.tv_film + self.other
    }
}

pub fn count_by_type<T: ArchiveEntry>(records: &[T]) -> TypeCounts {
    records
        .iter()
        .fold(TypeCounts::default(), |mut counts, r| {
            match r.media_type() {
                MediaType::Book => counts.book += 1,
                MediaType::Music => counts.music += 1,
                MediaType::TvFilm => counts.tv_film += 1,
                MediaType::Other => counts.other += 1,
            }
            counts
        })
}

/// The record with the greatest `added_date`, highlighted on type sections.
pub fn most_recent<T: ArchiveEntry>(records: &[T]) -> Option<&T> {
    records
        .iter()
        .max_by_key(|r| (r.added_date(), r.entry_id()))
}
