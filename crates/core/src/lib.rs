//! Domain logic for the Archive& media catalogue.
//!
//! This crate has no database or HTTP dependencies. Records and sites are
//! passed in by the caller through the [`ownership::Owned`] and
//! [`visibility::ArchiveEntry`] traits, so every policy here can be unit
//! tested without Postgres or a real auth provider.

pub mod aggregation;
pub mod completion;
pub mod error;
pub mod media;
pub mod ownership;
pub mod site;
pub mod types;
pub mod validation;
pub mod visibility;
