//! # permalink-slug
//!
//! Slug encoding and id decoding for entity permalinks.
//!
//! ## Design Principles
//!
//! - The numeric id is the only authoritative identifier; the slug is decoration
//! - Slugs are always recomputed from the current name, never stored
//! - Decoding ignores the trailing label, so renamed entities keep their links
//! - Both operations are pure: no I/O, no shared state
//!
//! ## Segment Format
//!
//! A permalink segment is `{id}-{slug}`, or just `{id}` when the name has no
//! alphanumeric content.
//!
//! Examples:
//! - `3-orders-in-a-dashboard`
//! - `1-bobby-tables-s-personal-collection`
//! - `-1337-saved-questions` (the virtual saved-questions database)

mod codec;
mod entity;
mod error;

pub use codec::{
    slugify, CodecConfig, SlugCodec, SAVED_QUESTIONS_SLUG, SAVED_QUESTIONS_VIRTUAL_DB_ID,
};
pub use entity::EntityRef;
pub use error::SlugError;
