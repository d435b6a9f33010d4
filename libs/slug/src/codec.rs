//! Encoding entity references to path segments and decoding ids back out.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{EntityRef, SlugError};

/// Id of the virtual database that aggregates all saved questions.
pub const SAVED_QUESTIONS_VIRTUAL_DB_ID: i64 = -1337;

/// Label appended to the labeled form of the virtual database segment.
pub const SAVED_QUESTIONS_SLUG: &str = "saved-questions";

/// Suffix shared by every personal collection name.
const PERSONAL_COLLECTION_SUFFIX: &str = "'s Personal Collection";

/// Codec configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Id reserved for the saved-questions virtual database.
    #[serde(default = "default_saved_questions_db_id")]
    pub saved_questions_db_id: i64,
}

fn default_saved_questions_db_id() -> i64 {
    SAVED_QUESTIONS_VIRTUAL_DB_ID
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            saved_questions_db_id: SAVED_QUESTIONS_VIRTUAL_DB_ID,
        }
    }
}

/// Normalizes a display name into a slug.
///
/// Lowercases (Unicode, locale independent), then turns every run of
/// non-alphanumeric characters into one hyphen and trims hyphens from both
/// ends. Marks produced by lowercasing count as separators. Returns an empty
/// string when the name has no alphanumeric content.
///
/// ```
/// assert_eq!(permalink_slug::slugify("Orders in a dashboard"), "orders-in-a-dashboard");
/// assert_eq!(permalink_slug::slugify("  --!!--  "), "");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Bidirectional mapping between entity references and path segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlugCodec {
    config: CodecConfig,
}

impl SlugCodec {
    /// Creates a codec with the given configuration.
    #[must_use]
    pub const fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Returns the codec configuration.
    #[must_use]
    pub const fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Returns the id of the saved-questions virtual database.
    #[must_use]
    pub const fn saved_questions_db_id(&self) -> i64 {
        self.config.saved_questions_db_id
    }

    /// Encodes an entity reference as a path segment.
    ///
    /// Never fails; a name without alphanumeric content yields the bare id.
    #[must_use]
    pub fn encode(&self, entity: &EntityRef) -> String {
        match entity {
            EntityRef::Entity { id, name } => join(*id, &slugify(name)),
            EntityRef::PersonalCollection {
                id,
                first_name,
                last_name,
            } => {
                let name = format!("{first_name} {last_name}{PERSONAL_COLLECTION_SUFFIX}");
                join(*id, &slugify(&name))
            }
            EntityRef::SavedQuestions { labeled: true } => {
                join(self.saved_questions_db_id(), SAVED_QUESTIONS_SLUG)
            }
            EntityRef::SavedQuestions { labeled: false } => self.saved_questions_db_id().to_string(),
        }
    }

    /// Decodes the entity id from a path segment.
    ///
    /// The label after the id is ignored, so absent, current, and stale
    /// labels all resolve to the same id. The virtual database forms are
    /// matched before numeric parsing, which lets a negative sentinel
    /// round-trip.
    pub fn decode(&self, segment: &str) -> Result<i64, SlugError> {
        if segment.is_empty() {
            return Err(SlugError::Empty);
        }

        if self.is_saved_questions(segment) {
            return Ok(self.saved_questions_db_id());
        }

        let digits_end = segment
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(segment.len());

        if digits_end == 0 {
            debug!(segment, "slug segment has no leading id");
            return Err(SlugError::InvalidSlug {
                segment: segment.to_string(),
            });
        }

        segment[..digits_end]
            .parse::<i64>()
            .map_err(|_| SlugError::IdOutOfRange {
                segment: segment.to_string(),
            })
    }

    /// Returns true if the segment names the saved-questions virtual database.
    #[must_use]
    pub fn is_saved_questions(&self, segment: &str) -> bool {
        let id = self.saved_questions_db_id().to_string();
        match segment.strip_prefix(id.as_str()) {
            Some("") => true,
            Some(rest) => rest.strip_prefix('-') == Some(SAVED_QUESTIONS_SLUG),
            None => false,
        }
    }
}

fn join(id: i64, slug: &str) -> String {
    if slug.is_empty() {
        id.to_string()
    } else {
        format!("{id}-{slug}")
    }
}
