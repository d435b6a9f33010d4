//! Typed references to the entities a permalink can point at.

use serde::{Deserialize, Serialize};

/// What the codec needs to know about an entity to build its segment.
///
/// Serialized with a `kind` tag:
///
/// ```json
/// {"kind": "entity", "id": 3, "name": "Orders in a dashboard"}
/// {"kind": "personal_collection", "id": 1, "first_name": "Bobby", "last_name": "Tables"}
/// {"kind": "saved_questions", "labeled": true}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityRef {
    /// A database, dashboard, question, model, or regular collection.
    Entity { id: i64, name: String },

    /// A user's personal collection, labeled from the owner's name.
    PersonalCollection {
        id: i64,
        first_name: String,
        last_name: String,
    },

    /// The virtual database aggregating all saved questions.
    ///
    /// Its id comes from the codec configuration. `labeled` selects between
    /// the bare `{id}` and the `{id}-saved-questions` forms.
    SavedQuestions {
        #[serde(default)]
        labeled: bool,
    },
}

impl EntityRef {
    /// Creates a standard entity reference.
    pub fn entity(id: i64, name: impl Into<String>) -> Self {
        Self::Entity {
            id,
            name: name.into(),
        }
    }

    /// Creates a personal collection reference.
    pub fn personal_collection(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self::PersonalCollection {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Creates a saved-questions virtual database reference.
    #[must_use]
    pub const fn saved_questions(labeled: bool) -> Self {
        Self::SavedQuestions { labeled }
    }

    /// Returns the id carried by this reference.
    ///
    /// `None` for the virtual database, whose id is configuration.
    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        match self {
            Self::Entity { id, .. } | Self::PersonalCollection { id, .. } => Some(*id),
            Self::SavedQuestions { .. } => None,
        }
    }

    /// Returns true for a personal collection reference.
    #[must_use]
    pub const fn is_personal_collection(&self) -> bool {
        matches!(self, Self::PersonalCollection { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_json_shape() {
        let entity = EntityRef::entity(3, "Orders in a dashboard");
        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "entity", "id": 3, "name": "Orders in a dashboard"})
        );
    }

    #[test]
    fn test_personal_collection_json_roundtrip() {
        let entity = EntityRef::personal_collection(1, "Bobby", "Tables");
        let json = serde_json::to_string(&entity).unwrap();
        let parsed: EntityRef = serde_json::from_str(&json).unwrap();
        assert_eq!(entity, parsed);
    }

    #[test]
    fn test_saved_questions_labeled_defaults_to_false() {
        let parsed: EntityRef = serde_json::from_str(r#"{"kind": "saved_questions"}"#).unwrap();
        assert_eq!(parsed, EntityRef::saved_questions(false));
        assert_eq!(parsed.id(), None);
    }

    #[test]
    fn test_id_accessor() {
        assert_eq!(EntityRef::entity(9, "x").id(), Some(9));
        assert_eq!(EntityRef::personal_collection(4, "a", "b").id(), Some(4));
        assert!(EntityRef::personal_collection(4, "a", "b").is_personal_collection());
        assert!(!EntityRef::entity(9, "x").is_personal_collection());
    }
}
