//! Entity lookup seam used during resolution.

use std::collections::HashMap;

use permalink_slug::EntityRef;
use serde::{Deserialize, Serialize};

use crate::RouteFamily;

/// Resolves an id in a route family to the entity's current state.
///
/// Implemented by whatever owns entity data (an API client, a cache, a
/// fixture). Resolution only reads through this trait.
pub trait EntityLookup {
    /// Returns the entity, or `None` if no such entity exists.
    fn lookup(&self, family: RouteFamily, id: i64) -> Option<EntityRef>;
}

impl<L: EntityLookup + ?Sized> EntityLookup for &L {
    fn lookup(&self, family: RouteFamily, id: i64) -> Option<EntityRef> {
        (**self).lookup(family, id)
    }
}

/// One entry of an entity catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub family: RouteFamily,
    pub entity: EntityRef,
}

/// In-memory entity lookup keyed by family and id.
#[derive(Debug, Clone, Default)]
pub struct StaticLookup {
    entities: HashMap<(RouteFamily, i64), EntityRef>,
}

impl StaticLookup {
    /// Creates an empty lookup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an entity.
    ///
    /// Returns false for references without an id (the virtual database),
    /// which are never looked up.
    pub fn insert(&mut self, family: RouteFamily, entity: EntityRef) -> bool {
        match entity.id() {
            Some(id) => {
                self.entities.insert((family, id), entity);
                true
            }
            None => false,
        }
    }

    /// Returns the number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if the lookup holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl EntityLookup for StaticLookup {
    fn lookup(&self, family: RouteFamily, id: i64) -> Option<EntityRef> {
        self.entities.get(&(family, id)).cloned()
    }
}

impl FromIterator<CatalogEntry> for StaticLookup {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        let mut lookup = Self::new();
        for entry in iter {
            lookup.insert(entry.family, entry.entity);
        }
        lookup
    }
}
