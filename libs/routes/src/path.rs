//! Route families, parsed routes, and the path codec.

use std::fmt;
use std::str::FromStr;

use permalink_slug::{EntityRef, SlugCodec};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::RouteError;

/// Path of the root collection.
pub const ROOT_COLLECTION_PATH: &str = "/collection/root";

/// Path of the page listing all personal collections.
pub const USERS_COLLECTION_PATH: &str = "/collection/users";

const ROOT_SEGMENT: &str = "root";
const USERS_SEGMENT: &str = "users";

/// A family of permalink routes sharing one path prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteFamily {
    Database,
    Dashboard,
    Question,
    Model,
    Collection,
}

impl RouteFamily {
    /// All route families, in matching order.
    pub const ALL: [RouteFamily; 5] = [
        RouteFamily::Database,
        RouteFamily::Dashboard,
        RouteFamily::Question,
        RouteFamily::Model,
        RouteFamily::Collection,
    ];

    /// Returns the path prefix, without a trailing slash.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            RouteFamily::Database => "/browse/databases",
            RouteFamily::Dashboard => "/dashboard",
            RouteFamily::Question => "/question",
            RouteFamily::Model => "/model",
            RouteFamily::Collection => "/collection",
        }
    }

    /// Returns the lowercase name of the family.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            RouteFamily::Database => "database",
            RouteFamily::Dashboard => "dashboard",
            RouteFamily::Question => "question",
            RouteFamily::Model => "model",
            RouteFamily::Collection => "collection",
        }
    }
}

impl fmt::Display for RouteFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteFamily::ALL
            .into_iter()
            .find(|family| family.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown route family '{s}' (expected database, dashboard, question, model, or collection)"
                )
            })
    }
}

/// Target of a database browse route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseTarget {
    /// The saved-questions virtual database.
    SavedQuestions,
    /// A connected database.
    Id(i64),
}

/// Target of a collection route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionTarget {
    /// `/collection/root`
    Root,
    /// `/collection/users`
    Users,
    /// A regular or personal collection.
    Id(i64),
}

/// A parsed permalink path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Database(DatabaseTarget),
    Dashboard(i64),
    Question(i64),
    Model(i64),
    Collection(CollectionTarget),
}

impl Route {
    /// Returns the route family.
    #[must_use]
    pub const fn family(&self) -> RouteFamily {
        match self {
            Route::Database(_) => RouteFamily::Database,
            Route::Dashboard(_) => RouteFamily::Dashboard,
            Route::Question(_) => RouteFamily::Question,
            Route::Model(_) => RouteFamily::Model,
            Route::Collection(_) => RouteFamily::Collection,
        }
    }

    /// Returns the id of the entity this route points at.
    ///
    /// `None` for literal collection routes and the virtual database, which
    /// need no lookup.
    #[must_use]
    pub const fn entity_id(&self) -> Option<i64> {
        match self {
            Route::Database(DatabaseTarget::Id(id))
            | Route::Dashboard(id)
            | Route::Question(id)
            | Route::Model(id)
            | Route::Collection(CollectionTarget::Id(id)) => Some(*id),
            Route::Database(DatabaseTarget::SavedQuestions)
            | Route::Collection(CollectionTarget::Root | CollectionTarget::Users) => None,
        }
    }
}

/// Builds and parses permalink paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteCodec {
    slug: SlugCodec,
}

impl RouteCodec {
    /// Creates a route codec on top of a slug codec.
    #[must_use]
    pub const fn new(slug: SlugCodec) -> Self {
        Self { slug }
    }

    /// Returns the underlying slug codec.
    #[must_use]
    pub const fn slug_codec(&self) -> &SlugCodec {
        &self.slug
    }

    /// Builds the canonical path for an entity in a route family.
    #[must_use]
    pub fn path(&self, family: RouteFamily, entity: &EntityRef) -> String {
        format!("{}/{}", family.prefix(), self.slug.encode(entity))
    }

    /// Builds a collection path, falling back to the root collection.
    #[must_use]
    pub fn collection_path(&self, collection: Option<&EntityRef>) -> String {
        match collection {
            Some(entity) => self.path(RouteFamily::Collection, entity),
            None => ROOT_COLLECTION_PATH.to_string(),
        }
    }

    /// Parses a path into a route.
    ///
    /// One trailing slash is tolerated. Literal collection segments are
    /// matched before the segment is decoded. A database segment whose id is
    /// the configured virtual id is the saved-questions database, whatever
    /// its label.
    pub fn parse(&self, path: &str) -> Result<Route, RouteError> {
        let trimmed = path.strip_suffix('/').unwrap_or(path);

        let (family, segment) = RouteFamily::ALL
            .into_iter()
            .find_map(|family| {
                let rest = trimmed.strip_prefix(family.prefix())?;
                if rest.is_empty() {
                    Some((family, rest))
                } else {
                    rest.strip_prefix('/').map(|segment| (family, segment))
                }
            })
            .ok_or_else(|| RouteError::UnknownRoute {
                path: path.to_string(),
            })?;

        if segment.is_empty() {
            return Err(RouteError::MissingSegment {
                path: path.to_string(),
            });
        }
        if segment.contains('/') {
            return Err(RouteError::UnexpectedSegments {
                path: path.to_string(),
            });
        }

        let route = match family {
            RouteFamily::Collection if segment == ROOT_SEGMENT => {
                Route::Collection(CollectionTarget::Root)
            }
            RouteFamily::Collection if segment == USERS_SEGMENT => {
                Route::Collection(CollectionTarget::Users)
            }
            family => {
                let id = self.decode(path, segment)?;
                match family {
                    RouteFamily::Database if id == self.slug.saved_questions_db_id() => {
                        Route::Database(DatabaseTarget::SavedQuestions)
                    }
                    RouteFamily::Database => Route::Database(DatabaseTarget::Id(id)),
                    RouteFamily::Dashboard => Route::Dashboard(id),
                    RouteFamily::Question => Route::Question(id),
                    RouteFamily::Model => Route::Model(id),
                    RouteFamily::Collection => Route::Collection(CollectionTarget::Id(id)),
                }
            }
        };

        debug!(path, ?route, "parsed permalink path");
        Ok(route)
    }

    fn decode(&self, path: &str, segment: &str) -> Result<i64, RouteError> {
        self.slug
            .decode(segment)
            .map_err(|source| RouteError::Slug {
                path: path.to_string(),
                source,
            })
    }
}
