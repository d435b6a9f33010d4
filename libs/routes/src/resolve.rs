//! Canonical path resolution.

use permalink_slug::EntityRef;
use serde::Serialize;
use tracing::debug;

use crate::{DatabaseTarget, EntityLookup, Route, RouteCodec, RouteError, RouteFamily};

/// Outcome of resolving an incoming path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Resolution {
    /// The path is already canonical.
    Canonical { route: Route },
    /// The path names an existing entity but its label is stale, missing, or
    /// otherwise not canonical.
    Redirect { route: Route, to: String },
}

impl Resolution {
    /// Returns the resolved route.
    #[must_use]
    pub const fn route(&self) -> &Route {
        match self {
            Resolution::Canonical { route } | Resolution::Redirect { route, .. } => route,
        }
    }

    /// Returns the redirect target, if any.
    #[must_use]
    pub fn redirect_to(&self) -> Option<&str> {
        match self {
            Resolution::Canonical { .. } => None,
            Resolution::Redirect { to, .. } => Some(to),
        }
    }
}

impl RouteCodec {
    /// Resolves a path against current entity state.
    ///
    /// Literal collection routes are canonical as given, as are the bare and
    /// labeled virtual database paths. Any other path is looked up by id; the label never affects
    /// which entity is found.
    pub fn resolve<L: EntityLookup + ?Sized>(
        &self,
        path: &str,
        lookup: &L,
    ) -> Result<Resolution, RouteError> {
        let route = self.parse(path)?;

        if route == Route::Database(DatabaseTarget::SavedQuestions) {
            return Ok(self.resolve_saved_questions(path, route));
        }

        let Some(id) = route.entity_id() else {
            return Ok(Resolution::Canonical { route });
        };

        let family = route.family();
        let entity = lookup
            .lookup(family, id)
            .ok_or(RouteError::NotFound { family, id })?;

        let canonical = self.path(family, &entity);
        if canonical == path {
            return Ok(Resolution::Canonical { route });
        }

        debug!(path, to = %canonical, "redirecting to canonical permalink");
        Ok(Resolution::Redirect {
            route,
            to: canonical,
        })
    }

    /// Both the bare and the labeled virtual database paths are canonical.
    /// Any other spelling of the virtual id redirects to the labeled form.
    fn resolve_saved_questions(&self, path: &str, route: Route) -> Resolution {
        let bare = self.path(RouteFamily::Database, &EntityRef::saved_questions(false));
        let labeled = self.path(RouteFamily::Database, &EntityRef::saved_questions(true));

        if path == bare || path == labeled {
            return Resolution::Canonical { route };
        }

        debug!(path, to = %labeled, "redirecting to canonical saved-questions path");
        Resolution::Redirect { route, to: labeled }
    }
}
