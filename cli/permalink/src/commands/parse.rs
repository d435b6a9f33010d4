//! Parse command.

use anyhow::Result;
use clap::Args;
use permalink_routes::{CollectionTarget, DatabaseTarget, Route};
use tabled::Tabled;

use super::CommandContext;
use crate::error::CliError;
use crate::output::print_output;

/// Parse a path into its route.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Path, e.g. `/dashboard/3-orders-in-a-dashboard`.
    path: String,
}

/// Table row describing a parsed route.
#[derive(Debug, Tabled)]
struct RouteRow {
    path: String,
    family: String,
    target: String,
}

impl RouteRow {
    fn new(path: &str, route: &Route) -> Self {
        Self {
            path: path.to_string(),
            family: route.family().to_string(),
            target: describe_target(route),
        }
    }
}

/// Human-readable target of a route.
pub(super) fn describe_target(route: &Route) -> String {
    match route {
        Route::Database(DatabaseTarget::SavedQuestions) => "saved questions".to_string(),
        Route::Collection(CollectionTarget::Root) => "root".to_string(),
        Route::Collection(CollectionTarget::Users) => "users".to_string(),
        Route::Database(DatabaseTarget::Id(id))
        | Route::Dashboard(id)
        | Route::Question(id)
        | Route::Model(id)
        | Route::Collection(CollectionTarget::Id(id)) => format!("id {id}"),
    }
}

impl ParseCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let route = ctx.codec.parse(&self.path).map_err(CliError::from)?;
        print_output(&[RouteRow::new(&self.path, &route)], &route, ctx.format);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_target() {
        assert_eq!(
            describe_target(&Route::Database(DatabaseTarget::SavedQuestions)),
            "saved questions"
        );
        assert_eq!(
            describe_target(&Route::Collection(CollectionTarget::Users)),
            "users"
        );
        assert_eq!(describe_target(&Route::Model(11)), "id 11");
    }
}
