//! Encode command.

use anyhow::Result;
use clap::Args;
use permalink_routes::RouteFamily;
use permalink_slug::EntityRef;
use serde::Serialize;
use tabled::Tabled;

use super::CommandContext;
use crate::error::CliError;
use crate::output::print_output;

/// Encode an entity into its canonical path.
#[derive(Debug, Args)]
pub struct EncodeCommand {
    /// Route family (database, dashboard, question, model, collection).
    family: RouteFamily,

    /// Entity id.
    #[arg(long, allow_negative_numbers = true)]
    id: Option<i64>,

    /// Entity display name.
    #[arg(long, conflicts_with_all = ["first_name", "last_name", "saved_questions"])]
    name: Option<String>,

    /// Owner first name, for a personal collection.
    #[arg(long, requires = "last_name")]
    first_name: Option<String>,

    /// Owner last name, for a personal collection.
    #[arg(long, requires = "first_name")]
    last_name: Option<String>,

    /// Encode the saved-questions virtual database.
    #[arg(long, conflicts_with = "id")]
    saved_questions: bool,

    /// Append the `saved-questions` label.
    #[arg(long, requires = "saved_questions")]
    labeled: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct EncodeOutput {
    family: RouteFamily,
    segment: String,
    path: String,
}

impl EncodeCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let family = self.family;
        let entity = self.into_entity()?;

        let output = EncodeOutput {
            family,
            segment: ctx.slug_codec().encode(&entity),
            path: ctx.codec.path(family, &entity),
        };
        print_output(std::slice::from_ref(&output), &output, ctx.format);
        Ok(())
    }

    fn into_entity(self) -> Result<EntityRef, CliError> {
        if self.saved_questions {
            if self.family != RouteFamily::Database {
                return Err(CliError::InvalidArgs(
                    "--saved-questions only applies to the database family".to_string(),
                ));
            }
            return Ok(EntityRef::saved_questions(self.labeled));
        }

        let id = self
            .id
            .ok_or_else(|| CliError::InvalidArgs("--id is required".to_string()))?;

        match (self.first_name, self.last_name) {
            (Some(first_name), Some(last_name)) => {
                if self.family != RouteFamily::Collection {
                    return Err(CliError::InvalidArgs(
                        "--first-name/--last-name only apply to the collection family".to_string(),
                    ));
                }
                Ok(EntityRef::personal_collection(id, first_name, last_name))
            }
            _ => Ok(EntityRef::entity(id, self.name.unwrap_or_default())),
        }
    }
}
