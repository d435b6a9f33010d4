//! Error handling and display for the CLI.

use colored::Colorize;
use permalink_routes::RouteError;
use permalink_slug::SlugError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    #[error(transparent)]
    Slug(#[from] SlugError),

    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    let Some(cli_err) = err.downcast_ref::<CliError>() else {
        return;
    };

    match cli_err {
        CliError::Slug(SlugError::InvalidSlug { .. })
        | CliError::Route(RouteError::Slug {
            source: SlugError::InvalidSlug { .. },
            ..
        }) => {
            eprintln!(
                "\n{}",
                "Hint: Segments must start with a numeric id, e.g. `3-orders`. `root` and `users` are literal collection routes."
                    .yellow()
            );
        }
        CliError::Route(RouteError::UnknownRoute { .. }) => {
            eprintln!(
                "\n{}",
                "Hint: Known prefixes are /browse/databases, /dashboard, /question, /model, and /collection."
                    .yellow()
            );
        }
        CliError::Route(RouteError::NotFound { .. }) => {
            eprintln!(
                "\n{}",
                "Hint: Check that the catalog passed with --catalog contains this entity.".yellow()
            );
        }
        _ => {}
    }
}
