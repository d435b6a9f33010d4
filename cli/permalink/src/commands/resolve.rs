//! Resolve command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use permalink_routes::{CatalogEntry, Resolution, StaticLookup};

use super::parse::describe_target;
use super::CommandContext;
use crate::error::CliError;
use crate::output::{print_info, print_json, print_success, OutputFormat};

/// Resolve a path against an entity catalog.
#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Path, e.g. `/dashboard/3-stale-old-name`.
    path: String,

    /// JSON file listing entities as `{"family": ..., "entity": {...}}`.
    #[arg(long)]
    catalog: PathBuf,
}

impl ResolveCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let lookup = load_catalog(&self.catalog)?;
        tracing::debug!(entities = lookup.len(), "Catalog loaded");

        let resolution = ctx
            .codec
            .resolve(&self.path, &lookup)
            .map_err(CliError::from)?;

        if ctx.format == OutputFormat::Json {
            print_json(&resolution);
            return Ok(());
        }

        let target = describe_target(resolution.route());
        match &resolution {
            Resolution::Canonical { route } => {
                print_success(&format!("{} is canonical ({} {})", self.path, route.family(), target));
            }
            Resolution::Redirect { to, .. } => {
                print_info(&format!("{} redirects to {} ({})", self.path, to, target));
            }
        }
        Ok(())
    }
}

fn load_catalog(path: &Path) -> Result<StaticLookup> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog from {:?}", path))?;

    let entries: Vec<CatalogEntry> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse catalog from {:?}", path))?;

    Ok(entries.into_iter().collect())
}
