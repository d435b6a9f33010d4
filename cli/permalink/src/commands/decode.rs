//! Decode command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::CommandContext;
use crate::error::CliError;
use crate::output::print_value;

/// Decode the entity id from a path segment.
#[derive(Debug, Args)]
pub struct DecodeCommand {
    /// Path segment, e.g. `3-orders-in-a-dashboard`.
    #[arg(allow_hyphen_values = true)]
    segment: String,
}

#[derive(Debug, Serialize)]
struct DecodeOutput<'a> {
    segment: &'a str,
    id: i64,
    saved_questions: bool,
}

impl DecodeCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let codec = ctx.slug_codec();
        let id = codec.decode(&self.segment).map_err(CliError::from)?;

        let output = DecodeOutput {
            segment: &self.segment,
            id,
            saved_questions: codec.is_saved_questions(&self.segment),
        };
        print_value(&id.to_string(), &output, ctx.format);
        Ok(())
    }
}
