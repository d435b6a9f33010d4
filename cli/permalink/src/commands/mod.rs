//! CLI commands.

mod decode;
mod encode;
mod parse;
mod resolve;

use anyhow::Result;
use clap::{Parser, Subcommand};
use permalink_routes::RouteCodec;
use permalink_slug::SlugCodec;

use crate::config::Config;
use crate::logging;
use crate::output::OutputFormat;

/// permalink CLI - Build and resolve slugged entity permalinks.
#[derive(Debug, Parser)]
#[command(name = "permalink")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Id of the saved-questions virtual database.
    #[arg(
        long,
        global = true,
        allow_negative_numbers = true,
        env = "PERMALINK_SAVED_QUESTIONS_DB_ID"
    )]
    saved_questions_db_id: Option<i64>,

    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    #[arg(long, global = true, env = "PERMALINK_LOG_LEVEL")]
    log_level: Option<String>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Encode an entity into its canonical path.
    Encode(encode::EncodeCommand),

    /// Decode the entity id from a path segment.
    Decode(decode::DecodeCommand),

    /// Parse a path into its route.
    Parse(parse::ParseCommand),

    /// Resolve a path against an entity catalog.
    Resolve(resolve::ResolveCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let mut config = Config::load()?;

        if let Some(id) = self.saved_questions_db_id {
            config.codec.saved_questions_db_id = id;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }

        logging::init(&config.log_level, self.log_json);
        tracing::debug!(
            saved_questions_db_id = config.codec.saved_questions_db_id,
            "Configuration loaded"
        );

        let ctx = CommandContext {
            codec: RouteCodec::new(SlugCodec::new(config.codec)),
            format: self.format,
        };

        match self.command {
            Commands::Encode(cmd) => cmd.run(&ctx),
            Commands::Decode(cmd) => cmd.run(&ctx),
            Commands::Parse(cmd) => cmd.run(&ctx),
            Commands::Resolve(cmd) => cmd.run(&ctx),
            Commands::Version => {
                println!("permalink {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub codec: RouteCodec,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Get the slug codec.
    pub fn slug_codec(&self) -> &SlugCodec {
        self.codec.slug_codec()
    }
}
