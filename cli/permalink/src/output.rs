//! Output formatting for CLI commands.

use colored::Colorize;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

/// Print table rows, or the JSON document when `format` is JSON.
pub fn print_output<R: Tabled, J: Serialize + ?Sized>(rows: &[R], json: &J, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("{}", "No items found.".dimmed());
            } else {
                let table = Table::new(rows).with(Style::sharp()).to_string();
                println!("{}", table);
            }
        }
        OutputFormat::Json => print_json(json),
    }
}

/// Print a JSON document.
pub fn print_json<J: Serialize + ?Sized>(json: &J) {
    println!("{}", format_json(json));
}

/// Print a single value: plain text for tables, JSON otherwise.
pub fn print_value<J: Serialize + ?Sized>(text: &str, json: &J, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", text),
        OutputFormat::Json => print_json(json),
    }
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "Success:".green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "Info:".blue().bold(), message);
}

fn format_json<J: Serialize + ?Sized>(json: &J) -> String {
    serde_json::to_string_pretty(json).unwrap_or_else(|_| "null".to_string())
}
