use clap::{Parser, Subcommand};

use crate::cli::{BooksArgs, DivisionsArgs, GenerateArgs, PresetArgs, StatsArgs};

/// Generate daily Bible reading plans
///
/// Lectio distributes the chapters of the selected books across days, either
/// front to back or as several parallel streams, and reports how often each
/// part of the Bible is covered. It runs as a command-line tool or as an MCP
/// (Model Context Protocol) server for AI assistants.
#[derive(Parser)]
#[command(version, about, name = "lectio")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Lectio CLI
///
/// - `generate` / `preset`: build a plan from a request file or a preset
/// - `stats`: summarize an existing plan file
/// - `books` / `divisions`: browse the book table
/// - `serve`: start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a plan from a JSON request
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Generate a plan from a named preset
    #[command(alias = "p")]
    Preset(PresetArgs),
    /// Show statistics for a plan file
    Stats(StatsArgs),
    /// List books of the Bible
    Books(BooksArgs),
    /// List divisions with their chapter totals
    Divisions(DivisionsArgs),
    /// Start the MCP server
    Serve,
}
