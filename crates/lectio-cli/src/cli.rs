//! Command-line argument wrappers and command handlers
//!
//! Argument structs carry the clap derives and convert into core types, so
//! the core stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Generator → Display
//! ```
//!
//! [`Cli`] then runs each command against a [`Generator`] and hands the
//! markdown to the [`TerminalRenderer`]. JSON output bypasses the renderer
//! so it can be piped.

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use lectio_core::{
    display::{Books, Divisions, OperationStatus, PlanReport},
    export_plan_json, parse_plan, parse_plan_request,
    presets::{NewTestamentPlacement, WisdomBooksPlacement},
    Division, Generator, Plan, Preset, PresetOptions, Testament,
};
use log::{debug, info};

use crate::renderer::TerminalRenderer;

/// Output format for generated plans
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown rendered for the terminal
    #[default]
    Markdown,
    /// The JSON download format
    Json,
}

/// Where and how to write a generated plan
#[derive(Args)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,
    /// Write the plan to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Generate a plan from a JSON request
///
/// The request is a JSON object whose `planType` is one of `sequential`,
/// `multi-stream`, `topical` or `chronological`.
#[derive(Args)]
pub struct GenerateArgs {
    /// Request file, or `-` to read from stdin
    pub request: PathBuf,
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Generate a plan from a named preset
#[derive(Args)]
pub struct PresetArgs {
    /// Preset name: whole-bible, new-testament, horner, mcheyne, workweek or
    /// genesis-exodus-nt
    pub preset: Preset,
    /// Plan length in days (each preset has its own default)
    #[arg(short, long)]
    pub days: Option<u32>,
    /// Whole Bible: read the NT alongside the OT or after it
    #[arg(long, value_name = "alongside|after")]
    pub nt_placement: Option<NewTestamentPlacement>,
    /// Whole Bible: read wisdom books alongside or within the OT
    #[arg(long, value_name = "alongside|within")]
    pub wisdom_placement: Option<WisdomBooksPlacement>,
    /// Whole Bible: wisdom books to read separately (all five by default)
    #[arg(long, value_delimiter = ',')]
    pub wisdom_books: Vec<String>,
    #[command(flatten)]
    pub output: OutputArgs,
}

impl From<&PresetArgs> for PresetOptions {
    fn from(val: &PresetArgs) -> Self {
        PresetOptions {
            total_plan_days: val.days,
            new_testament_placement: val.nt_placement.unwrap_or_default(),
            wisdom_books_placement: val.wisdom_placement.unwrap_or_default(),
            included_wisdom_books: (!val.wisdom_books.is_empty())
                .then(|| val.wisdom_books.clone()),
        }
    }
}

/// Show statistics for a plan file
#[derive(Args)]
pub struct StatsArgs {
    /// Plan file (full or exported JSON), or `-` to read from stdin
    pub plan: PathBuf,
    /// Print the statistics as JSON
    #[arg(long)]
    pub json: bool,
}

/// List books of the Bible
#[derive(Args)]
pub struct BooksArgs {
    /// Only books of this testament (ot or nt)
    #[arg(short, long)]
    pub testament: Option<Testament>,
    /// Only books of this division, e.g. "pauline-epistles"
    #[arg(short, long)]
    pub division: Option<Division>,
}

/// List divisions with their chapter totals
#[derive(Args, Default)]
pub struct DivisionsArgs {
    /// Only divisions of this testament (ot or nt)
    #[arg(short, long)]
    pub testament: Option<Testament>,
}

/// Runs CLI commands against a generator.
pub struct Cli {
    generator: Generator,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(generator: Generator, renderer: TerminalRenderer) -> Self {
        Self {
            generator,
            renderer,
        }
    }

    pub fn generate(&self, args: GenerateArgs) -> Result<()> {
        let input = read_input(&args.request)?;
        let request = parse_plan_request(&input)
            .with_context(|| format!("Invalid request in {}", args.request.display()))?;
        debug!("Generating {} plan", request.config.plan_type());

        let plan = self
            .generator
            .generate(&request)
            .context("Failed to generate plan")?;
        self.emit_plan(&plan, &args.output)
    }

    pub fn preset(&self, args: PresetArgs) -> Result<()> {
        let options = PresetOptions::from(&args);
        let request = args
            .preset
            .request(self.generator.books(), &options)
            .with_context(|| format!("Failed to configure preset {}", args.preset.as_str()))?;

        let plan = self
            .generator
            .generate(&request)
            .context("Failed to generate plan")?;
        self.emit_plan(&plan, &args.output)
    }

    pub fn stats(&self, args: StatsArgs) -> Result<()> {
        let input = read_input(&args.plan)?;
        let plan = parse_plan(&input)
            .with_context(|| format!("Invalid plan in {}", args.plan.display()))?;
        let report = PlanReport::new(&plan, self.generator.books());

        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        } else {
            self.renderer.render(&report.to_string())
        }
    }

    pub fn books(&self, args: BooksArgs) -> Result<()> {
        let books = Books::filtered(self.generator.books(), args.testament, args.division);
        self.renderer.render(&format!("# Books\n\n{books}"))
    }

    pub fn divisions(&self, args: DivisionsArgs) -> Result<()> {
        let divisions = Divisions::new(self.generator.books(), args.testament);
        self.renderer.render(&format!("# Divisions\n\n{divisions}"))
    }

    fn emit_plan(&self, plan: &Plan, output: &OutputArgs) -> Result<()> {
        let text = match output.format {
            OutputFormat::Markdown => plan.to_string(),
            OutputFormat::Json => export_plan_json(plan).context("Failed to export plan")?,
        };

        match &output.output {
            Some(path) => {
                fs::write(path, &text)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("Wrote plan to {}", path.display());
                self.renderer
                    .render(&OperationStatus::plan_written(plan, path).to_string())
            }
            None if output.format == OutputFormat::Json => {
                println!("{text}");
                Ok(())
            }
            None => self.renderer.render(&text),
        }
    }
}

/// Read a file, or stdin when the path is `-`.
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::args::{Args as CliArgs, Commands};

    #[test]
    fn test_preset_args_into_options() {
        let args = CliArgs::parse_from([
            "lectio",
            "preset",
            "whole-bible",
            "--days",
            "180",
            "--nt-placement",
            "after",
            "--wisdom-books",
            "Psalms,Proverbs",
        ]);
        let Some(Commands::Preset(preset)) = args.command else {
            panic!("expected the preset command");
        };

        assert_eq!(preset.preset, Preset::WholeBible);
        let options = PresetOptions::from(&preset);
        assert_eq!(options.total_plan_days, Some(180));
        assert_eq!(options.new_testament_placement, NewTestamentPlacement::After);
        assert_eq!(options.wisdom_books_placement, WisdomBooksPlacement::Alongside);
        assert_eq!(
            options.included_wisdom_books,
            Some(vec!["Psalms".to_string(), "Proverbs".to_string()])
        );
    }

    #[test]
    fn test_preset_args_default_wisdom_books() {
        let args = CliArgs::parse_from(["lectio", "preset", "horner"]);
        let Some(Commands::Preset(preset)) = args.command else {
            panic!("expected the preset command");
        };
        assert_eq!(PresetOptions::from(&preset).included_wisdom_books, None);
    }

    #[test]
    fn test_books_filters_parse() {
        let args = CliArgs::parse_from(["lectio", "books", "-t", "nt", "-d", "gospels"]);
        let Some(Commands::Books(books)) = args.command else {
            panic!("expected the books command");
        };
        assert_eq!(books.testament, Some(Testament::New));
        assert_eq!(books.division, Some(Division::Gospels));
    }

    #[test]
    fn test_unknown_preset_is_rejected() {
        assert!(CliArgs::try_parse_from(["lectio", "preset", "daily-light"]).is_err());
    }
}
