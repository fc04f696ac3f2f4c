//! Lectio CLI Application
//!
//! Command-line interface and MCP server for the lectio reading plan
//! generator.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, DivisionsArgs};
use lectio_core::GeneratorBuilder;
use log::info;
use mcp::{run_stdio_server, LectioMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, command } = Args::parse();

    let generator = GeneratorBuilder::new()
        .with_default_version(env!("CARGO_PKG_VERSION"))
        .build();

    info!("Lectio started");

    let cli = || Cli::new(generator.clone(), TerminalRenderer::new(!no_color));

    match command {
        Some(Generate(args)) => cli().generate(args),
        Some(Preset(args)) => cli().preset(args),
        Some(Stats(args)) => cli().stats(args),
        Some(Books(args)) => cli().books(args),
        Some(Divisions(args)) => cli().divisions(args),
        Some(Serve) => {
            info!("Starting Lectio MCP server");
            run_stdio_server(LectioMcpServer::new(generator.clone()))
                .await
                .context("MCP server failed")
        }
        None => cli().divisions(DivisionsArgs::default()),
    }
}
