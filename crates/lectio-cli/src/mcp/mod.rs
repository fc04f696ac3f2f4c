//! MCP server implementation for Lectio
//!
//! This module exposes plan generation over the Model Context Protocol so AI
//! assistants can build reading plans and inspect their coverage.

use std::future::Future;

use anyhow::Result;
use lectio_core::Generator;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use errors::to_mcp_error;
pub use handlers::{
    GeneratePlanParams, GeneratePresetParams, ListBooksParams, McpResult, PlanStatisticsParams,
};

/// MCP server for Lectio
#[derive(Clone)]
pub struct LectioMcpServer {
    generator: Generator,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl LectioMcpServer {
    /// Create a new Lectio MCP server
    pub fn new(generator: Generator) -> Self {
        Self {
            generator,
            tool_router: Self::tool_router(),
        }
    }

    // Tool methods that delegate to handlers::McpHandlers methods
    #[tool(
        name = "generate_plan",
        description = "Generate a daily Bible reading plan from an explicit request. The request's planType selects the algorithm: 'sequential' (booksToInclude with optional chapter ranges, chaptersPerDay, optional totalPlanDays cap), 'multi-stream' (streams of bookCodes read in parallel and cycled, required totalPlanDays), 'topical' (topics of explicit readings, readingsPerDay) or 'chronological' (an ordered chronologicalSequence, readingsPerDay, optional cap). Book codes run 1-66 in canonical order. Returns the plan as JSON (default) or markdown."
    )]
    async fn generate_plan(&self, params: Parameters<GeneratePlanParams>) -> McpResult {
        handlers::McpHandlers::new(&self.generator).generate_plan(params)
    }

    #[tool(
        name = "generate_preset",
        description = "Generate a plan from a preset: 'whole-bible' (load-balanced over totalPlanDays, with newTestamentPlacement alongside|after, wisdomBooksPlacement alongside|within and includedWisdomBooks), 'new-testament', 'horner' (10 streams), 'mcheyne' (4 streams), 'workweek' (260 days) or 'genesis-exodus-nt'. Returns the plan as JSON (default) or markdown."
    )]
    async fn generate_preset(&self, params: Parameters<GeneratePresetParams>) -> McpResult {
        handlers::McpHandlers::new(&self.generator).generate_preset(params)
    }

    #[tool(
        name = "plan_statistics",
        description = "Summarize a generated plan: chapters, readings and repetition factor for the Old Testament (without wisdom books), the New Testament and the wisdom books, per-division repetition, readings per book and the average daily verse load."
    )]
    async fn plan_statistics(&self, params: Parameters<PlanStatisticsParams>) -> McpResult {
        handlers::McpHandlers::new(&self.generator).plan_statistics(params)
    }

    #[tool(
        name = "list_books",
        description = "List the 66 books with their codes, testament, division and chapter count. Filter by testament ('OT' or 'NT') and/or division (e.g. 'Pentateuch', 'Pauline Epistles'). Use the codes in plan requests."
    )]
    async fn list_books(&self, params: Parameters<ListBooksParams>) -> McpResult {
        handlers::McpHandlers::new(&self.generator).list_books(params)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for LectioMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "lectio".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Lectio generates daily Bible reading plans. Generation is deterministic: the same request always yields the same plan.

## Core Concepts
- **Books** are identified by codes 1-66 in canonical order (1-39 Old Testament, 40-66 New Testament). Use `list_books` to look codes up.
- **Streams** are parallel reading tracks. Each day every stream contributes its chaptersPerDay chapters, and a stream starts over when it reaches the end of its books.
- **Repetition** is readings divided by chapters: 1.0 means a group of books is read exactly once.

## Workflow Examples

### A Plan From a Preset
1. Call `generate_preset` with e.g. preset 'mcheyne' or 'whole-bible' and totalPlanDays
2. Pass the returned plan to `plan_statistics` to check coverage

### A Custom Plan
1. Find book codes with `list_books`
2. Call `generate_plan` with a sequential request (one pass through the books) or a multi-stream request (parallel cycled tracks over a fixed number of days)

## Errors
Malformed requests (unknown planType, zero chaptersPerDay) are reported as invalid parameters. Unknown book codes are skipped rather than rejected."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: LectioMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Lectio MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
