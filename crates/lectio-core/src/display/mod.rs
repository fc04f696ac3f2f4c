//! Display formatting functions and wrapper types.
//!
//! Domain models implement [`std::fmt::Display`] directly; collections and
//! composite reports get newtype wrappers here. All output is markdown, so
//! the same text works for the terminal renderer and for MCP responses.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │ (Plan, Book)    │───▶│ (Books, Report) │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Book and division listings ([`Books`], [`Divisions`])
//! - [`models`]: Display implementations for plans and readings
//! - [`report`]: Statistics report for a generated plan ([`PlanReport`])
//! - [`status`]: Status and confirmation messages ([`OperationStatus`])
//!
//! ## Usage Examples
//!
//! ```rust
//! use lectio_core::{books::Testament, display::Divisions, BookTable};
//!
//! let listing = Divisions::new(BookTable::canonical(), Some(Testament::New));
//! let output = listing.to_string();
//! assert!(output.contains("Gospels"));
//! assert!(!output.contains("Pentateuch"));
//! ```

pub mod collections;
pub mod models;
pub mod report;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{Books, Divisions};
pub use report::PlanReport;
pub use status::OperationStatus;
