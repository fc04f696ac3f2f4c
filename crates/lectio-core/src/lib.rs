//! Core library for the Lectio Bible reading plan generator.
//!
//! This crate turns a declarative configuration (which books, how many
//! parallel streams, how much per day, for how long) into a concrete
//! day-by-day reading schedule, and derives summary statistics from it.
//! Everything runs over a compiled-in 66-book table; there is no I/O.
//!
//! # Display Architecture
//!
//! Output is formatted through [`std::fmt::Display`]:
//!
//! - **Domain Models** ([`models`]): Plans and readings format themselves as
//!   markdown
//! - **Display Wrappers** ([`display`]): Book listings and statistics reports
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use lectio_core::{
//!     params::{BookSelection, PlanConfig, PlanMetadata, PlanRequest, SequentialConfig},
//!     statistics::calculate_plan_statistics,
//!     GeneratorBuilder,
//! };
//!
//! let generator = GeneratorBuilder::new()
//!     .with_default_author("Lectio")
//!     .build();
//!
//! let request = PlanRequest::new(PlanConfig::Sequential(SequentialConfig {
//!     books_to_include: vec![BookSelection::whole(43)],
//!     chapters_per_day: Some(3),
//!     total_plan_days: None,
//! }))
//! .with_metadata(PlanMetadata::named("john", "John in a week"));
//!
//! let plan = generator.generate(&request).unwrap();
//! assert_eq!(plan.total_plan_days, 7);
//! println!("{plan}");
//!
//! let stats = calculate_plan_statistics(&plan, generator.books());
//! assert_eq!(stats.book_readings["John"], 21);
//! ```

pub mod books;
pub mod display;
pub mod error;
pub mod export;
pub mod generator;
pub mod models;
pub mod params;
pub mod presets;
pub mod statistics;

// Re-export commonly used types
pub use books::{Book, BookTable, Division, Testament};
pub use display::{Books, Divisions, OperationStatus, PlanReport};
pub use error::{PlanError, Result};
pub use export::{export_file_name, export_plan_json};
pub use generator::{Generator, GeneratorBuilder};
pub use models::{parse_plan, Plan, ReadingPortion};
pub use params::{parse_plan_request, PlanConfig, PlanMetadata, PlanRequest};
pub use presets::{Preset, PresetOptions};
pub use statistics::{calculate_plan_statistics, PlanStatistics};
