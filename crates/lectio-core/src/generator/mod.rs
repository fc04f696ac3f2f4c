//! Plan generation engine.
//!
//! This module provides the [`Generator`], which turns a declarative
//! configuration into a concrete day-by-day [`Plan`]. Every generation call is
//! pure: it reads the injected [`BookTable`] and builds its cursors and
//! counters locally, so calls never interfere with each other.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   PlanRequest   │    │    Generator    │    │      Plan       │
//! │ (params, serde) │───▶│ (one algorithm  │───▶│ (dailyReadings, │
//! │                 │    │  per planType)  │    │  counts)        │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Generator`] instances with configured defaults
//! - [`sequential`]: Books front to back, optionally capped in days
//! - [`multi_stream`]: Parallel cyclic streams over a fixed number of days
//! - [`topical`]: Explicit readings grouped by topic
//! - [`chronological`]: An explicit, pre-ordered reading sequence
//!
//! ## Failure Semantics
//!
//! A book code missing from the table is logged and that single reading is
//! skipped. Malformed configuration (a zero per-day count, a zero day cap) is
//! rejected with [`PlanError::InvalidInput`] before any work is done.
//!
//! # Usage Examples
//!
//! ```rust
//! use lectio_core::{
//!     params::{BookSelection, PlanMetadata, SequentialConfig},
//!     GeneratorBuilder,
//! };
//!
//! let generator = GeneratorBuilder::new().build();
//! let plan = generator
//!     .generate_sequential_plan(
//!         &PlanMetadata::named("matthew", "Matthew"),
//!         &SequentialConfig {
//!             books_to_include: vec![BookSelection::whole(40)],
//!             ..Default::default()
//!         },
//!     )
//!     .unwrap();
//!
//! assert_eq!(plan.total_plan_days, 28);
//! assert_eq!(plan.reading_count(40), 28);
//! ```

use std::{collections::BTreeMap, mem};

use log::debug;

use crate::{
    books::BookTable,
    error::{PlanError, Result},
    models::{Plan, PlanFormat, ReadingPortion},
    params::{PlanConfig, PlanMetadata, PlanRequest},
};

// Module declarations
pub mod builder;
pub mod chronological;
pub mod multi_stream;
pub mod sequential;
pub mod topical;


// Re-export the main types
pub use builder::GeneratorBuilder;

/// Main generation interface.
#[derive(Debug, Clone)]
pub struct Generator {
    pub(crate) books: BookTable,
    pub(crate) default_author: Option<String>,
    pub(crate) default_version: Option<String>,
}

impl Generator {
    /// Creates a generator over the given book table.
    pub(crate) fn new(
        books: BookTable,
        default_author: Option<String>,
        default_version: Option<String>,
    ) -> Self {
        Self {
            books,
            default_author,
            default_version,
        }
    }

    /// The book table this generator reads from.
    pub fn books(&self) -> BookTable {
        self.books
    }

    /// Generate a plan for any request, dispatching on its `planType`.
    pub fn generate(&self, request: &PlanRequest) -> Result<Plan> {
        let metadata = &request.metadata;
        match &request.config {
            PlanConfig::Sequential(config) => self.generate_sequential_plan(metadata, config),
            PlanConfig::MultiStream(config) => self.generate_multi_stream_plan(metadata, config),
            PlanConfig::Topical(config) => self.generate_topical_plan(metadata, config),
            PlanConfig::Chronological(config) => {
                self.generate_chronological_plan(metadata, config)
            }
        }
    }

    /// Build the final plan from accumulated days.
    pub(crate) fn assemble(
        &self,
        metadata: &PlanMetadata,
        readings: DailyReadings,
        config: PlanConfig,
    ) -> Plan {
        let DailyReadings { days, counts } = readings;
        debug!(
            "Generated {} plan '{}': {} days, {} books",
            config.plan_type(),
            metadata.name,
            days.len(),
            counts.len()
        );

        Plan {
            id: metadata.id.clone(),
            name: metadata.name.clone(),
            description: metadata.description.clone(),
            plan_type: PlanFormat::PrecalculatedDailyJson,
            total_plan_days: days.len() as u32,
            tags: metadata.tags.clone(),
            author: metadata
                .author
                .clone()
                .or_else(|| self.default_author.clone()),
            version: metadata
                .version
                .clone()
                .or_else(|| self.default_version.clone()),
            daily_readings: days,
            book_reading_counts: counts,
            plan_config: Some(config),
        }
    }
}

/// Per-day amount with a default of 1; zero is rejected.
pub(crate) fn per_day(value: Option<u32>, field: &str) -> Result<u32> {
    match value {
        None => Ok(1),
        Some(0) => Err(PlanError::invalid_input(field).with_reason("must be at least 1")),
        Some(n) => Ok(n),
    }
}

/// Optional cap on the number of generated days; zero is rejected.
pub(crate) fn day_cap(value: Option<u32>) -> Result<Option<u32>> {
    match value {
        Some(0) => Err(PlanError::invalid_input("totalPlanDays")
            .with_reason("must be at least 1 when given")),
        other => Ok(other),
    }
}

/// Days of readings plus the per-book tally, kept in step with each other.
#[derive(Debug, Default)]
pub(crate) struct DailyReadings {
    days: Vec<Vec<ReadingPortion>>,
    counts: BTreeMap<u32, u32>,
}

impl DailyReadings {
    /// Append a fully built day.
    pub(crate) fn push_day(&mut self, day: Vec<ReadingPortion>) {
        for portion in &day {
            *self.counts.entry(portion.book_code).or_insert(0) += 1;
        }
        self.days.push(day);
    }

    pub(crate) fn len(&self) -> usize {
        self.days.len()
    }
}

/// Splits a stream of readings into days of a fixed size.
///
/// Used by the sequential, topical and chronological generators. Once the
/// optional day cap is reached, [`DayChunker::push`] reports it and the
/// caller stops feeding readings.
#[derive(Debug)]
pub(crate) struct DayChunker {
    per_day: usize,
    cap: Option<usize>,
    current: Vec<ReadingPortion>,
    readings: DailyReadings,
}

impl DayChunker {
    pub(crate) fn new(per_day: u32, cap: Option<u32>) -> Self {
        Self {
            per_day: per_day as usize,
            cap: cap.map(|c| c as usize),
            current: Vec::new(),
            readings: DailyReadings::default(),
        }
    }

    /// Add one reading. Returns `false` once the day cap has been reached.
    pub(crate) fn push(&mut self, portion: ReadingPortion) -> bool {
        self.current.push(portion);
        if self.current.len() >= self.per_day {
            let day = mem::take(&mut self.current);
            self.readings.push_day(day);
        }
        !self.is_full()
    }

    fn is_full(&self) -> bool {
        self.cap.is_some_and(|cap| self.readings.len() >= cap)
    }

    /// Flush a non-empty partial day and return the result.
    pub(crate) fn finish(mut self) -> DailyReadings {
        if !self.current.is_empty() {
            let day = mem::take(&mut self.current);
            self.readings.push_day(day);
        }
        self.readings
    }
}
