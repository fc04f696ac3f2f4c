//! Statistics report for a generated plan.

use std::fmt;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    books::BookTable,
    models::Plan,
    statistics::{
        calculate_plan_statistics, division_repetitions, verses_per_day, DivisionRepetition,
        GroupStatistics, PlanStatistics, VerseLoad,
    },
};

/// Everything the front ends show about a plan's coverage.
///
/// Serializes to camelCase JSON for machine consumers and renders as
/// markdown through [`fmt::Display`].
///
/// ```rust
/// use lectio_core::{display::PlanReport, presets::create_mcheyne_config};
/// use lectio_core::{BookTable, GeneratorBuilder, PlanRequest};
///
/// let plan = GeneratorBuilder::new()
///     .build()
///     .generate(&PlanRequest::new(create_mcheyne_config()))
///     .unwrap();
/// let report = PlanReport::new(&plan, BookTable::canonical());
///
/// assert_eq!(report.total_plan_days, 365);
/// assert!(report.to_string().contains("| New Testament |"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlanReport {
    pub name: String,
    pub total_plan_days: u32,
    #[serde(flatten)]
    pub statistics: PlanStatistics,
    pub divisions: Vec<DivisionRepetition>,
    pub verse_load: VerseLoad,
}

impl PlanReport {
    pub fn new(plan: &Plan, books: BookTable) -> Self {
        Self {
            name: plan.name.clone(),
            total_plan_days: plan.total_plan_days,
            statistics: calculate_plan_statistics(plan, books),
            divisions: division_repetitions(plan, books),
            verse_load: VerseLoad::from_days(&verses_per_day(plan, books)),
        }
    }
}

fn group_row(f: &mut fmt::Formatter<'_>, label: &str, group: &GroupStatistics) -> fmt::Result {
    writeln!(
        f,
        "| {label} | {} | {} | {}x |",
        group.chapters, group.readings, group.repetition
    )
}

impl fmt::Display for PlanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            writeln!(f, "# Plan Statistics")?;
        } else {
            writeln!(f, "# Plan Statistics: {}", self.name)?;
        }
        writeln!(f)?;
        writeln!(f, "- Days: {}", self.total_plan_days)?;
        writeln!(
            f,
            "- Verses per day: {} on average ({} to {})",
            self.verse_load.average, self.verse_load.min, self.verse_load.max
        )?;

        writeln!(f, "\n## Coverage")?;
        writeln!(f)?;
        writeln!(f, "| Group | Chapters | Readings | Repetition |")?;
        writeln!(f, "|:---|---:|---:|---:|")?;
        group_row(f, "Old Testament", &self.statistics.old_testament)?;
        group_row(f, "New Testament", &self.statistics.new_testament)?;
        group_row(f, "Wisdom Books", &self.statistics.wisdom_books)?;

        if !self.divisions.is_empty() {
            writeln!(f, "\n## Divisions")?;
            writeln!(f)?;
            writeln!(f, "| Division | Chapters | Readings | Repetition |")?;
            writeln!(f, "|:---|---:|---:|---:|")?;
            for division in &self.divisions {
                group_row(f, division.division.as_str(), &division.statistics)?;
            }
        }

        if !self.statistics.book_readings.is_empty() {
            writeln!(f, "\n## Readings per Book")?;
            writeln!(f)?;
            for (name, count) in &self.statistics.book_readings {
                writeln!(f, "- {name}: {count}")?;
            }
        }

        Ok(())
    }
}
