//! Plan model definition and related functionality.

use std::collections::BTreeMap;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ReadingPortion;
use crate::{
    error::{RequestResultExt, Result},
    params::PlanConfig,
};

/// Marker for the precalculated day-by-day plan format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum PlanFormat {
    /// Every day's readings are listed explicitly
    #[default]
    #[serde(rename = "precalculated_daily_json")]
    PrecalculatedDailyJson,
}

/// A generated reading plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Identifier supplied by the caller
    #[serde(default)]
    pub id: String,

    /// Display name of the plan
    #[serde(default)]
    pub name: String,

    /// Longer description of the plan
    #[serde(default)]
    pub description: String,

    /// Format marker, always `precalculated_daily_json`
    #[serde(default)]
    pub plan_type: PlanFormat,

    /// Number of days in `daily_readings`
    pub total_plan_days: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Outer list is days, inner list is that day's readings
    pub daily_readings: Vec<Vec<ReadingPortion>>,

    /// Number of readings per book code
    #[serde(default)]
    pub book_reading_counts: BTreeMap<u32, u32>,

    /// Configuration the plan was generated from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_config: Option<PlanConfig>,
}

impl Plan {
    /// Total number of readings across all days.
    pub fn total_readings(&self) -> usize {
        self.daily_readings.iter().map(Vec::len).sum()
    }

    /// Number of readings of a single book.
    pub fn reading_count(&self, book_code: u32) -> u32 {
        self.book_reading_counts
            .get(&book_code)
            .copied()
            .unwrap_or(0)
    }

    /// Readings for a day (1-based), if the plan has that many days.
    pub fn day(&self, day: usize) -> Option<&[ReadingPortion]> {
        day.checked_sub(1)
            .and_then(|index| self.daily_readings.get(index))
            .map(Vec::as_slice)
    }

    /// Rebuild `book_reading_counts` from `daily_readings` when it is
    /// missing, as in exported plans.
    pub fn restore_reading_counts(&mut self) {
        if !self.book_reading_counts.is_empty() {
            return;
        }
        for portion in self.daily_readings.iter().flatten() {
            *self.book_reading_counts.entry(portion.book_code).or_insert(0) += 1;
        }
    }
}

/// Decode a plan document, either a full plan or the export format.
pub fn parse_plan(json: &str) -> Result<Plan> {
    let mut plan: Plan = serde_json::from_str(json).invalid_request("plan")?;
    plan.restore_reading_counts();
    Ok(plan)
}
