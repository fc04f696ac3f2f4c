//! Chronological plans: an explicit reading sequence in caller order.

use log::warn;

use super::{day_cap, per_day, DayChunker, Generator};
use crate::{
    error::Result,
    models::{Plan, ReadingPortion},
    params::{ChronologicalConfig, PlanConfig, PlanMetadata},
};

impl Generator {
    /// Generates a plan from `chronological_sequence` as given, split into
    /// days of `readings_per_day`. The sequence is never reordered.
    ///
    /// Same stopping rule as [`Generator::generate_sequential_plan`]: stop
    /// after `total_plan_days` full days, otherwise keep a trailing partial
    /// day.
    pub fn generate_chronological_plan(
        &self,
        metadata: &PlanMetadata,
        config: &ChronologicalConfig,
    ) -> Result<Plan> {
        let readings_per_day = per_day(config.readings_per_day, "readingsPerDay")?;
        let cap = day_cap(config.total_plan_days)?;
        let mut chunker = DayChunker::new(readings_per_day, cap);

        for item in &config.chronological_sequence {
            let Some(book) = self.books.book_by_code(item.book_code) else {
                warn!("Book with code {} not found. Skipping.", item.book_code);
                continue;
            };
            let portion =
                ReadingPortion::new(book, item.chapter).with_verses(item.verses.clone());
            if !chunker.push(portion) {
                break;
            }
        }

        Ok(self.assemble(
            metadata,
            chunker.finish(),
            PlanConfig::Chronological(config.clone()),
        ))
    }
}
