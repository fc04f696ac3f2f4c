//! Topical plans: explicit readings grouped by topic.

use log::warn;

use super::{per_day, DayChunker, Generator};
use crate::{
    error::Result,
    models::{Plan, ReadingPortion},
    params::{PlanConfig, PlanMetadata, TopicalConfig},
};

impl Generator {
    /// Generates a plan from every topic's readings, in order, split into
    /// days of `readings_per_day`.
    ///
    /// Topic boundaries are not preserved: a day may hold the end of one
    /// topic and the start of the next. A trailing partial day is kept.
    pub fn generate_topical_plan(
        &self,
        metadata: &PlanMetadata,
        config: &TopicalConfig,
    ) -> Result<Plan> {
        let readings_per_day = per_day(config.readings_per_day, "readingsPerDay")?;
        let mut chunker = DayChunker::new(readings_per_day, None);

        for reading in config.topics.iter().flat_map(|topic| &topic.readings) {
            let Some(book) = self.books.book_by_code(reading.book_code) else {
                warn!("Book with code {} not found. Skipping.", reading.book_code);
                continue;
            };
            chunker.push(
                ReadingPortion::new(book, reading.chapter).with_verses(reading.verses.clone()),
            );
        }

        Ok(self.assemble(
            metadata,
            chunker.finish(),
            PlanConfig::Topical(config.clone()),
        ))
    }
}
