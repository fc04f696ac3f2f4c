//! Sequential plans: selected books read front to back.

use log::{debug, warn};

use super::{day_cap, per_day, DayChunker, Generator};
use crate::{
    error::Result,
    models::{Plan, ReadingPortion},
    params::{PlanConfig, PlanMetadata, SequentialConfig},
};

impl Generator {
    /// Generates a plan that walks the selected books in order,
    /// `chapters_per_day` chapters at a time.
    ///
    /// Generation stops as soon as `total_plan_days` full days have been
    /// produced; any remaining chapters are dropped. Otherwise a final shorter
    /// day holds the leftover chapters. The plan's `total_plan_days` is the
    /// number of days actually produced.
    pub fn generate_sequential_plan(
        &self,
        metadata: &PlanMetadata,
        config: &SequentialConfig,
    ) -> Result<Plan> {
        let chapters_per_day = per_day(config.chapters_per_day, "chaptersPerDay")?;
        let cap = day_cap(config.total_plan_days)?;
        let mut chunker = DayChunker::new(chapters_per_day, cap);

        'books: for selection in &config.books_to_include {
            let Some(book) = self.books.book_by_code(selection.book_code) else {
                warn!(
                    "Book with code {} not found. Skipping.",
                    selection.book_code
                );
                continue;
            };

            let start = selection.start_chapter.unwrap_or(1).max(1);
            let mut end = selection
                .end_chapter
                .filter(|&end| end > 0)
                .unwrap_or(book.chapter_count());
            if end > book.chapter_count() {
                warn!(
                    "{} has {} chapters; clamping end chapter {}",
                    book.name,
                    book.chapter_count(),
                    end
                );
                end = book.chapter_count();
            }
            if start > end {
                debug!("Empty chapter range {start}-{end} for {}", book.name);
            }

            for chapter in start..=end {
                if !chunker.push(ReadingPortion::new(book, chapter)) {
                    break 'books;
                }
            }
        }

        Ok(self.assemble(
            metadata,
            chunker.finish(),
            PlanConfig::Sequential(config.clone()),
        ))
    }
}
