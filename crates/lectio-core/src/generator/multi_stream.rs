//! Multi-stream plans: several cyclic reading tracks advanced in parallel.

use log::warn;

use super::{per_day, DailyReadings, Generator};
use crate::{
    error::Result,
    models::{Plan, ReadingPortion},
    params::{MultiStreamConfig, PlanConfig, PlanMetadata},
};

/// Cursor into one stream's book list. Lives only for one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StreamPosition {
    book_index: usize,
    chapter: u32,
}

impl Default for StreamPosition {
    fn default() -> Self {
        Self {
            book_index: 0,
            chapter: 1,
        }
    }
}

impl StreamPosition {
    /// Move to the first chapter of the next book, wrapping to the start of
    /// the stream after the last book.
    fn next_book(&mut self, stream_len: usize) {
        self.book_index = (self.book_index + 1) % stream_len;
        self.chapter = 1;
    }
}

impl Generator {
    /// Generates exactly `total_plan_days` days. Each day every stream, in
    /// order, contributes its `chapters_per_day` chapters.
    ///
    /// Streams are cyclic: after the last chapter of the last book a stream
    /// starts over at its first book, so the plan length is driven purely by
    /// `total_plan_days`. A stream that wraps partway through a day keeps
    /// reading from its first book until the day has its full
    /// `chapters_per_day`. A stream with no books contributes nothing; a book
    /// code missing from the table contributes nothing for that slot and the
    /// stream moves on to its next book.
    pub fn generate_multi_stream_plan(
        &self,
        metadata: &PlanMetadata,
        config: &MultiStreamConfig,
    ) -> Result<Plan> {
        let chapters_per_day = config
            .streams
            .iter()
            .enumerate()
            .map(|(index, stream)| {
                per_day(
                    stream.chapters_per_day,
                    &format!("streams[{index}].chaptersPerDay"),
                )
            })
            .collect::<Result<Vec<_>>>()?;

        let mut positions = vec![StreamPosition::default(); config.streams.len()];
        let mut readings = DailyReadings::default();

        for _ in 0..config.total_plan_days {
            let mut today = Vec::new();

            for (stream_index, (stream, position)) in
                config.streams.iter().zip(positions.iter_mut()).enumerate()
            {
                let stream_len = stream.book_codes.len();
                if stream_len == 0 {
                    continue;
                }

                for _ in 0..chapters_per_day[stream_index] {
                    let code = stream.book_codes[position.book_index];
                    let Some(book) = self.books.book_by_code(code) else {
                        warn!(
                            "Book with code {code} not found in stream {stream_index}. Skipping."
                        );
                        position.next_book(stream_len);
                        continue;
                    };

                    today.push(ReadingPortion::new(book, position.chapter));
                    position.chapter += 1;
                    if position.chapter > book.chapter_count() {
                        position.next_book(stream_len);
                    }
                }
            }

            readings.push_day(today);
        }

        Ok(self.assemble(
            metadata,
            readings,
            PlanConfig::MultiStream(config.clone()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_wraps() {
        let mut position = StreamPosition {
            book_index: 2,
            chapter: 7,
        };
        position.next_book(3);
        assert_eq!(position, StreamPosition::default());
    }
}
