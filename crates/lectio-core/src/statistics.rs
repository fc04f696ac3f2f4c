//! Summary numbers derived from a generated plan.
//!
//! Everything here is a read-only reduction over a [`Plan`] and the
//! [`BookTable`]. Missing data counts as zero; nothing here can fail.

use std::collections::BTreeMap;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    books::{BookTable, Division, Testament},
    models::Plan,
};

/// Chapters, readings and repetition factor of one group of books.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct GroupStatistics {
    /// Chapters in the group
    pub chapters: u32,
    /// Readings of the group's books in the plan
    pub readings: u32,
    /// `readings / chapters` with one decimal, `"0.0"` for an empty group
    pub repetition: String,
}

impl GroupStatistics {
    pub fn new(chapters: u32, readings: u32) -> Self {
        Self {
            chapters,
            readings,
            repetition: format!("{:.1}", repetition_factor(chapters, readings)),
        }
    }

    /// Unrounded repetition factor.
    pub fn factor(&self) -> f64 {
        repetition_factor(self.chapters, self.readings)
    }
}

fn repetition_factor(chapters: u32, readings: u32) -> f64 {
    if chapters == 0 {
        0.0
    } else {
        f64::from(readings) / f64::from(chapters)
    }
}

/// Repetition factors for the three canonical groups plus per-book counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlanStatistics {
    /// Old Testament without the wisdom books
    pub old_testament: GroupStatistics,
    pub new_testament: GroupStatistics,
    /// Job through Song of Solomon
    pub wisdom_books: GroupStatistics,
    /// Reading count per book name, for books read at least once
    pub book_readings: BTreeMap<String, u32>,
}

/// Partition the canon into OT-minus-wisdom, NT and wisdom, and compare each
/// group's chapter total with its readings in `plan`.
///
/// ```rust
/// use lectio_core::{presets::create_horner_config, statistics::calculate_plan_statistics};
/// use lectio_core::{BookTable, GeneratorBuilder, PlanRequest};
///
/// let generator = GeneratorBuilder::new().build();
/// let plan = generator.generate(&PlanRequest::new(create_horner_config())).unwrap();
/// let stats = calculate_plan_statistics(&plan, BookTable::canonical());
///
/// // Acts is its own stream: 365 readings of 28 chapters
/// assert_eq!(stats.book_readings["Acts"], 365);
/// ```
pub fn calculate_plan_statistics(plan: &Plan, books: BookTable) -> PlanStatistics {
    let mut old = (0, 0);
    let mut new = (0, 0);
    let mut wisdom = (0, 0);

    for book in books.books() {
        let readings = plan.reading_count(book.code);
        let group = if book.is_wisdom() {
            &mut wisdom
        } else if book.testament == Testament::Old {
            &mut old
        } else {
            &mut new
        };
        group.0 += book.chapter_count();
        group.1 += readings;
    }

    let book_readings = plan
        .book_reading_counts
        .iter()
        .filter(|(_, &count)| count > 0)
        .filter_map(|(&code, &count)| {
            books
                .book_by_code(code)
                .map(|book| (book.name.to_string(), count))
        })
        .collect();

    PlanStatistics {
        old_testament: GroupStatistics::new(old.0, old.1),
        new_testament: GroupStatistics::new(new.0, new.1),
        wisdom_books: GroupStatistics::new(wisdom.0, wisdom.1),
        book_readings,
    }
}

/// Repetition of one division, counted over the books actually read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct DivisionRepetition {
    pub division: Division,
    #[serde(flatten)]
    pub statistics: GroupStatistics,
}

/// Per-division repetition, in canonical order, for divisions with at least
/// one reading.
///
/// The chapter total only covers books of the division that appear in the
/// plan, so a plan reading just Romans reports the Pauline Epistles at the
/// repetition of Romans alone.
pub fn division_repetitions(plan: &Plan, books: BookTable) -> Vec<DivisionRepetition> {
    Division::ALL
        .into_iter()
        .filter_map(|division| {
            let (chapters, readings) = books
                .books()
                .iter()
                .filter(|book| book.division == division)
                .map(|book| (book.chapter_count(), plan.reading_count(book.code)))
                .filter(|&(_, readings)| readings > 0)
                .fold((0, 0), |(c, r), (chapters, readings)| {
                    (c + chapters, r + readings)
                });
            (readings > 0).then(|| DivisionRepetition {
                division,
                statistics: GroupStatistics::new(chapters, readings),
            })
        })
        .collect()
}

/// Estimated verses for each day of the plan.
///
/// A portion with a verse expression counts the verses it names; otherwise
/// it counts the whole chapter. Unknown books and chapters count as zero.
pub fn verses_per_day(plan: &Plan, books: BookTable) -> Vec<u32> {
    plan.daily_readings
        .iter()
        .map(|day| {
            day.iter()
                .map(|portion| {
                    portion
                        .verse_span()
                        .unwrap_or_else(|| books.verse_count(portion.book_code, portion.chapter))
                })
                .sum()
        })
        .collect()
}

/// Average and extremes of the daily verse load.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct VerseLoad {
    /// Rounded mean verses per day
    pub average: u32,
    pub min: u32,
    pub max: u32,
}

impl VerseLoad {
    /// Summarize per-day verse counts; all zero for an empty plan.
    pub fn from_days(days: &[u32]) -> Self {
        if days.is_empty() {
            return Self::default();
        }
        let total: u64 = days.iter().map(|&d| u64::from(d)).sum();
        let average = (total as f64 / days.len() as f64).round() as u32;
        Self {
            average,
            min: days.iter().copied().min().unwrap_or(0),
            max: days.iter().copied().max().unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::ReadingPortion,
        params::{MultiStreamConfig, PlanMetadata, Stream},
        GeneratorBuilder,
    };

    fn multi_stream(streams: Vec<Stream>, days: u32) -> Plan {
        GeneratorBuilder::new()
            .build()
            .generate_multi_stream_plan(
                &PlanMetadata::default(),
                &MultiStreamConfig {
                    streams,
                    total_plan_days: days,
                },
            )
            .unwrap()
    }

    #[test]
    fn test_group_statistics_format() {
        assert_eq!(GroupStatistics::new(260, 520).repetition, "2.0");
        assert_eq!(GroupStatistics::new(3, 1).repetition, "0.3");
        assert_eq!(GroupStatistics::new(0, 0).repetition, "0.0");
        assert_eq!(GroupStatistics::new(0, 5).factor(), 0.0);
    }

    #[test]
    fn test_no_wisdom_readings() {
        let plan = multi_stream(vec![Stream::new((40..=66).collect())], 260);
        let stats = calculate_plan_statistics(&plan, BookTable::canonical());

        assert_eq!(stats.wisdom_books.readings, 0);
        assert_eq!(stats.wisdom_books.chapters, 243);
        assert_eq!(stats.wisdom_books.repetition, "0.0");
        assert_eq!(stats.new_testament.chapters, 260);
        assert_eq!(stats.new_testament.readings, 260);
        assert_eq!(stats.new_testament.repetition, "1.0");
        assert_eq!(stats.old_testament.chapters, 686);
        assert_eq!(stats.old_testament.repetition, "0.0");
        assert_eq!(stats.book_readings["Matthew"], 28);
        assert!(!stats.book_readings.contains_key("Genesis"));
    }

    #[test]
    fn test_wisdom_counted_separately() {
        let plan = multi_stream(vec![Stream::new(vec![20])], 62);
        let stats = calculate_plan_statistics(&plan, BookTable::canonical());

        assert_eq!(stats.wisdom_books.readings, 62);
        assert_eq!(stats.wisdom_books.repetition, "0.3");
        assert_eq!(stats.old_testament.readings, 0);
    }

    #[test]
    fn test_division_repetitions_only_counts_read_books() {
        // Romans has 16 chapters, read twice over
        let plan = multi_stream(vec![Stream::new(vec![45]), Stream::new(vec![40])], 32);
        let divisions = division_repetitions(&plan, BookTable::canonical());

        assert_eq!(divisions.len(), 2);
        assert_eq!(divisions[0].division, Division::Gospels);
        assert_eq!(divisions[0].statistics.chapters, 28);
        assert_eq!(divisions[1].division, Division::PaulineEpistles);
        assert_eq!(divisions[1].statistics.chapters, 16);
        assert_eq!(divisions[1].statistics.repetition, "2.0");
    }

    #[test]
    fn test_division_repetitions_partial_coverage() {
        // Genesis covers its 50 chapters one and a half times, Obadiah 75 times
        let plan = multi_stream(vec![Stream::new(vec![1]), Stream::new(vec![31])], 75);
        let divisions = division_repetitions(&plan, BookTable::canonical());

        assert_eq!(divisions.len(), 2);
        assert_eq!(divisions[0].division, Division::Pentateuch);
        assert_eq!(divisions[0].statistics.chapters, 50);
        assert_eq!(divisions[0].statistics.readings, 75);
        assert_eq!(divisions[0].statistics.repetition, "1.5");
        assert_eq!(divisions[1].division, Division::MinorProphets);
        assert_eq!(divisions[1].statistics.chapters, 1);
        assert_eq!(divisions[1].statistics.repetition, "75.0");
    }

    #[test]
    fn test_unknown_codes_have_no_book_entry() {
        let mut plan = multi_stream(vec![Stream::new(vec![57])], 2);
        plan.book_reading_counts.insert(9999, 4);
        let stats = calculate_plan_statistics(&plan, BookTable::canonical());

        assert_eq!(stats.book_readings.len(), 1);
        assert_eq!(stats.book_readings["Philemon"], 2);
        assert!(!stats.book_readings.contains_key("Book 9999"));
    }

    #[test]
    fn test_verses_per_day() {
        let mut plan = multi_stream(vec![Stream::new(vec![19])], 2);
        // Psalm 1 has 6 verses, Psalm 2 has 12
        assert_eq!(verses_per_day(&plan, BookTable::canonical()), vec![6, 12]);

        plan.daily_readings[1].push(ReadingPortion {
            book_code: 19,
            chapter: 119,
            book_name: None,
            verses: Some("1-8,105".to_string()),
        });
        plan.daily_readings[0].push(ReadingPortion {
            book_code: 9999,
            chapter: 1,
            book_name: None,
            verses: None,
        });
        assert_eq!(verses_per_day(&plan, BookTable::canonical()), vec![6, 21]);
    }

    #[test]
    fn test_verse_load() {
        assert_eq!(
            VerseLoad::from_days(&[6, 12, 25]),
            VerseLoad {
                average: 14,
                min: 6,
                max: 25
            }
        );
        assert_eq!(VerseLoad::from_days(&[]), VerseLoad::default());
    }
}
