//! Ready-made multi-stream configurations.
//!
//! Presets expand a handful of choices (or none at all) into concrete
//! [`Stream`]s for [`Generator::generate_multi_stream_plan`]. Each returns a
//! [`MultiStreamConfig`] that can be edited before generation.
//!
//! [`Generator::generate_multi_stream_plan`]: crate::Generator::generate_multi_stream_plan
//!
//! # Examples
//!
//! ```rust
//! use lectio_core::presets::{
//!     create_whole_bible_config, NewTestamentPlacement, WholeBibleOptions,
//!     WisdomBooksPlacement,
//! };
//! use lectio_core::BookTable;
//!
//! let config = create_whole_bible_config(
//!     BookTable::canonical(),
//!     &WholeBibleOptions {
//!         new_testament_placement: NewTestamentPlacement::Alongside,
//!         wisdom_books_placement: WisdomBooksPlacement::Alongside,
//!         included_wisdom_books: vec!["Psalms".to_string(), "Proverbs".to_string()],
//!         total_plan_days: 365,
//!     },
//! )
//! .unwrap();
//!
//! // OT without Psalms and Proverbs, NT, then the wisdom stream
//! assert_eq!(config.streams.len(), 3);
//! assert_eq!(config.streams[2].book_codes, vec![19, 20]);
//! ```

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    books::{BookTable, Testament},
    error::{PlanError, Result},
    params::{MultiStreamConfig, PlanMetadata, PlanRequest, Stream},
};

/// Days in the yearly presets.
pub const YEARLY_PLAN_DAYS: u32 = 365;

/// Days in the workweek preset (52 weeks of 5 days).
pub const WORKWEEK_PLAN_DAYS: u32 = 260;

/// Where the New Testament goes in a whole-Bible plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum NewTestamentPlacement {
    /// Separate NT stream read in parallel with the OT
    #[default]
    Alongside,
    /// NT appended to the OT in a single stream
    After,
}

/// Where the wisdom books go in a whole-Bible plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum WisdomBooksPlacement {
    /// Separate wisdom stream read in parallel
    #[default]
    Alongside,
    /// Wisdom books left in their OT position
    Within,
}

impl FromStr for NewTestamentPlacement {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alongside" => Ok(NewTestamentPlacement::Alongside),
            "after" => Ok(NewTestamentPlacement::After),
            _ => Err(format!("Invalid New Testament placement: {s}")),
        }
    }
}

impl FromStr for WisdomBooksPlacement {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alongside" => Ok(WisdomBooksPlacement::Alongside),
            "within" => Ok(WisdomBooksPlacement::Within),
            _ => Err(format!("Invalid wisdom books placement: {s}")),
        }
    }
}

/// Options for [`create_whole_bible_config`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct WholeBibleOptions {
    /// Read the NT alongside the OT or after it
    #[serde(default)]
    pub new_testament_placement: NewTestamentPlacement,
    /// Read the wisdom books in their own stream or within the OT
    #[serde(default)]
    pub wisdom_books_placement: WisdomBooksPlacement,
    /// Names of the wisdom books to pull out of the OT, e.g. "Psalms"
    #[serde(default)]
    pub included_wisdom_books: Vec<String>,
    /// Target plan length in days
    pub total_plan_days: u32,
}

/// Named presets offered by the front ends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum Preset {
    /// Every book of the Bible, load-balanced over the plan length
    #[serde(rename = "whole-bible")]
    WholeBible,
    /// The New Testament, load-balanced over the plan length
    #[serde(rename = "new-testament")]
    NewTestament,
    /// Professor Horner's 10-stream system
    #[serde(rename = "horner")]
    Horner,
    /// M'Cheyne family plan: OT once, Psalms and NT twice
    #[serde(rename = "mcheyne")]
    MCheyne,
    /// Pentateuch and wisdom literature on weekdays
    #[serde(rename = "workweek")]
    Workweek,
    /// Genesis and Exodus, then the New Testament
    #[serde(rename = "genesis-exodus-nt")]
    GenesisExodusThenNt,
}

/// Choices applied when expanding a [`Preset`].
///
/// Placement options only affect [`Preset::WholeBible`]. `total_plan_days`
/// overrides the preset's own length; the load-balanced presets default to a
/// year.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PresetOptions {
    /// Plan length in days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_plan_days: Option<u32>,
    /// Read the NT alongside the OT (default) or after it
    #[serde(default)]
    pub new_testament_placement: NewTestamentPlacement,
    /// Read the wisdom books in their own stream (default) or within the OT
    #[serde(default)]
    pub wisdom_books_placement: WisdomBooksPlacement,
    /// Wisdom books to read separately; all five when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included_wisdom_books: Option<Vec<String>>,
}

impl Preset {
    /// Every preset.
    pub const ALL: [Preset; 6] = [
        Preset::WholeBible,
        Preset::NewTestament,
        Preset::Horner,
        Preset::MCheyne,
        Preset::Workweek,
        Preset::GenesisExodusThenNt,
    ];

    /// Presets with fixed streams that need no options.
    pub const FIXED: [Preset; 4] = [
        Preset::Horner,
        Preset::MCheyne,
        Preset::Workweek,
        Preset::GenesisExodusThenNt,
    ];

    /// Short command-line name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::WholeBible => "whole-bible",
            Preset::NewTestament => "new-testament",
            Preset::Horner => "horner",
            Preset::MCheyne => "mcheyne",
            Preset::Workweek => "workweek",
            Preset::GenesisExodusThenNt => "genesis-exodus-nt",
        }
    }

    /// Display name used for generated plans.
    pub fn title(&self) -> &'static str {
        match self {
            Preset::WholeBible => "Whole Bible",
            Preset::NewTestament => "New Testament",
            Preset::Horner => "Professor Horner's Bible Reading System",
            Preset::MCheyne => "M'Cheyne Family Worship Plan",
            Preset::Workweek => "Workweek Plan",
            Preset::GenesisExodusThenNt => "Genesis, Exodus, then the New Testament",
        }
    }

    /// One-line description of the preset.
    pub fn description(&self) -> &'static str {
        match self {
            Preset::WholeBible => "Every book of the Bible, spread evenly over the plan.",
            Preset::NewTestament => "The New Testament, spread evenly over the plan.",
            Preset::Horner => {
                "Ten streams read in parallel, each cycling through one section of the Bible."
            }
            Preset::MCheyne => {
                "The Old Testament once and the New Testament and Psalms twice in a year."
            }
            Preset::Workweek => "The Pentateuch and wisdom literature, five days a week.",
            Preset::GenesisExodusThenNt => {
                "Genesis and Exodus followed by the whole New Testament, one chapter a day."
            }
        }
    }

    /// Expand the preset into streams and a duration.
    pub fn config(&self, books: BookTable, options: &PresetOptions) -> Result<MultiStreamConfig> {
        let days = options.total_plan_days;
        let mut config = match self {
            Preset::WholeBible => {
                let included_wisdom_books = match &options.included_wisdom_books {
                    Some(names) => names.clone(),
                    None => books
                        .wisdom_book_codes()
                        .into_iter()
                        .map(|code| books.book_name(code))
                        .collect(),
                };
                return create_whole_bible_config(
                    books,
                    &WholeBibleOptions {
                        new_testament_placement: options.new_testament_placement,
                        wisdom_books_placement: options.wisdom_books_placement,
                        included_wisdom_books,
                        total_plan_days: days.unwrap_or(YEARLY_PLAN_DAYS),
                    },
                );
            }
            Preset::NewTestament => {
                return create_new_testament_config(books, days.unwrap_or(YEARLY_PLAN_DAYS));
            }
            Preset::Horner => create_horner_config(),
            Preset::MCheyne => create_mcheyne_config(),
            Preset::Workweek => create_workweek_config(),
            Preset::GenesisExodusThenNt => create_genesis_exodus_then_nt_config(),
        };
        if let Some(days) = days {
            if days == 0 {
                return Err(
                    PlanError::invalid_input("totalPlanDays").with_reason("must be at least 1")
                );
            }
            config.total_plan_days = days;
        }
        Ok(config)
    }

    /// A complete generation request for the preset, named after it.
    pub fn request(&self, books: BookTable, options: &PresetOptions) -> Result<PlanRequest> {
        let metadata =
            PlanMetadata::named(self.as_str(), self.title()).with_description(self.description());
        Ok(PlanRequest::new(self.config(books, options)?).with_metadata(metadata))
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        Preset::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| format!("Invalid preset: {s}"))
    }
}

/// Map wisdom book names to their codes, dropping names that are not wisdom
/// books.
pub fn wisdom_codes_for_names<S: AsRef<str>>(names: &[S]) -> Vec<u32> {
    names
        .iter()
        .filter_map(|name| match name.as_ref() {
            "Job" => Some(18),
            "Psalms" => Some(19),
            "Proverbs" => Some(20),
            "Ecclesiastes" => Some(21),
            "Song of Solomon" => Some(22),
            _ => None,
        })
        .collect()
}

/// Build the streams for reading the whole Bible in `total_plan_days`.
///
/// - `after`: one stream, OT then NT.
/// - `alongside`: an OT stream and an NT stream.
///
/// With wisdom placement `alongside`, the included wisdom books are taken out
/// of the OT and read in a stream of their own; with `within` they stay in
/// their canonical OT position. Every stream is then load-balanced so it
/// finishes within the target duration.
pub fn create_whole_bible_config(
    books: BookTable,
    options: &WholeBibleOptions,
) -> Result<MultiStreamConfig> {
    let mut wisdom_codes = wisdom_codes_for_names(&options.included_wisdom_books);
    wisdom_codes.sort_unstable();
    wisdom_codes.dedup();

    let mut ot_codes = books.codes_by_testament(Testament::Old);
    if options.wisdom_books_placement != WisdomBooksPlacement::Within {
        ot_codes.retain(|code| !wisdom_codes.contains(code));
    }
    let nt_codes = books.codes_by_testament(Testament::New);

    let mut streams = match options.new_testament_placement {
        NewTestamentPlacement::After => {
            let mut codes = ot_codes;
            codes.extend(nt_codes);
            vec![Stream::new(codes).labelled("Whole Bible")]
        }
        NewTestamentPlacement::Alongside => vec![
            Stream::new(ot_codes).labelled("Old Testament"),
            Stream::new(nt_codes).labelled("New Testament"),
        ],
    };

    if options.wisdom_books_placement == WisdomBooksPlacement::Alongside
        && !wisdom_codes.is_empty()
    {
        streams.push(Stream::new(wisdom_codes).labelled("Wisdom"));
    }

    balance_chapters_per_day(books, &mut streams, options.total_plan_days)?;

    Ok(MultiStreamConfig {
        streams,
        total_plan_days: options.total_plan_days,
    })
}

/// A single New Testament stream, load-balanced over `total_plan_days`.
pub fn create_new_testament_config(
    books: BookTable,
    total_plan_days: u32,
) -> Result<MultiStreamConfig> {
    let mut streams =
        vec![Stream::new(books.codes_by_testament(Testament::New)).labelled("New Testament")];
    balance_chapters_per_day(books, &mut streams, total_plan_days)?;
    Ok(MultiStreamConfig {
        streams,
        total_plan_days,
    })
}

/// Set every stream's `chapters_per_day` to
/// `max(1, ceil(chapters / total_plan_days))`.
pub fn balance_chapters_per_day(
    books: BookTable,
    streams: &mut [Stream],
    total_plan_days: u32,
) -> Result<()> {
    if total_plan_days == 0 {
        return Err(PlanError::invalid_input("totalPlanDays").with_reason("must be at least 1"));
    }
    for stream in streams.iter_mut() {
        let chapters = books.total_chapters(&stream.book_codes);
        stream.chapters_per_day = Some(chapters.div_ceil(total_plan_days).max(1));
    }
    Ok(())
}

/// Professor Horner's 10-stream system, one chapter per stream per day.
pub fn create_horner_config() -> MultiStreamConfig {
    MultiStreamConfig {
        streams: vec![
            Stream::new((1..=5).collect()).labelled("Pentateuch"),
            Stream::new((6..=17).collect()).labelled("OT History"),
            Stream::new((18..=22).collect()).labelled("Poetry"),
            Stream::new((23..=27).collect()).labelled("Major Prophets"),
            Stream::new((28..=39).collect()).labelled("Minor Prophets"),
            Stream::new((40..=43).collect()).labelled("Gospels"),
            Stream::new(vec![44]).labelled("Acts"),
            Stream::new((45..=53).collect()).labelled("Pauline Epistles"),
            Stream::new((54..=65).collect()).labelled("General Epistles"),
            Stream::new(vec![66]).labelled("Revelation"),
        ],
        total_plan_days: YEARLY_PLAN_DAYS,
    }
}

/// M'Cheyne family plan: two OT streams without Psalms, two Psalms + NT
/// streams.
pub fn create_mcheyne_config() -> MultiStreamConfig {
    let old_testament: Vec<u32> = (1..=39).filter(|&code| code != 19).collect();
    let psalms_and_nt: Vec<u32> = std::iter::once(19).chain(40..=66).collect();

    MultiStreamConfig {
        streams: vec![
            Stream::new(old_testament.clone()).labelled("Old Testament I"),
            Stream::new(old_testament).labelled("Old Testament II"),
            Stream::new(psalms_and_nt.clone()).labelled("Psalms and New Testament I"),
            Stream::new(psalms_and_nt).labelled("Psalms and New Testament II"),
        ],
        total_plan_days: YEARLY_PLAN_DAYS,
    }
}

/// Pentateuch and wisdom literature over 52 five-day weeks.
pub fn create_workweek_config() -> MultiStreamConfig {
    MultiStreamConfig {
        streams: vec![
            Stream::new(vec![1, 2, 3, 4, 5]).labelled("Pentateuch"),
            Stream::new(vec![19, 20, 21, 22]).labelled("Wisdom Literature"),
        ],
        total_plan_days: WORKWEEK_PLAN_DAYS,
    }
}

/// One stream: Genesis, Exodus, then the New Testament.
pub fn create_genesis_exodus_then_nt_config() -> MultiStreamConfig {
    MultiStreamConfig {
        streams: vec![Stream::new([1, 2].into_iter().chain(40..=66).collect())
            .labelled("Genesis, Exodus and New Testament")],
        total_plan_days: YEARLY_PLAN_DAYS,
    }
}
