//! Request structures for plan generation
//!
//! This module contains the configuration shapes shared by every interface
//! (CLI, MCP, library callers). They carry serde derives for the JSON request
//! format and, behind the `schema` feature, `schemars::JsonSchema` derives for
//! MCP tool schemas. No interface-specific attributes live here.
//!
//! ## Request Format
//!
//! A [`PlanRequest`] is a flat JSON object: the optional [`PlanMetadata`]
//! fields sit next to a `planType` discriminator that selects one of the four
//! [`PlanConfig`] variants.
//!
//! ```text
//! {
//!   "planType": "multi-stream",       ← PlanConfig tag
//!   "name": "Two streams",            ← PlanMetadata
//!   "streams": [...],                 ← MultiStreamConfig
//!   "totalPlanDays": 365
//! }
//! ```
//!
//! An unknown or missing `planType` is rejected while decoding, before any
//! generation work starts. Use [`parse_plan_request`] to get that rejection as
//! a [`PlanError::InvalidInput`](crate::error::PlanError::InvalidInput).
//!
//! ```rust
//! use lectio_core::params::{parse_plan_request, PlanConfig};
//!
//! let request = parse_plan_request(
//!     r#"{"planType": "sequential", "booksToInclude": [{"bookCode": 40}]}"#,
//! )
//! .unwrap();
//! assert!(matches!(request.config, PlanConfig::Sequential(_)));
//!
//! let err = parse_plan_request(r#"{"planType": "lectionary"}"#).unwrap_err();
//! assert!(err.is_client_error());
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{RequestResultExt, Result};

/// A book to read sequentially, optionally limited to a chapter range.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct BookSelection {
    /// Code of the book (1-66)
    pub book_code: u32,
    /// First chapter to read (defaults to 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_chapter: Option<u32>,
    /// Last chapter to read (defaults to the book's last chapter)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_chapter: Option<u32>,
}

impl BookSelection {
    /// Select a whole book.
    pub fn whole(book_code: u32) -> Self {
        Self {
            book_code,
            ..Default::default()
        }
    }
}

/// An explicit reading given by book, chapter and optional verses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ExplicitReading {
    /// Code of the book (1-66)
    pub book_code: u32,
    /// Chapter number (1-based)
    pub chapter: u32,
    /// Verse range expression such as "1-15" or "1,5,10-12"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verses: Option<String>,
}

/// One parallel reading track.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    /// Books read by this stream, in order; the stream wraps to the first
    /// book after the last
    pub book_codes: Vec<u32>,
    /// Chapters read from this stream each day (defaults to 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapters_per_day: Option<u32>,
    /// Optional display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Stream {
    /// A stream over `book_codes` reading one chapter per day.
    pub fn new(book_codes: Vec<u32>) -> Self {
        Self {
            book_codes,
            ..Default::default()
        }
    }

    /// Attach a display label.
    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A named group of readings for a topical plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Topic {
    /// Topic name
    pub name: String,
    /// Readings in this topic, in order
    #[serde(default)]
    pub readings: Vec<ExplicitReading>,
}

/// Parameters for a sequential plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SequentialConfig {
    /// Books to read, in reading order
    pub books_to_include: Vec<BookSelection>,
    /// Chapters per day (defaults to 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapters_per_day: Option<u32>,
    /// Stop after this many days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_plan_days: Option<u32>,
}

/// Parameters for a multi-stream plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct MultiStreamConfig {
    /// Parallel streams, read in this order each day
    pub streams: Vec<Stream>,
    /// Number of days to generate
    pub total_plan_days: u32,
}

/// Parameters for a topical plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct TopicalConfig {
    /// Topics, read in order
    pub topics: Vec<Topic>,
    /// Readings per day (defaults to 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readings_per_day: Option<u32>,
}

/// Parameters for a chronological plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ChronologicalConfig {
    /// Readings already in chronological order
    pub chronological_sequence: Vec<ExplicitReading>,
    /// Readings per day (defaults to 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readings_per_day: Option<u32>,
    /// Stop after this many days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_plan_days: Option<u32>,
}

/// Generation parameters, discriminated by `planType`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(tag = "planType", rename_all = "kebab-case")]
pub enum PlanConfig {
    /// Read selected books front to back
    Sequential(SequentialConfig),
    /// Read several cyclic streams in parallel
    MultiStream(MultiStreamConfig),
    /// Read explicit readings grouped by topic
    Topical(TopicalConfig),
    /// Read an explicit chronological sequence
    Chronological(ChronologicalConfig),
}

impl PlanConfig {
    /// The `planType` tag of this configuration.
    pub fn plan_type(&self) -> &'static str {
        match self {
            PlanConfig::Sequential(_) => "sequential",
            PlanConfig::MultiStream(_) => "multi-stream",
            PlanConfig::Topical(_) => "topical",
            PlanConfig::Chronological(_) => "chronological",
        }
    }
}

impl From<MultiStreamConfig> for PlanConfig {
    fn from(config: MultiStreamConfig) -> Self {
        PlanConfig::MultiStream(config)
    }
}

/// Descriptive fields copied onto the generated plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanMetadata {
    /// Plan identifier
    #[serde(default)]
    pub id: String,
    /// Plan name
    #[serde(default)]
    pub name: String,
    /// Plan description
    #[serde(default)]
    pub description: String,
    /// Free-form tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Plan author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Plan version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl PlanMetadata {
    /// Metadata with an id and a name.
    pub fn named(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A complete generation request: metadata plus a tagged configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanRequest {
    /// Descriptive fields for the plan
    #[serde(flatten)]
    pub metadata: PlanMetadata,
    /// Generation parameters
    #[serde(flatten)]
    pub config: PlanConfig,
}

impl PlanRequest {
    /// A request with empty metadata.
    pub fn new(config: impl Into<PlanConfig>) -> Self {
        Self {
            metadata: PlanMetadata::default(),
            config: config.into(),
        }
    }

    /// Replace the metadata.
    pub fn with_metadata(mut self, metadata: PlanMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Decode a JSON request, reporting malformed input as
/// [`PlanError::InvalidInput`](crate::error::PlanError::InvalidInput).
pub fn parse_plan_request(json: &str) -> Result<PlanRequest> {
    serde_json::from_str(json).invalid_request("request")
}
