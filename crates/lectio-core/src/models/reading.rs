//! Reading portion model and verse range expressions.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::books::Book;

/// One reading assignment: a chapter of a book, optionally narrowed to
/// specific verses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ReadingPortion {
    /// Code of the book being read
    pub book_code: u32,

    /// Chapter number (1-based)
    pub chapter: u32,

    /// Denormalized book name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_name: Option<String>,

    /// Verse range expression such as `1-15` or `1,5,10-12`; whole chapter
    /// when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verses: Option<String>,
}

impl ReadingPortion {
    /// A whole-chapter reading of `book`.
    pub fn new(book: &Book, chapter: u32) -> Self {
        Self {
            book_code: book.code,
            chapter,
            book_name: Some(book.name.to_string()),
            verses: None,
        }
    }

    /// Restrict the reading to a verse range expression.
    pub fn with_verses(mut self, verses: Option<String>) -> Self {
        self.verses = verses;
        self
    }

    /// Number of verses named by the verse expression, if there is one and
    /// it parses.
    pub fn verse_span(&self) -> Option<u32> {
        self.verses.as_deref().and_then(count_verses)
    }

    /// Human readable reference, e.g. `Psalms 23:1-4`.
    pub fn reference(&self) -> String {
        let name = self
            .book_name
            .clone()
            .unwrap_or_else(|| format!("Book {}", self.book_code));
        match &self.verses {
            Some(verses) => format!("{name} {}:{verses}", self.chapter),
            None => format!("{name} {}", self.chapter),
        }
    }
}

/// Count the verses named by a range expression.
///
/// The expression is a comma separated list of single verses (`5`) and
/// inclusive ranges (`10-12`). Returns `None` for an empty or malformed
/// expression, or a range whose end precedes its start.
///
/// ```rust
/// use lectio_core::models::count_verses;
///
/// assert_eq!(count_verses("1-15"), Some(15));
/// assert_eq!(count_verses("1,5,10-12"), Some(5));
/// assert_eq!(count_verses("3-1"), None);
/// ```
pub fn count_verses(expression: &str) -> Option<u32> {
    let mut total = 0;
    for part in expression.split(',').map(str::trim) {
        if let Some((start, end)) = part.split_once('-') {
            let start: u32 = start.trim().parse().ok()?;
            let end: u32 = end.trim().parse().ok()?;
            total += end.checked_sub(start)? + 1;
        } else {
            part.parse::<u32>().ok()?;
            total += 1;
        }
    }
    Some(total)
}
