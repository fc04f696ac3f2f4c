//! The static book table and the types describing it.
//!
//! The table is compiled into the binary and never mutated. Generation code
//! receives it through the [`BookTable`] handle rather than reaching for the
//! global directly, so tests and callers can see exactly which reference
//! data a plan was built from.
//!
//! # Examples
//!
//! ```rust
//! use lectio_core::books::{BookTable, Division, Testament};
//!
//! let books = BookTable::canonical();
//! assert_eq!(books.len(), 66);
//! assert_eq!(books.chapter_count(40), 28);
//! assert_eq!(books.codes_by_division(Division::Gospels), vec![40, 41, 42, 43]);
//! assert_eq!(books.codes_by_testament(Testament::New).len(), 27);
//! ```

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

mod data;
pub mod lookup;

use data::BOOKS;

/// The two testaments of the canon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum Testament {
    /// Old Testament (codes 1-39)
    #[serde(rename = "OT")]
    Old,

    /// New Testament (codes 40-66)
    #[serde(rename = "NT")]
    New,
}

impl Testament {
    /// Short label used in the book table and in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Testament::Old => "OT",
            Testament::New => "NT",
        }
    }
}

impl FromStr for Testament {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ot" | "old" | "old-testament" => Ok(Testament::Old),
            "nt" | "new" | "new-testament" => Ok(Testament::New),
            _ => Err(format!("Invalid testament: {s}")),
        }
    }
}

/// Named grouping of books, used for categorization and preset construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum Division {
    Pentateuch,
    Historical,
    #[serde(rename = "Poetry-Wisdom")]
    PoetryWisdom,
    #[serde(rename = "Major Prophets")]
    MajorProphets,
    #[serde(rename = "Minor Prophets")]
    MinorProphets,
    Gospels,
    Acts,
    #[serde(rename = "Pauline Epistles")]
    PaulineEpistles,
    #[serde(rename = "General Epistles")]
    GeneralEpistles,
    Revelation,
}

impl Division {
    /// Every division in canonical book order.
    pub const ALL: [Division; 10] = [
        Division::Pentateuch,
        Division::Historical,
        Division::PoetryWisdom,
        Division::MajorProphets,
        Division::MinorProphets,
        Division::Gospels,
        Division::Acts,
        Division::PaulineEpistles,
        Division::GeneralEpistles,
        Division::Revelation,
    ];

    /// Display label of the division.
    pub fn as_str(&self) -> &'static str {
        match self {
            Division::Pentateuch => "Pentateuch",
            Division::Historical => "Historical",
            Division::PoetryWisdom => "Poetry-Wisdom",
            Division::MajorProphets => "Major Prophets",
            Division::MinorProphets => "Minor Prophets",
            Division::Gospels => "Gospels",
            Division::Acts => "Acts",
            Division::PaulineEpistles => "Pauline Epistles",
            Division::GeneralEpistles => "General Epistles",
            Division::Revelation => "Revelation",
        }
    }
}

impl FromStr for Division {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['_', ' '], "-");
        Division::ALL
            .into_iter()
            .find(|d| d.as_str().to_lowercase().replace(' ', "-") == wanted)
            .ok_or_else(|| format!("Invalid division: {s}"))
    }
}

/// A single book of the canon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Canonical book code (1-66)
    pub code: u32,

    /// English name of the book
    pub name: &'static str,

    /// Testament the book belongs to
    pub testament: Testament,

    /// Division the book is grouped under
    pub division: Division,

    /// Verse count of every chapter, in chapter order
    pub verses_per_chapter: &'static [u32],
}

impl Book {
    /// Number of chapters in the book.
    pub fn chapter_count(&self) -> u32 {
        self.verses_per_chapter.len() as u32
    }

    /// Whether the book is one of the wisdom books.
    pub fn is_wisdom(&self) -> bool {
        lookup::WISDOM_BOOK_CODES.contains(&self.code)
    }
}

/// Read-only handle over a book table.
///
/// Cheap to copy; every lookup in [`lookup`] is a method on this type.
#[derive(Debug, Clone, Copy)]
pub struct BookTable {
    books: &'static [Book],
}

impl BookTable {
    /// The compiled-in 66-book canon.
    pub fn canonical() -> Self {
        Self { books: &BOOKS }
    }

    /// Wraps an arbitrary static table. Books are expected in ascending code
    /// order.
    pub fn from_static(books: &'static [Book]) -> Self {
        Self { books }
    }

    /// All books in table order.
    pub fn books(&self) -> &'static [Book] {
        self.books
    }

    /// Number of books in the table.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for BookTable {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        let books = BookTable::canonical();
        assert_eq!(books.len(), 66);

        let chapters: u32 = books.books().iter().map(Book::chapter_count).sum();
        assert_eq!(chapters, 1189);

        let verses: u32 = books
            .books()
            .iter()
            .flat_map(|b| b.verses_per_chapter.iter())
            .sum();
        assert_eq!(verses, 31102);
    }

    #[test]
    fn test_codes_match_testaments() {
        for (index, book) in BookTable::canonical().books().iter().enumerate() {
            assert_eq!(book.code as usize, index + 1);
            let expected = if book.code <= 39 {
                Testament::Old
            } else {
                Testament::New
            };
            assert_eq!(book.testament, expected, "{}", book.name);
        }
    }

    #[test]
    fn test_division_from_str() {
        assert_eq!("Poetry-Wisdom".parse::<Division>(), Ok(Division::PoetryWisdom));
        assert_eq!("major prophets".parse::<Division>(), Ok(Division::MajorProphets));
        assert_eq!(
            "pauline-epistles".parse::<Division>(),
            Ok(Division::PaulineEpistles)
        );
        assert!("Apocrypha".parse::<Division>().is_err());
    }

    #[test]
    fn test_testament_from_str() {
        assert_eq!("OT".parse::<Testament>(), Ok(Testament::Old));
        assert_eq!("new".parse::<Testament>(), Ok(Testament::New));
        assert!("both".parse::<Testament>().is_err());
    }

    #[test]
    fn test_division_serde_labels() {
        let json = serde_json::to_string(&Division::MinorProphets).unwrap();
        assert_eq!(json, "\"Minor Prophets\"");
        let json = serde_json::to_string(&Testament::New).unwrap();
        assert_eq!(json, "\"NT\"");
    }
}
