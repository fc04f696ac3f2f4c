//! Builder for creating and configuring Generator instances.

use super::Generator;
use crate::books::BookTable;

/// Builder for creating and configuring Generator instances.
#[derive(Debug, Clone, Default)]
pub struct GeneratorBuilder {
    books: Option<BookTable>,
    default_author: Option<String>,
    default_version: Option<String>,
}

impl GeneratorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the book table to generate from.
    ///
    /// If not specified, uses the compiled-in 66-book canon.
    pub fn with_book_table(mut self, books: BookTable) -> Self {
        self.books = Some(books);
        self
    }

    /// Author recorded on plans whose request names none.
    pub fn with_default_author(mut self, author: impl Into<String>) -> Self {
        self.default_author = Some(author.into());
        self
    }

    /// Version recorded on plans whose request names none.
    pub fn with_default_version(mut self, version: impl Into<String>) -> Self {
        self.default_version = Some(version.into());
        self
    }

    /// Builds the configured generator instance.
    pub fn build(self) -> Generator {
        Generator::new(
            self.books.unwrap_or_default(),
            self.default_author,
            self.default_version,
        )
    }
}
