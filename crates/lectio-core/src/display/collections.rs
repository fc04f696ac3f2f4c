//! Listing wrappers for the book table.

use std::fmt;

use crate::books::{Book, BookTable, Division, Testament};

/// Newtype wrapper for displaying a list of books as a markdown table.
///
/// # Examples
///
/// ```rust
/// use lectio_core::{books::Division, display::Books, BookTable};
///
/// let books = BookTable::canonical();
/// let gospels = Books::filtered(books, None, Some(Division::Gospels));
/// assert_eq!(gospels.len(), 4);
/// assert!(gospels.to_string().contains("| 43 | John | NT | Gospels | 21 |"));
/// ```
pub struct Books(pub Vec<&'static Book>);

impl Books {
    /// Books of `table` matching the optional testament and division.
    pub fn filtered(
        table: BookTable,
        testament: Option<Testament>,
        division: Option<Division>,
    ) -> Self {
        Self(
            table
                .books()
                .iter()
                .filter(|book| testament.is_none_or(|t| book.testament == t))
                .filter(|book| division.is_none_or(|d| book.division == d))
                .collect(),
        )
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of books in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the books.
    pub fn iter(&self) -> impl Iterator<Item = &'static Book> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for Books {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No books found.");
        }
        writeln!(f, "| Code | Book | Testament | Division | Chapters |")?;
        writeln!(f, "|---:|:---|:---:|:---|---:|")?;
        for book in &self.0 {
            writeln!(
                f,
                "| {} | {} | {} | {} | {} |",
                book.code,
                book.name,
                book.testament,
                book.division,
                book.chapter_count()
            )?;
        }
        Ok(())
    }
}

/// Divisions with their books and chapter totals.
pub struct Divisions {
    table: BookTable,
    divisions: Vec<Division>,
}

impl Divisions {
    /// Divisions of `table`, optionally limited to one testament.
    pub fn new(table: BookTable, testament: Option<Testament>) -> Self {
        Self {
            table,
            divisions: table.all_divisions(testament),
        }
    }

    pub fn divisions(&self) -> &[Division] {
        &self.divisions
    }
}

impl fmt::Display for Divisions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.divisions.is_empty() {
            return writeln!(f, "No divisions found.");
        }
        writeln!(f, "| Division | Books | Chapters |")?;
        writeln!(f, "|:---|:---|---:|")?;
        for &division in &self.divisions {
            let codes = self.table.codes_by_division(division);
            let span = match (codes.first(), codes.last()) {
                (Some(first), Some(last)) if first != last => format!(
                    "{} to {}",
                    self.table.book_name(*first),
                    self.table.book_name(*last)
                ),
                (Some(only), _) => self.table.book_name(*only),
                _ => String::new(),
            };
            writeln!(
                f,
                "| {division} | {span} | {} |",
                self.table.total_chapters_in_division(division)
            )?;
        }
        Ok(())
    }
}
