//! Query functions over a [`BookTable`].
//!
//! All lookups are total: a missing book yields `None`, `0` or an empty list,
//! never an error. Callers on generation paths log and skip.

use super::{Book, BookTable, Division, Testament};

/// Codes of Job, Psalms, Proverbs, Ecclesiastes and Song of Solomon.
pub const WISDOM_BOOK_CODES: [u32; 5] = [18, 19, 20, 21, 22];

impl BookTable {
    /// Get a book by its code.
    pub fn book_by_code(&self, code: u32) -> Option<&'static Book> {
        self.books.iter().find(|b| b.code == code)
    }

    /// Number of chapters in a book, 0 if the book is unknown.
    pub fn chapter_count(&self, code: u32) -> u32 {
        self.book_by_code(code).map_or(0, Book::chapter_count)
    }

    /// Number of verses in a chapter (1-based), 0 if out of range.
    pub fn verse_count(&self, code: u32, chapter: u32) -> u32 {
        let Some(index) = chapter.checked_sub(1) else {
            return 0;
        };
        self.book_by_code(code)
            .and_then(|b| b.verses_per_chapter.get(index as usize))
            .copied()
            .unwrap_or(0)
    }

    /// Codes of every book in a testament, in canonical order.
    pub fn codes_by_testament(&self, testament: Testament) -> Vec<u32> {
        self.books
            .iter()
            .filter(|b| b.testament == testament)
            .map(|b| b.code)
            .collect()
    }

    /// Codes of every book in a division, in canonical order.
    pub fn codes_by_division(&self, division: Division) -> Vec<u32> {
        self.books
            .iter()
            .filter(|b| b.division == division)
            .map(|b| b.code)
            .collect()
    }

    /// Codes of the books in a division restricted to one testament.
    pub fn codes_by_testament_and_division(
        &self,
        testament: Testament,
        division: Division,
    ) -> Vec<u32> {
        self.books
            .iter()
            .filter(|b| b.testament == testament && b.division == division)
            .map(|b| b.code)
            .collect()
    }

    /// Sum of chapter counts over a division.
    pub fn total_chapters_in_division(&self, division: Division) -> u32 {
        self.total_chapters(&self.codes_by_division(division))
    }

    /// Sum of chapter counts over a testament.
    pub fn total_chapters_in_testament(&self, testament: Testament) -> u32 {
        self.total_chapters(&self.codes_by_testament(testament))
    }

    /// Sum of chapter counts over arbitrary codes. Unknown codes count as 0.
    pub fn total_chapters(&self, codes: &[u32]) -> u32 {
        codes.iter().map(|&code| self.chapter_count(code)).sum()
    }

    /// Name of a book, or `Book {code}` when the code is unknown.
    pub fn book_name(&self, code: u32) -> String {
        self.book_by_code(code)
            .map_or_else(|| format!("Book {code}"), |b| b.name.to_string())
    }

    /// Division of a book.
    pub fn division_of(&self, code: u32) -> Option<Division> {
        self.book_by_code(code).map(|b| b.division)
    }

    /// Testament of a book.
    pub fn testament_of(&self, code: u32) -> Option<Testament> {
        self.book_by_code(code).map(|b| b.testament)
    }

    /// The fixed wisdom-book subset.
    pub fn wisdom_book_codes(&self) -> Vec<u32> {
        WISDOM_BOOK_CODES.to_vec()
    }

    /// Distinct divisions present in the table, optionally limited to one
    /// testament, in the order their first book appears.
    pub fn all_divisions(&self, testament: Option<Testament>) -> Vec<Division> {
        let mut divisions = Vec::new();
        for book in self.books {
            if testament.is_some_and(|t| t != book.testament) {
                continue;
            }
            if !divisions.contains(&book.division) {
                divisions.push(book.division);
            }
        }
        divisions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn books() -> BookTable {
        BookTable::canonical()
    }

    #[test]
    fn test_book_by_code() {
        let matthew = books().book_by_code(40).expect("Matthew should exist");
        assert_eq!(matthew.name, "Matthew");
        assert_eq!(matthew.chapter_count(), 28);
        assert!(books().book_by_code(0).is_none());
        assert!(books().book_by_code(9999).is_none());
    }

    #[test]
    fn test_chapter_and_verse_counts() {
        assert_eq!(books().chapter_count(19), 150);
        assert_eq!(books().chapter_count(9999), 0);
        assert_eq!(books().verse_count(19, 119), 176);
        assert_eq!(books().verse_count(43, 11), 57);
        assert_eq!(books().verse_count(43, 0), 0);
        assert_eq!(books().verse_count(43, 22), 0);
    }

    #[test]
    fn test_codes_by_testament() {
        let ot = books().codes_by_testament(Testament::Old);
        assert_eq!(ot, (1..=39).collect::<Vec<_>>());
        let nt = books().codes_by_testament(Testament::New);
        assert_eq!(nt, (40..=66).collect::<Vec<_>>());
    }

    #[test]
    fn test_division_queries() {
        assert_eq!(
            books().codes_by_division(Division::PoetryWisdom),
            vec![18, 19, 20, 21, 22]
        );
        assert_eq!(books().total_chapters_in_division(Division::Pentateuch), 187);
        assert_eq!(books().total_chapters_in_division(Division::Gospels), 89);
        assert!(books()
            .codes_by_testament_and_division(Testament::New, Division::Pentateuch)
            .is_empty());
    }

    #[test]
    fn test_testament_totals() {
        assert_eq!(books().total_chapters_in_testament(Testament::Old), 929);
        assert_eq!(books().total_chapters_in_testament(Testament::New), 260);
    }

    #[test]
    fn test_names_and_metadata() {
        assert_eq!(books().book_name(22), "Song of Solomon");
        assert_eq!(books().book_name(70), "Book 70");
        assert_eq!(books().division_of(44), Some(Division::Acts));
        assert_eq!(books().testament_of(39), Some(Testament::Old));
        assert_eq!(books().testament_of(0), None);
    }

    #[test]
    fn test_wisdom_books() {
        let wisdom = books().wisdom_book_codes();
        assert_eq!(wisdom, vec![18, 19, 20, 21, 22]);
        let names: Vec<_> = wisdom.iter().map(|&c| books().book_name(c)).collect();
        assert_eq!(
            names,
            ["Job", "Psalms", "Proverbs", "Ecclesiastes", "Song of Solomon"]
        );
    }

    #[test]
    fn test_all_divisions() {
        assert_eq!(books().all_divisions(None), Division::ALL.to_vec());
        assert_eq!(
            books().all_divisions(Some(Testament::Old)),
            vec![
                Division::Pentateuch,
                Division::Historical,
                Division::PoetryWisdom,
                Division::MajorProphets,
                Division::MinorProphets,
            ]
        );
    }
}
