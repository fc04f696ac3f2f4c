//! Data models for generated reading plans.
//!
//! A [`Plan`] is a value: it is built once by the
//! [`Generator`](crate::generator::Generator) and never mutated afterwards.
//! Statistics, export and display all read from it. Display implementations
//! live in [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use lectio_core::models::ReadingPortion;
//!
//! let portion = ReadingPortion {
//!     book_code: 19,
//!     chapter: 23,
//!     book_name: Some("Psalms".to_string()),
//!     verses: Some("1-4".to_string()),
//! };
//! assert_eq!(portion.verse_span(), Some(4));
//! ```

pub mod plan;
pub mod reading;

pub use plan::{parse_plan, Plan, PlanFormat};
pub use reading::{count_verses, ReadingPortion};
