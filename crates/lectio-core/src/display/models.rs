//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the models stay plain data.

use std::fmt;

use crate::{
    books::{Division, Testament},
    models::{Plan, ReadingPortion},
};

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ReadingPortion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reference())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = if self.name.is_empty() {
            "Reading Plan"
        } else {
            &self.name
        };
        writeln!(f, "# {title}")?;
        writeln!(f)?;

        // Metadata section
        if !self.id.is_empty() {
            writeln!(f, "- ID: {}", self.id)?;
        }
        writeln!(f, "- Days: {}", self.total_plan_days)?;
        writeln!(f, "- Readings: {}", self.total_readings())?;
        if let Some(author) = &self.author {
            writeln!(f, "- Author: {author}")?;
        }
        if let Some(version) = &self.version {
            writeln!(f, "- Version: {version}")?;
        }
        if let Some(tags) = self.tags.as_ref().filter(|tags| !tags.is_empty()) {
            writeln!(f, "- Tags: {}", tags.join(", "))?;
        }

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        if self.daily_readings.is_empty() {
            return writeln!(f, "\nNo readings in this plan.");
        }

        writeln!(f, "\n## Readings")?;
        writeln!(f)?;
        for (index, day) in self.daily_readings.iter().enumerate() {
            write!(f, "- **Day {}**: ", index + 1)?;
            if day.is_empty() {
                writeln!(f, "rest")?;
                continue;
            }
            for (position, portion) in day.iter().enumerate() {
                if position > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{portion}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
