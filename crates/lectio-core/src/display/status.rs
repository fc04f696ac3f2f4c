//! Status and confirmation message types for operation feedback.

use std::{fmt, path::Path};

use crate::models::Plan;

/// Wrapper type for displaying the outcome of a side-effecting operation,
/// such as writing an exported plan to disk.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }

    /// Confirmation that `plan` was written to `path`.
    pub fn plan_written(plan: &Plan, path: &Path) -> Self {
        let name = if plan.name.is_empty() {
            "plan"
        } else {
            plan.name.as_str()
        };
        Self::success(format!(
            "Wrote {} ({} days) to {}",
            name,
            plan.total_plan_days,
            path.display()
        ))
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Done" } else { "Failed" };
        writeln!(f, "**{label}**: {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::models::PlanFormat;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("exported");
        assert_eq!(success.to_string(), "**Done**: exported\n");

        let failure = OperationStatus::failure("could not write plan");
        assert!(failure.to_string().starts_with("**Failed**:"));
    }

    #[test]
    fn test_plan_written() {
        let plan = Plan {
            id: String::new(),
            name: "Acts".to_string(),
            description: String::new(),
            plan_type: PlanFormat::PrecalculatedDailyJson,
            total_plan_days: 28,
            tags: None,
            author: None,
            version: None,
            daily_readings: vec![],
            book_reading_counts: BTreeMap::new(),
            plan_config: None,
        };
        let status = OperationStatus::plan_written(&plan, Path::new("acts.json"));
        assert_eq!(status.message, "Wrote Acts (28 days) to acts.json");
    }
}
