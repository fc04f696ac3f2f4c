//! Download format for generated plans.
//!
//! The exported document is indented JSON, except for `dailyReadings`, which
//! is written on a single line with no whitespace between tokens. Per-book
//! counts are derived data and are left out; the generating configuration is
//! kept so the file records how it was built.

use serde::Serialize;
use serde_json::value::RawValue;

use crate::{
    error::Result,
    models::{Plan, PlanFormat},
    params::PlanConfig,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportedPlan<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    plan_type: PlanFormat,
    total_plan_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    daily_readings: &'a RawValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    plan_config: Option<&'a PlanConfig>,
}

/// Render `plan` in the download format.
///
/// ```rust
/// use lectio_core::{export::export_plan_json, params::PlanRequest, GeneratorBuilder};
/// use lectio_core::params::{MultiStreamConfig, Stream};
///
/// let plan = GeneratorBuilder::new()
///     .build()
///     .generate(&PlanRequest::new(MultiStreamConfig {
///         streams: vec![Stream::new(vec![57])],
///         total_plan_days: 1,
///     }))
///     .unwrap();
///
/// let json = export_plan_json(&plan).unwrap();
/// assert!(json.contains(r#""dailyReadings": [[{"bookCode":57,"chapter":1,"bookName":"Philemon"}]]"#));
/// assert!(!json.contains("bookReadingCounts"));
/// ```
pub fn export_plan_json(plan: &Plan) -> Result<String> {
    let daily_readings = serde_json::value::to_raw_value(&plan.daily_readings)?;
    let exported = ExportedPlan {
        id: &plan.id,
        name: &plan.name,
        description: &plan.description,
        plan_type: plan.plan_type,
        total_plan_days: plan.total_plan_days,
        tags: plan.tags.as_deref(),
        author: plan.author.as_deref(),
        version: plan.version.as_deref(),
        daily_readings: &daily_readings,
        plan_config: plan.plan_config.as_ref(),
    };
    Ok(serde_json::to_string_pretty(&exported)?)
}

/// File name for a downloaded plan: the lower-cased name with whitespace
/// runs turned into `-`.
pub fn export_file_name(plan: &Plan) -> String {
    let stem = plan
        .name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    if stem.is_empty() {
        "reading-plan.json".to_string()
    } else {
        format!("{stem}.json")
    }
}
