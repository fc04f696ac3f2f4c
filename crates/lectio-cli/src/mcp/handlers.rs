//! MCP tool handlers implementation
//!
//! Tool parameter types live here rather than in the core: they add the
//! response format and wrap core request types, which only matter to MCP
//! clients.

use lectio_core::{
    display::{Books, PlanReport},
    export_plan_json, Division, Generator, Plan, PlanRequest, Preset, PresetOptions, Testament,
};
use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::to_mcp_error;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// How a tool should format its response
#[derive(Debug, Clone, Copy, Default, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// The JSON download format
    #[default]
    Json,
    /// Human readable markdown
    Markdown,
}

/// Parameters for generating a plan from an explicit request
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GeneratePlanParams {
    /// Plan request; `planType` selects sequential, multi-stream, topical or
    /// chronological
    pub request: PlanRequest,
    /// Response format (defaults to json)
    #[serde(default)]
    pub format: ResponseFormat,
}

/// Parameters for generating a plan from a preset
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GeneratePresetParams {
    /// Preset name
    pub preset: Preset,
    /// Options for the preset
    #[serde(default)]
    pub options: PresetOptions,
    /// Response format (defaults to json)
    #[serde(default)]
    pub format: ResponseFormat,
}

/// Parameters for computing plan statistics
#[derive(Debug, Deserialize, JsonSchema)]
pub struct PlanStatisticsParams {
    /// A plan as returned by generate_plan or generate_preset
    pub plan: Plan,
    /// Response format (defaults to json)
    #[serde(default)]
    pub format: ResponseFormat,
}

/// Parameters for listing books
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListBooksParams {
    /// Only books of this testament ("OT" or "NT")
    #[serde(default)]
    pub testament: Option<Testament>,
    /// Only books of this division, e.g. "Gospels"
    #[serde(default)]
    pub division: Option<Division>,
}

/// Handler implementations for the MCP server
pub struct McpHandlers<'a> {
    generator: &'a Generator,
}

impl<'a> McpHandlers<'a> {
    pub fn new(generator: &'a Generator) -> Self {
        Self { generator }
    }

    pub fn generate_plan(&self, Parameters(params): Parameters<GeneratePlanParams>) -> McpResult {
        debug!("generate_plan: {}", params.request.config.plan_type());
        self.generate(&params.request, params.format)
    }

    pub fn generate_preset(
        &self,
        Parameters(params): Parameters<GeneratePresetParams>,
    ) -> McpResult {
        debug!("generate_preset: {:?}", params.preset);
        let request = params
            .preset
            .request(self.generator.books(), &params.options)
            .map_err(|e| to_mcp_error("Failed to configure preset", &e))?;
        self.generate(&request, params.format)
    }

    pub fn plan_statistics(
        &self,
        Parameters(params): Parameters<PlanStatisticsParams>,
    ) -> McpResult {
        let mut plan = params.plan;
        debug!("plan_statistics: {} days", plan.total_plan_days);
        plan.restore_reading_counts();

        let report = PlanReport::new(&plan, self.generator.books());
        let text = match params.format {
            ResponseFormat::Markdown => report.to_string(),
            ResponseFormat::Json => serde_json::to_string_pretty(&report).map_err(|e| {
                ErrorData::internal_error(format!("Failed to encode statistics: {e}"), None)
            })?,
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    pub fn list_books(&self, Parameters(params): Parameters<ListBooksParams>) -> McpResult {
        debug!("list_books: {:?}", params);
        let books = Books::filtered(self.generator.books(), params.testament, params.division);
        Ok(CallToolResult::success(vec![Content::text(
            books.to_string(),
        )]))
    }

    fn generate(&self, request: &PlanRequest, format: ResponseFormat) -> McpResult {
        let plan = self
            .generator
            .generate(request)
            .map_err(|e| to_mcp_error("Failed to generate plan", &e))?;

        let text = match format {
            ResponseFormat::Markdown => plan.to_string(),
            ResponseFormat::Json => {
                export_plan_json(&plan).map_err(|e| to_mcp_error("Failed to export plan", &e))?
            }
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[cfg(test)]
mod tests {
    use lectio_core::GeneratorBuilder;
    use rmcp::model::{ErrorCode, RawContent};

    use super::*;

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_generate_plan_returns_export_json() {
        let generator = GeneratorBuilder::new().build();
        let params: GeneratePlanParams = serde_json::from_value(serde_json::json!({
            "request": {
                "planType": "sequential",
                "name": "Philemon",
                "booksToInclude": [{"bookCode": 57}]
            }
        }))
        .unwrap();

        let result = McpHandlers::new(&generator)
            .generate_plan(Parameters(params))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(value["name"], "Philemon");
        assert_eq!(value["totalPlanDays"], 1);
    }

    #[test]
    fn test_generate_plan_rejects_zero_per_day() {
        let generator = GeneratorBuilder::new().build();
        let params: GeneratePlanParams = serde_json::from_value(serde_json::json!({
            "request": {
                "planType": "sequential",
                "booksToInclude": [{"bookCode": 57}],
                "chaptersPerDay": 0
            }
        }))
        .unwrap();

        let error = McpHandlers::new(&generator)
            .generate_plan(Parameters(params))
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_preset_then_statistics() {
        let generator = GeneratorBuilder::new().build();
        let handlers = McpHandlers::new(&generator);
        let params: GeneratePresetParams = serde_json::from_value(serde_json::json!({
            "preset": "new-testament",
            "options": {"totalPlanDays": 260}
        }))
        .unwrap();

        let result = handlers.generate_preset(Parameters(params)).unwrap();
        let plan: Plan = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(plan.total_plan_days, 260);

        let stats = handlers
            .plan_statistics(Parameters(PlanStatisticsParams {
                plan,
                format: ResponseFormat::Json,
            }))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(text_of(&stats)).unwrap();
        assert_eq!(value["newTestament"]["readings"], 260);
        assert_eq!(value["newTestament"]["repetition"], "1.0");
    }

    #[test]
    fn test_list_books_by_division() {
        let generator = GeneratorBuilder::new().build();
        let params: ListBooksParams =
            serde_json::from_value(serde_json::json!({"division": "Gospels"})).unwrap();

        let result = McpHandlers::new(&generator)
            .list_books(Parameters(params))
            .unwrap();
        let text = text_of(&result);
        assert!(text.contains("| 40 | Matthew |"));
        assert!(!text.contains("Acts"));
    }
}
