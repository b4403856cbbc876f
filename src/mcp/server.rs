//! MacroCal MCP Server Implementation
//!
//! Implements the MCP server with the calculator and content tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::content::ContentDoc;
use crate::models::{BiometricInput, MacroSplit, Sex, UnitSystem};
use crate::tools::status::StatusTracker;
use crate::tools::targets;

/// MacroCal MCP Service
#[derive(Clone)]
pub struct MacroCalService {
    content: &'static ContentDoc,
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<MacroCalService>,
}

impl MacroCalService {
    pub fn new(content: &'static ContentDoc, content_source: String) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(
                content_source,
                content.override_applied(),
            ))),
            content,
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Calculator Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ComputeCaloriesParams {
    /// Unit system: metric (cm/kg) or imperial (in/lbs). Default metric.
    #[serde(default = "default_units")]
    pub units: String,
    /// Biological sex: female or male. Default male.
    #[serde(default = "default_sex")]
    pub sex: String,
    /// Apply the sexed BMR constant (-161 female / +5 male). Default true;
    /// false selects the sex-agnostic formula.
    #[serde(default = "default_true")]
    pub sex_adjustment: bool,
    /// Age in years
    pub age: f64,
    /// Height in cm (metric) or inches (imperial)
    pub height: f64,
    /// Weight in kg (metric) or lbs (imperial)
    pub weight: f64,
    /// Activity multiplier, e.g. 1.2 sedentary through 1.9 very active
    /// (see get_activity_level_option)
    pub activity_level: f64,
    /// Cutting/bulking multiplier applied to active calories (default 1.0)
    #[serde(default = "default_adjustment_factor")]
    pub adjustment_factor: f64,
    /// Flat caloric surplus/deficit added last, e.g. -500 or 250 (default 0)
    #[serde(default)]
    pub delta: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ComputeMacroTargetsParams {
    /// Unit system: metric (cm/kg) or imperial (in/lbs). Default metric.
    #[serde(default = "default_units")]
    pub units: String,
    /// Biological sex: female or male. Default male.
    #[serde(default = "default_sex")]
    pub sex: String,
    /// Apply the sexed BMR constant (-161 female / +5 male). Default true.
    #[serde(default = "default_true")]
    pub sex_adjustment: bool,
    /// Age in years
    pub age: f64,
    /// Height in cm (metric) or inches (imperial)
    pub height: f64,
    /// Weight in kg (metric) or lbs (imperial)
    pub weight: f64,
    /// Activity multiplier (see get_activity_level_option)
    pub activity_level: f64,
    /// Cutting/bulking multiplier applied to active calories (default 1.0)
    #[serde(default = "default_adjustment_factor")]
    pub adjustment_factor: f64,
    /// Flat caloric surplus/deficit added last (default 0)
    #[serde(default)]
    pub delta: f64,
    /// Protein split override as a fraction of calories. All three split
    /// fields must be provided together, otherwise the content document's
    /// split applies.
    pub protein_split: Option<f64>,
    /// Carbs split override as a fraction of calories
    pub carbs_split: Option<f64>,
    /// Fat split override as a fraction of calories
    pub fat_split: Option<f64>,
}

fn default_units() -> String {
    "metric".to_string()
}
fn default_sex() -> String {
    "male".to_string()
}
fn default_true() -> bool {
    true
}
fn default_adjustment_factor() -> f64 {
    1.0
}

// ============================================================================
// Content Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetActivityLevelOptionParams {
    /// Option index (0-based)
    pub n: usize,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetGoalOptionParams {
    /// Option index (0-based)
    pub n: usize,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetResultFieldParams {
    /// Result field name: calories, protein, carbs, or fat
    pub name: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl MacroCalService {
    // --- Status ---

    #[tool(description = "Get the current status of the MacroCal service including build info, content source, and process information")]
    async fn macrocal_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Calculator ---

    #[tool(description = "Compute unrounded daily energy expenditure (BMR and total calories) from biometrics via the Mifflin-St Jeor equation. Inputs are not validated; the caller is responsible for sensible values.")]
    fn compute_calories(&self, Parameters(p): Parameters<ComputeCaloriesParams>) -> Result<CallToolResult, McpError> {
        let input = BiometricInput {
            units: UnitSystem::from_str(&p.units).unwrap_or(UnitSystem::Metric),
            sex: Sex::from_str(&p.sex).unwrap_or(Sex::Male),
            sex_adjustment: p.sex_adjustment,
            age: p.age,
            height: p.height,
            weight: p.weight,
            activity_level: p.activity_level,
            adjustment_factor: p.adjustment_factor,
            delta: p.delta,
        };
        let result = targets::compute_calories(&input);
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Compute rounded daily calorie and macro gram targets. The macro split comes from the resolved content document unless protein_split/carbs_split/fat_split are all supplied.")]
    fn compute_macro_targets(&self, Parameters(p): Parameters<ComputeMacroTargetsParams>) -> Result<CallToolResult, McpError> {
        let input = BiometricInput {
            units: UnitSystem::from_str(&p.units).unwrap_or(UnitSystem::Metric),
            sex: Sex::from_str(&p.sex).unwrap_or(Sex::Male),
            sex_adjustment: p.sex_adjustment,
            age: p.age,
            height: p.height,
            weight: p.weight,
            activity_level: p.activity_level,
            adjustment_factor: p.adjustment_factor,
            delta: p.delta,
        };
        let split = match (p.protein_split, p.carbs_split, p.fat_split) {
            (Some(protein), Some(carbs), Some(fat)) => Some(MacroSplit { protein, carbs, fat }),
            _ => None,
        };
        let result = targets::compute_targets(self.content, &input, split);
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Content ---

    #[tool(description = "Get the resolved content document (defaults merged with any host override)")]
    fn get_content(&self) -> Result<CallToolResult, McpError> {
        let json = serde_json::to_string_pretty(self.content.as_value())
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get activity-level option N (label, description, BMR multiplier). Index range is not validated; out of range returns a not-found payload.")]
    fn get_activity_level_option(&self, Parameters(p): Parameters<GetActivityLevelOptionParams>) -> Result<CallToolResult, McpError> {
        let json = match self.content.activity_level_option(p.n) {
            Some(option) => serde_json::to_string_pretty(&option),
            None => Ok(format!(r#"{{"error": "Activity level option not found", "n": {}}}"#, p.n)),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get goal option N (label, description, caloric delta). Out of range returns a not-found payload.")]
    fn get_goal_option(&self, Parameters(p): Parameters<GetGoalOptionParams>) -> Result<CallToolResult, McpError> {
        let json = match self.content.goal_option(p.n) {
            Some(option) => serde_json::to_string_pretty(&option),
            None => Ok(format!(r#"{{"error": "Goal option not found", "n": {}}}"#, p.n)),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get max and default option indices for the selectable form lists (activity level, goal)")]
    fn get_option_parameters(&self) -> Result<CallToolResult, McpError> {
        let params = self.content.option_parameters();
        let json = serde_json::to_string_pretty(&params).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get display metadata (label, unit, order) for a named result field: calories, protein, carbs, or fat")]
    fn get_result_field(&self, Parameters(p): Parameters<GetResultFieldParams>) -> Result<CallToolResult, McpError> {
        let json = match self.content.result_field(&p.name) {
            Some(field) => serde_json::to_string_pretty(&field),
            None => Ok(format!(r#"{{"error": "Result field not found", "name": "{}"}}"#, p.name)),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for MacroCalService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "macrocal".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("MacroCal".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "MacroCal - Daily calorie and macronutrient targets via Mifflin-St Jeor. \
                 Calculator: compute_calories (unrounded BMR/total), compute_macro_targets \
                 (rounded calorie and gram targets; split from the content document unless \
                 all three *_split fields are given). \
                 Content: get_content, get_activity_level_option, get_goal_option, \
                 get_option_parameters, get_result_field. \
                 Inputs are not validated; callers supply sensible biometrics and check \
                 option indices against get_option_parameters. \
                 Status: macrocal_status."
                    .into(),
            ),
        }
    }
}
