//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes scoring, humanizing, and hidden-character detection to AI
//! assistants over stdio. Every tool is a thin wrapper over the same
//! `plainly-core` calls the CLI commands use.
//!
//! # Adding Tools
//!
//! 1. Define a parameter struct with `Deserialize` + `JsonSchema`
//! 2. Add a `#[tool(description = "...")]` method to the `#[tool_router]` impl
//! 3. Call core library functions, convert errors to `McpError`
//! 4. Return `CallToolResult::success(vec![Content::text(...)])`

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use plainly_core::hidden::{self, HiddenCharReport};
use plainly_core::sanitize::truncate_chars;
use plainly_core::{
    DEFAULT_MAX_INPUT_CHARS, HumanizeOptions, InputError, accept_input, likelihood,
};

use crate::commands::humanize::{HumanizeOutput, strength_or_default, tone_or_default};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `score_ai_likelihood` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ScoreParams {
    /// The text to score.
    pub text: String,
    /// Include the raw signals behind the score.
    #[serde(default)]
    pub details: bool,
}

/// Parameters for the `humanize_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct HumanizeParams {
    /// The text to rewrite.
    pub text: String,
    /// neutral, friendly, professional, confident, or concise. Unknown values mean neutral.
    pub tone: Option<String>,
    /// light, medium, or strong. Unknown values mean light.
    pub strength: Option<String>,
    /// Contract common verb phrases ("do not" becomes "don't").
    pub contractions: Option<bool>,
    /// Split long sentences at a connector word.
    pub soften_run_ons: Option<bool>,
}

/// Parameters for the `find_hidden_chars` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct HiddenCharsParams {
    /// The text to inspect.
    pub text: String,
    /// Return the text with hidden characters removed instead of marked.
    #[serde(default)]
    pub strip: bool,
}

#[derive(Serialize)]
struct HiddenCharsOutput {
    #[serde(flatten)]
    report: HiddenCharReport,
    text: String,
}

fn input_error(err: InputError) -> McpError {
    McpError::invalid_params(err.to_string(), None)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

/// MCP server exposing plainly to AI assistants.
#[derive(Clone)]
pub struct PlainlyServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    defaults: HumanizeOptions,
    max_input_chars: Option<usize>,
}

impl Default for PlainlyServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl PlainlyServer {
    /// Create a server with built-in defaults.
    pub fn new() -> Self {
        Self::with_defaults(HumanizeOptions::default(), Some(DEFAULT_MAX_INPUT_CHARS))
    }

    /// Create a server with configured humanize defaults and input limit.
    pub fn with_defaults(defaults: HumanizeOptions, max_input_chars: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            defaults,
            max_input_chars,
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score text for AI-sounding patterns.
    #[tool(
        description = "Estimate how AI-generated a text sounds. Returns a 0-100 score, a band (Low, Medium, High), and the reasons behind it."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn score_ai_likelihood(
        &self,
        Parameters(params): Parameters<ScoreParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "score_ai_likelihood", details = params.details, "executing MCP tool");

        let text = accept_input(&params.text, self.max_input_chars).map_err(input_error)?;
        let signals = likelihood::analyze_signals(&text);
        let report = likelihood::score_signals(&signals);

        let mut json = serde_json::to_value(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
        if params.details {
            json["signals"] = serde_json::to_value(&signals).map_err(|e| {
                McpError::internal_error(format!("serialization error: {e}"), None)
            })?;
        }

        tracing::info!(
            tool = "score_ai_likelihood",
            score = report.score,
            band = %report.band,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(&json)?)]))
    }

    /// Rewrite text into plainer prose.
    #[tool(
        description = "Rewrite text to sound less machine-written: drops AI disclaimers and filler, swaps jargon for plain words, de-duplicates transitions, adds contractions, and splits run-on sentences."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn humanize_text(
        &self,
        Parameters(params): Parameters<HumanizeParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "humanize_text",
            tone = ?params.tone,
            strength = ?params.strength,
            "executing MCP tool"
        );

        let text = accept_input(&params.text, self.max_input_chars).map_err(input_error)?;
        let options = HumanizeOptions {
            tone: params
                .tone
                .as_deref()
                .map_or(self.defaults.tone, tone_or_default),
            strength: params
                .strength
                .as_deref()
                .map_or(self.defaults.strength, strength_or_default),
            contractions: params.contractions.unwrap_or(self.defaults.contractions),
            soften_run_ons: params.soften_run_ons.unwrap_or(self.defaults.soften_run_ons),
        };

        let output = HumanizeOutput {
            humanized: plainly_core::humanize(&text, &options),
            tone: options.tone,
            strength: options.strength,
        };

        tracing::info!(
            tool = "humanize_text",
            output_len = output.humanized.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(&output)?)]))
    }

    /// Find hidden Unicode characters.
    #[tool(
        description = "Find zero-width and look-alike space characters (NBSP, ZWSP, ZWJ, thin space, etc.). Returns the kinds found, each position, and the text with them marked as [NAME] or stripped."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn find_hidden_chars(
        &self,
        Parameters(params): Parameters<HiddenCharsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "find_hidden_chars", strip = params.strip, "executing MCP tool");

        let text = truncate_chars(&params.text, self.max_input_chars);
        if text.is_empty() {
            return Err(input_error(InputError::MissingText));
        }

        let report = hidden::scan(text);
        let marked = if params.strip {
            hidden::strip(text)
        } else {
            hidden::highlight(text)
        };
        let total = report.total;
        let output = HiddenCharsOutput {
            report,
            text: marked,
        };

        tracing::info!(tool = "find_hidden_chars", total, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(to_json(&output)?)]))
    }
}

#[tool_handler]
impl ServerHandler for PlainlyServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Score text for AI-sounding patterns, rewrite it plainly, and find hidden characters.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
