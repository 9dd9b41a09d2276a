//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the toolkit over the MCP protocol via stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer: it wraps the same core library that
//! the CLI commands use. Each `#[tool]` method delegates to `textkit-core`.
//!
//! # Adding Tools
//!
//! 1. Define a parameter struct with `Deserialize` + `JsonSchema`
//! 2. Add a `#[tool(description = "...")]` method to the `#[tool_router]` impl
//! 3. Call core library functions, convert errors to `McpError`
//! 4. Return `CallToolResult::success(vec![Content::text(...)])`

use std::collections::BTreeMap;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use textkit_core::transform::Transform;
use textkit_core::{classify, codec, format};

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

/// Parameters for tools that take a single text.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TextParams {
    /// The input text.
    pub text: String,
}

/// Parameters for the `encrypt_text` and `decrypt_text` tools.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CipherParams {
    /// The input text (plaintext to encrypt, base64 to decrypt).
    pub text: String,
    /// 16-byte key, also used as the IV. Defaults to the configured key.
    pub key: Option<String>,
    /// Report failures instead of returning the input unchanged.
    pub strict: Option<bool>,
}

/// Parameters for the `format_byte_size` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ByteSizeParams {
    /// Size in bytes.
    pub bytes: u64,
}

/// Parameters for the `format_phone_number` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct PhoneParams {
    /// The phone number; only 11-character inputs are grouped.
    pub text: String,
    /// Report other lengths as an error instead of returning "".
    pub strict: Option<bool>,
}

/// Parameters for the `sort_by_numeric_key` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SortParams {
    /// Object of boolean flags whose keys are integers written as strings.
    pub entries: BTreeMap<String, bool>,
}

/// Parameters for the `transform_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TransformParams {
    /// The input text.
    pub text: String,
    /// Transform to apply.
    pub operation: Transform,
}

/// MCP server exposing the toolkit to AI assistants.
#[derive(Clone)]
pub struct TextkitServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    cipher_key: Option<String>,
    strict: bool,
}

impl Default for TextkitServer {
    fn default() -> Self {
        Self::new(None, false)
    }
}

fn text_result(text: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

fn json_result<T: serde::Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    text_result(json)
}

#[tool_router]
impl TextkitServer {
    /// Create a new MCP server with the configured cipher defaults.
    pub fn new(cipher_key: Option<String>, strict: bool) -> Self {
        Self {
            tool_router: Self::tool_router(),
            cipher_key,
            strict,
        }
    }

    fn resolve_key(&self, key: Option<String>) -> Result<String, McpError> {
        key.or_else(|| self.cipher_key.clone()).ok_or_else(|| {
            McpError::invalid_params("no key given and no cipher_key configured", None)
        })
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

        if params.format == "json" {
            json_result(&info)
        } else {
            text_result(format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            ))
        }
    }

    /// MD5 hex digest.
    #[tool(description = "MD5 hex digest (32 lowercase hex chars) of the UTF-8 text. Legacy format only.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn hash_text(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        text_result(codec::hash_hex(&params.text))
    }

    /// AES-128-CBC encryption with the key as IV.
    #[tool(
        description = "Encrypt text with AES-128-CBC (16-byte key, reused as IV). Returns base64. Without strict, failures return the input unchanged."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn encrypt_text(
        &self,
        Parameters(params): Parameters<CipherParams>,
    ) -> Result<CallToolResult, McpError> {
        let key = self.resolve_key(params.key)?;
        if params.strict.unwrap_or(self.strict) {
            codec::try_encrypt(&params.text, key.as_bytes())
                .map_err(|e| McpError::invalid_params(e.to_string(), None))
                .and_then(text_result)
        } else {
            text_result(codec::encrypt(&params.text, key.as_bytes()))
        }
    }

    /// Inverse of `encrypt_text`.
    #[tool(
        description = "Decrypt base64 produced by encrypt_text. Without strict, failures return the input unchanged."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn decrypt_text(
        &self,
        Parameters(params): Parameters<CipherParams>,
    ) -> Result<CallToolResult, McpError> {
        let key = self.resolve_key(params.key)?;
        if params.strict.unwrap_or(self.strict) {
            codec::try_decrypt(&params.text, key.as_bytes())
                .map_err(|e| McpError::invalid_params(e.to_string(), None))
                .and_then(text_result)
        } else {
            text_result(codec::decrypt(&params.text, key.as_bytes()))
        }
    }

    /// Percent-encode a URI component.
    #[tool(description = "Percent-encode text as a URI component (space becomes %20).")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn url_encode(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        text_result(codec::url_encode(&params.text))
    }

    /// Decode percent-escapes.
    #[tool(description = "Decode %XX escapes as UTF-8. '+' is left as-is.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn url_decode(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        text_result(codec::url_decode(&params.text))
    }

    /// Human-readable byte size.
    #[tool(description = "Format a byte count as bytes/KB/MB/GB with two decimals; 1 TiB and above returns 'size: error'.")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn format_byte_size(
        &self,
        Parameters(params): Parameters<ByteSizeParams>,
    ) -> Result<CallToolResult, McpError> {
        text_result(format::format_byte_size(params.bytes))
    }

    /// Group a phone number as 3-4-4.
    #[tool(description = "Group an 11-character phone number as '139 1234 5678'. Other lengths return an empty string unless strict.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn format_phone_number(
        &self,
        Parameters(params): Parameters<PhoneParams>,
    ) -> Result<CallToolResult, McpError> {
        if params.strict.unwrap_or(self.strict) {
            format::try_format_phone_number(&params.text)
                .map_err(|e| McpError::invalid_params(e.to_string(), None))
                .and_then(text_result)
        } else {
            text_result(format::format_phone_number(&params.text))
        }
    }

    /// Order entries by numeric key.
    #[tool(description = "Order object entries by the integer value of their keys. Fails on a non-numeric key; returns null for an empty object.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn sort_by_numeric_key(
        &self,
        Parameters(params): Parameters<SortParams>,
    ) -> Result<CallToolResult, McpError> {
        let sorted = format::sort_by_numeric_key(params.entries)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        json_result(&sorted)
    }

    /// Apply a named transform.
    #[tool(description = "Apply a transform: reverse, upper-first, lower-first, to-full-width, to-half-width.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn transform_text(
        &self,
        Parameters(params): Parameters<TransformParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "transform_text", operation = %params.operation, "executing MCP tool");
        text_result(params.operation.apply(&params.text))
    }

    /// Blank/CJK/ASCII classification.
    #[tool(description = "Classify text: blank, ASCII-letters-only, CJK presence and per-block character counts.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn classify_text(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        json_result(&classify::classify(&params.text))
    }
}

#[tool_handler]
impl ServerHandler for TextkitServer {
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
                "{} MCP server. Use tools to hash, encrypt, encode, format and transform text.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
