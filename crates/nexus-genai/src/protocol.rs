//! Wire format of the `generateContent` REST endpoint
//!
//! Converts [`GenerateRequest`] into the JSON body the service expects and
//! parses replies back into [`GenerateResponse`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use nexus_core::prelude::*;

use crate::request::{GenerateRequest, GenerateResponse, GroundingSource, Part};

const JSON_MIME_TYPE: &str = "application/json";

// ─────────────────────────────────────────────────────────────────────────────
// Request body
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireRequest {
    contents: Vec<WireContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<WireContent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<WireTool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<WireGenerationConfig>,
}

#[derive(Debug, Serialize)]
struct WireContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<WirePart>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
enum WirePart {
    Text(String),
    InlineData {
        #[serde(rename = "mimeType")]
        mime_type: String,
        data: String,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireTool {
    google_search: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<WireThinkingConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireThinkingConfig {
    thinking_budget: u32,
}

impl From<&GenerateRequest> for WireRequest {
    fn from(req: &GenerateRequest) -> Self {
        let parts = req
            .parts
            .iter()
            .map(|p| match p {
                Part::Text(t) => WirePart::Text(t.clone()),
                Part::InlineData(d) => WirePart::InlineData {
                    mime_type: d.mime_type.clone(),
                    data: d.data.clone(),
                },
            })
            .collect();

        let config = &req.config;
        let system_instruction = config.system_instruction.as_ref().map(|s| WireContent {
            role: None,
            parts: vec![WirePart::Text(s.clone())],
        });

        let tools = if config.google_search {
            vec![WireTool {
                google_search: Value::Object(Default::default()),
            }]
        } else {
            Vec::new()
        };

        let generation_config =
            if config.response_schema.is_some() || config.thinking_budget.is_some() {
                Some(WireGenerationConfig {
                    response_mime_type: config.response_schema.as_ref().map(|_| JSON_MIME_TYPE),
                    response_schema: config.response_schema.clone(),
                    thinking_config: config
                        .thinking_budget
                        .map(|thinking_budget| WireThinkingConfig { thinking_budget }),
                })
            } else {
                None
            };

        Self {
            contents: vec![WireContent {
                role: Some("user"),
                parts,
            }],
            system_instruction,
            tools,
            generation_config,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Response body
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireResponse {
    #[serde(default)]
    candidates: Vec<WireCandidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireCandidate {
    #[serde(default)]
    content: Option<WireResponseContent>,
    #[serde(default)]
    grounding_metadata: Option<WireGroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct WireResponseContent {
    #[serde(default)]
    parts: Vec<WireResponsePart>,
}

#[derive(Debug, Deserialize)]
struct WireResponsePart {
    #[serde(default)]
    text: Option<String>,
    /// Reasoning summaries are flagged and excluded from the reply text
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireGroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<WireGroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct WireGroundingChunk {
    #[serde(default)]
    web: Option<WireWebSource>,
}

#[derive(Debug, Deserialize)]
struct WireWebSource {
    #[serde(default)]
    uri: String,
    #[serde(default)]
    title: String,
}

#[derive(Debug, Deserialize)]
struct WireErrorEnvelope {
    error: WireError,
}

#[derive(Debug, Deserialize)]
struct WireError {
    #[serde(default)]
    message: String,
}

impl WireResponse {
    /// Collapse the first candidate into a [`GenerateResponse`]
    pub(crate) fn into_response(self) -> GenerateResponse {
        let Some(candidate) = self.candidates.into_iter().next() else {
            return GenerateResponse::default();
        };

        let text = candidate
            .content
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter(|p| !p.thought)
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        let sources = candidate
            .grounding_metadata
            .map(|m| {
                m.grounding_chunks
                    .into_iter()
                    .filter_map(|c| c.web)
                    .map(|w| GroundingSource {
                        title: w.title,
                        uri: w.uri,
                    })
                    .collect()
            })
            .unwrap_or_default();

        GenerateResponse { text, sources }
    }
}

/// Parse a successful reply body
pub(crate) fn parse_response(body: &str) -> Result<GenerateResponse> {
    let wire: WireResponse = serde_json::from_str(body)
        .map_err(|e| Error::generation_parse(format!("invalid reply body: {}", e)))?;
    Ok(wire.into_response())
}

/// Best-effort extraction of the service's error message from a failed reply
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<WireErrorEnvelope>(body)
        .map(|e| e.error.message)
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.trim().to_string())
}
