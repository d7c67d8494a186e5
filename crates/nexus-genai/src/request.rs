//! Transport-neutral request and response types for the generation service

use serde_json::Value;

/// Inline binary payload (already base64-encoded)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// One piece of request content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Text(String),
    InlineData(InlineData),
}

/// Optional per-request configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationConfig {
    /// JSON schema the reply must conform to (implies a JSON MIME type)
    pub response_schema: Option<Value>,
    /// Enable the search grounding tool
    pub google_search: bool,
    pub system_instruction: Option<String>,
    /// Reasoning token budget hint
    pub thinking_budget: Option<u32>,
}

/// A single generation request: model, content, configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub model: String,
    pub parts: Vec<Part>,
    pub config: GenerationConfig,
}

impl GenerateRequest {
    /// Text-only request with default configuration
    pub fn text(model: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            parts: vec![Part::Text(text.into())],
            config: GenerationConfig::default(),
        }
    }

    pub fn with_part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    pub fn with_schema(mut self, schema: Value) -> Self {
        self.config.response_schema = Some(schema);
        self
    }

    pub fn with_google_search(mut self) -> Self {
        self.config.google_search = true;
        self
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.config.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_thinking_budget(mut self, budget: u32) -> Self {
        self.config.thinking_budget = Some(budget);
        self
    }

    /// Concatenated text parts, mostly useful for logging and tests
    pub fn prompt_text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| match p {
                Part::Text(t) => Some(t.as_str()),
                Part::InlineData(_) => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A web source the reply was grounded on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

/// Successful service reply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateResponse {
    /// Reply text; JSON when a schema was requested
    pub text: String,
    pub sources: Vec<GroundingSource>,
}

impl GenerateResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sources: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_config() {
        let req = GenerateRequest::text("m", "hello")
            .with_google_search()
            .with_system_instruction("be brief")
            .with_thinking_budget(2000);
        assert!(req.config.google_search);
        assert_eq!(req.config.system_instruction.as_deref(), Some("be brief"));
        assert_eq!(req.config.thinking_budget, Some(2000));
        assert!(req.config.response_schema.is_none());
    }

    #[test]
    fn test_prompt_text_skips_inline_data() {
        let req = GenerateRequest {
            model: "m".into(),
            parts: vec![
                Part::InlineData(InlineData {
                    mime_type: "image/png".into(),
                    data: "AAAA".into(),
                }),
                Part::Text("describe".into()),
            ],
            config: GenerationConfig::default(),
        };
        assert_eq!(req.prompt_text(), "describe");
    }
}
