//! The AI-backed product operations
//!
//! Each operation builds exactly one [`GenerateRequest`], sends it through a
//! [`GenerationService`] and shapes the reply for the app layer.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::{json, Value};

use nexus_core::prelude::*;
use nexus_core::ProjectFile;

use crate::image::InlineImage;
use crate::request::{GenerateRequest, GroundingSource, Part};
use crate::service::GenerationService;

/// Model ids per operation
pub mod models {
    pub const PRO: &str = "gemini-3-pro-preview";
    pub const FLASH: &str = "gemini-3-flash-preview";
    pub const FLASH_LITE: &str = "gemini-2.5-flash-lite-latest";
}

pub const GENERATE_THINKING_BUDGET: u32 = 32_768;
pub const CHAT_THINKING_BUDGET: u32 = 2_000;
pub const IMAGE_THINKING_BUDGET: u32 = 4_000;

pub const GENERATION_FAILED_MESSAGE: &str =
    "Architecture generation failed. Please refine your prompt.";
pub const DEFAULT_IMAGE_PROMPT: &str =
    "Analyze this image for UI/UX patterns and architectural inspiration.";
pub const QA_SYSTEM_INSTRUCTION: &str = "QA Engine: Be precise.";
pub const NO_RESEARCH_TEXT: &str = "No response generated.";
pub const NO_ANALYSIS_TEXT: &str = "No analysis provided.";

static LEADING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^```[a-z]*\n").expect("Invalid leading fence regex"));
static TRAILING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n```$").expect("Invalid trailing fence regex"));

/// Structured result of project generation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratedApp {
    pub description: String,
    pub files: Vec<ProjectFile>,
}

/// Result of a grounded research query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchResult {
    pub text: String,
    pub sources: Vec<GroundingSource>,
}

/// JSON schema the generation reply must follow
pub fn app_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "description": { "type": "STRING" },
            "files": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "path": { "type": "STRING" },
                        "content": { "type": "STRING" }
                    },
                    "required": ["name", "path", "content"]
                }
            }
        },
        "required": ["description", "files"]
    })
}

fn architect_prompt(prompt: &str) -> String {
    format!(
        "Task: Architect a high-performance, production-ready web application.
    User Request: {prompt}

    Performance Requirements:
    1. Use lightweight functional patterns and avoid heavy external dependencies.
    2. Implement efficient Tailwind CSS structures to keep the generated bundle small.
    3. Ensure component modularity for optimal tree-shaking.
    4. index.tsx must be the entry point.
    5. Code should favor native browser APIs where possible for speed.

    Architecture: Modern UI with deep dark mode (slate-950).

    The output MUST be a valid JSON object matching the schema."
    )
}

/// Parse a generation reply into a [`GeneratedApp`].
///
/// Any shape mismatch is a generation failure carrying the user-facing message.
pub fn parse_generated_app(text: &str) -> Result<GeneratedApp> {
    let cleaned = strip_code_fences(text);
    let app: GeneratedApp = serde_json::from_str(&cleaned).map_err(|e| {
        error!("AI output parsing error: {} (reply was {} chars)", e, text.len());
        Error::generation_parse(GENERATION_FAILED_MESSAGE)
    })?;

    let mut seen = HashSet::new();
    for file in &app.files {
        if !seen.insert(file.path.as_str()) {
            warn!("Generated project contains duplicate path: {}", file.path);
        }
    }
    Ok(app)
}

/// Remove one leading and one trailing markdown fence, then trim
pub fn strip_code_fences(text: &str) -> String {
    let without_leading = LEADING_FENCE.replace(text, "");
    TRAILING_FENCE
        .replace(&without_leading, "")
        .trim()
        .to_string()
}

/// Generate a full project from a natural-language prompt
pub async fn generate_app_code<S>(service: &S, model: &str, prompt: &str) -> Result<GeneratedApp>
where
    S: GenerationService + ?Sized,
{
    let request = GenerateRequest::text(model, architect_prompt(prompt))
        .with_schema(app_schema())
        .with_thinking_budget(GENERATE_THINKING_BUDGET);
    let response = service.generate(request).await?;
    parse_generated_app(&response.text)
}

/// Search-grounded research answer with its sources
pub async fn search_grounding<S>(service: &S, query: &str) -> Result<ResearchResult>
where
    S: GenerationService + ?Sized,
{
    let request = GenerateRequest::text(models::FLASH, query).with_google_search();
    let response = service.generate(request).await?;
    let text = if response.text.is_empty() {
        NO_RESEARCH_TEXT.to_string()
    } else {
        response.text
    };
    Ok(ResearchResult {
        text,
        sources: response.sources,
    })
}

/// One-shot assistant reply
pub async fn chat<S>(service: &S, message: &str) -> Result<String>
where
    S: GenerationService + ?Sized,
{
    let request =
        GenerateRequest::text(models::PRO, message).with_thinking_budget(CHAT_THINKING_BUDGET);
    Ok(service.generate(request).await?.text)
}

/// Describe an image; an empty prompt falls back to the default analysis prompt
pub async fn analyze_image<S>(service: &S, image: &InlineImage, prompt: &str) -> Result<String>
where
    S: GenerationService + ?Sized,
{
    let prompt = if prompt.trim().is_empty() {
        DEFAULT_IMAGE_PROMPT
    } else {
        prompt
    };
    let request = GenerateRequest {
        model: models::PRO.to_string(),
        parts: vec![image.to_part(), Part::Text(prompt.to_string())],
        config: Default::default(),
    }
    .with_thinking_budget(IMAGE_THINKING_BUDGET);

    let text = service.generate(request).await?.text;
    Ok(if text.is_empty() {
        NO_ANALYSIS_TEXT.to_string()
    } else {
        text
    })
}

/// Concatenate files into the QA review context
pub fn qa_context(files: &[ProjectFile]) -> String {
    files
        .iter()
        .map(|f| format!("File: {}\nContent:\n{}", f.path, f.content))
        .collect::<Vec<_>>()
        .join("\n\n---\n\n")
}

/// Bug/security review of a whole project
pub async fn run_auto_qa<S>(service: &S, files: &[ProjectFile]) -> Result<String>
where
    S: GenerationService + ?Sized,
{
    let request = GenerateRequest::text(
        models::FLASH,
        format!("Analyze for bugs/security:\n\n{}", qa_context(files)),
    )
    .with_system_instruction(QA_SYSTEM_INSTRUCTION);
    Ok(service.generate(request).await?.text)
}

/// Fast explanation of a single file
pub async fn explain_code<S>(service: &S, file_name: &str, content: &str) -> Result<String>
where
    S: GenerationService + ?Sized,
{
    let request =
        GenerateRequest::text(models::FLASH_LITE, format!("Explain {file_name}:\n\n{content}"));
    Ok(service.generate(request).await?.text)
}

/// Rewrite a file according to an instruction; returns raw code only
pub async fn refactor_code<S>(
    service: &S,
    file_name: &str,
    content: &str,
    instruction: &str,
) -> Result<String>
where
    S: GenerationService + ?Sized,
{
    let request = GenerateRequest::text(
        models::FLASH,
        format!("Refactor {file_name} for: {instruction}. Raw code only.\n\n{content}"),
    );
    let text = service.generate(request).await?.text;
    Ok(strip_code_fences(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::GenerateResponse;
    use crate::test_utils::ScriptedService;

    const APP_JSON: &str = r#"{
        "description": "A todo list",
        "files": [
            {"name": "index.tsx", "path": "index.tsx", "content": "import App"},
            {"name": "App.tsx", "path": "components/App.tsx", "content": "export default"}
        ]
    }"#;

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```tsx\nconst a = 1;\n```"), "const a = 1;");
        assert_eq!(strip_code_fences("```\nx\n```"), "x");
        assert_eq!(strip_code_fences("  plain  "), "plain");
        assert_eq!(strip_code_fences("```TypeScript\ny\n```"), "y");
    }

    #[test]
    fn test_parse_generated_app_ok() {
        let app = parse_generated_app(APP_JSON).unwrap();
        assert_eq!(app.description, "A todo list");
        assert_eq!(app.files.len(), 2);
        assert_eq!(app.files[1].path, "components/App.tsx");
    }

    #[test]
    fn test_parse_generated_app_accepts_fenced_json() {
        let fenced = format!("```json\n{}\n```", APP_JSON);
        assert!(parse_generated_app(&fenced).is_ok());
    }

    #[test]
    fn test_parse_generated_app_missing_files_fails() {
        let err = parse_generated_app(r#"{"description": "x"}"#).unwrap_err();
        assert!(err.to_string().contains(GENERATION_FAILED_MESSAGE));
    }

    #[test]
    fn test_parse_generated_app_accepts_duplicate_paths() {
        let json = r#"{"description": "d", "files": [
            {"name": "a", "path": "same.ts", "content": "1"},
            {"name": "b", "path": "same.ts", "content": "2"}
        ]}"#;
        assert_eq!(parse_generated_app(json).unwrap().files.len(), 2);
    }

    #[test]
    fn test_qa_context_format() {
        let files = vec![
            ProjectFile::new("a", "src/a.ts", "A"),
            ProjectFile::new("b", "src/b.ts", "B"),
        ];
        assert_eq!(
            qa_context(&files),
            "File: src/a.ts\nContent:\nA\n\n---\n\nFile: src/b.ts\nContent:\nB"
        );
    }

    #[tokio::test]
    async fn test_generate_app_code_sends_schema_and_budget() {
        let service = ScriptedService::new().reply(APP_JSON);
        let app = generate_app_code(&service, "gemini-3-pro-preview", "Todo App")
            .await
            .unwrap();
        assert_eq!(app.files.len(), 2);

        let requests = service.requests();
        assert_eq!(requests.len(), 1);
        let req = &requests[0];
        assert_eq!(req.model, "gemini-3-pro-preview");
        assert!(req.config.response_schema.is_some());
        assert_eq!(req.config.thinking_budget, Some(GENERATE_THINKING_BUDGET));
        assert!(req.prompt_text().contains("User Request: Todo App"));
    }

    #[tokio::test]
    async fn test_generate_app_code_propagates_service_failure() {
        let service = ScriptedService::new().fail("network down");
        let err = generate_app_code(&service, models::PRO, "x").await.unwrap_err();
        assert!(matches!(err, Error::Generation { .. }));
    }

    #[tokio::test]
    async fn test_search_grounding_uses_search_tool() {
        let service = ScriptedService::new().respond(GenerateResponse {
            text: "Use signals".into(),
            sources: vec![GroundingSource {
                title: "Docs".into(),
                uri: "https://docs.example".into(),
            }],
        });
        let result = search_grounding(&service, "state mgmt").await.unwrap();
        assert_eq!(result.text, "Use signals");
        assert_eq!(result.sources.len(), 1);
        let req = &service.requests()[0];
        assert!(req.config.google_search);
        assert_eq!(req.model, models::FLASH);
    }

    #[tokio::test]
    async fn test_search_grounding_empty_text_placeholder() {
        let service = ScriptedService::new().reply("");
        let result = search_grounding(&service, "q").await.unwrap();
        assert_eq!(result.text, NO_RESEARCH_TEXT);
    }

    #[tokio::test]
    async fn test_analyze_image_default_prompt_and_placeholder() {
        let service = ScriptedService::new().reply("");
        let image = InlineImage::from_data_url("data:image/png;base64,AAAA");
        let text = analyze_image(&service, &image, "   ").await.unwrap();
        assert_eq!(text, NO_ANALYSIS_TEXT);

        let req = &service.requests()[0];
        assert!(matches!(req.parts[0], Part::InlineData(_)));
        assert_eq!(req.prompt_text(), DEFAULT_IMAGE_PROMPT);
        assert_eq!(req.config.thinking_budget, Some(IMAGE_THINKING_BUDGET));
    }

    #[tokio::test]
    async fn test_run_auto_qa_sets_system_instruction() {
        let service = ScriptedService::new().reply("No critical issues");
        let files = vec![ProjectFile::new("a", "a.ts", "let x")];
        let report = run_auto_qa(&service, &files).await.unwrap();
        assert_eq!(report, "No critical issues");
        let req = &service.requests()[0];
        assert_eq!(
            req.config.system_instruction.as_deref(),
            Some(QA_SYSTEM_INSTRUCTION)
        );
        assert!(req.prompt_text().starts_with("Analyze for bugs/security:"));
    }

    #[tokio::test]
    async fn test_explain_code_uses_lite_model() {
        let service = ScriptedService::new().reply("It renders the app");
        let text = explain_code(&service, "index.tsx", "render()").await.unwrap();
        assert_eq!(text, "It renders the app");
        let req = &service.requests()[0];
        assert_eq!(req.model, models::FLASH_LITE);
        assert_eq!(req.prompt_text(), "Explain index.tsx:\n\nrender()");
    }

    #[tokio::test]
    async fn test_refactor_code_strips_fences() {
        let service = ScriptedService::new().reply("```tsx\nconst x = 2;\n```");
        let code = refactor_code(&service, "a.tsx", "const x = 1;", "Simplify and optimize")
            .await
            .unwrap();
        assert_eq!(code, "const x = 2;");
        assert!(service.requests()[0]
            .prompt_text()
            .starts_with("Refactor a.tsx for: Simplify and optimize. Raw code only."));
    }

    #[tokio::test]
    async fn test_chat_returns_reply_text() {
        let service = ScriptedService::new().reply("Hi there");
        assert_eq!(chat(&service, "hello").await.unwrap(), "Hi there");
        assert_eq!(
            service.requests()[0].config.thinking_budget,
            Some(CHAT_THINKING_BUDGET)
        );
    }
}
