//! # nexus-genai - Generation Service Client
//!
//! Talks to the hosted generation API and implements the AI-backed product
//! operations on top of it: project generation, QA review, explanation,
//! refactoring, grounded research, image analysis and chat.
//!
//! Depends on [`nexus_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Service Seam
//! - [`GenerationService`] - Async trait every backend implements
//! - [`GeminiClient`] - HTTPS implementation speaking `generateContent`
//!
//! ### Requests
//! - [`GenerateRequest`], [`GenerateResponse`] - Transport-neutral request/reply
//! - [`InlineImage`] - Base64 image attachment loaded from a file or data URL
//!
//! ### Operations
//! - [`generate_app_code()`], [`run_auto_qa()`], [`explain_code()`],
//!   [`refactor_code()`], [`search_grounding()`], [`analyze_image()`], [`chat()`]

pub mod client;
pub mod image;
pub mod operations;
mod protocol;
pub mod request;
pub mod service;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{GeminiClient, DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, FALLBACK_API_KEY_ENV};
pub use image::InlineImage;
pub use operations::{
    analyze_image, chat, explain_code, generate_app_code, models, parse_generated_app,
    refactor_code, run_auto_qa, search_grounding, strip_code_fences, GeneratedApp,
    ResearchResult, GENERATION_FAILED_MESSAGE,
};
pub use request::{
    GenerateRequest, GenerateResponse, GenerationConfig, GroundingSource, InlineData, Part,
};
pub use service::{GenerationService, LocalGenerationService};
