//! The generation service seam

use nexus_core::prelude::*;

use crate::request::{GenerateRequest, GenerateResponse};

/// An opaque text/JSON generation oracle.
///
/// One call issues exactly one request. Any failure (transport, status,
/// malformed body) is reported as an error with no retry.
#[trait_variant::make(GenerationService: Send)]
pub trait LocalGenerationService {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse>;
}
