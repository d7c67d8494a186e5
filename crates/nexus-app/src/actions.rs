//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every service call runs in its own task and reports back with exactly one
//! message. Errors never escape a task; they become `*Failed` messages that
//! the update function turns into notices.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use nexus_core::prelude::*;
use nexus_genai::{self as genai, GenerationService, InlineImage};

use crate::deployment;
use crate::handler::UpdateAction;
use crate::message::Message;

/// Text shown to the user for a failed service call
pub fn user_message(error: &Error) -> String {
    match error {
        Error::Generation { message } | Error::GenerationParse { message } => message.clone(),
        Error::GenerationStatus { status, body } => format!("Service returned {status}: {body}"),
        other => other.to_string(),
    }
}

/// Execute an action by spawning a background task
pub fn handle_action<S>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    service: Arc<S>,
    shutdown_rx: watch::Receiver<bool>,
) where
    S: GenerationService + Send + Sync + 'static,
{
    match action {
        UpdateAction::GenerateProject {
            token,
            model,
            prompt,
            target_id,
        } => {
            tokio::spawn(async move {
                let msg = match genai::generate_app_code(&*service, &model, &prompt).await {
                    Ok(app) => Message::GenerationCompleted {
                        token,
                        target_id,
                        prompt,
                        app,
                    },
                    Err(e) => {
                        warn!("Generation {} failed: {}", token, e);
                        Message::GenerationFailed {
                            token,
                            error: user_message(&e),
                        }
                    }
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::RunQa {
            token,
            project_id,
            files,
        } => {
            tokio::spawn(async move {
                let msg = match genai::run_auto_qa(&*service, &files).await {
                    Ok(report) => Message::QaCompleted {
                        token,
                        project_id,
                        report,
                    },
                    Err(e) => Message::QaFailed {
                        token,
                        error: user_message(&e),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::ExplainFile {
            token,
            file_name,
            content,
        } => {
            tokio::spawn(async move {
                let msg = match genai::explain_code(&*service, &file_name, &content).await {
                    Ok(text) => Message::ExplainCompleted { token, text },
                    Err(e) => Message::ExplainFailed {
                        token,
                        error: user_message(&e),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::RefactorFile {
            token,
            project_id,
            file_index,
            file_name,
            content,
            instruction,
        } => {
            tokio::spawn(async move {
                let result =
                    genai::refactor_code(&*service, &file_name, &content, &instruction).await;
                let msg = match result {
                    Ok(content) => Message::RefactorCompleted {
                        token,
                        project_id,
                        file_index,
                        content,
                    },
                    Err(e) => Message::RefactorFailed {
                        token,
                        error: user_message(&e),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::Research { token, query } => {
            tokio::spawn(async move {
                let msg = match genai::search_grounding(&*service, &query).await {
                    Ok(result) => Message::ResearchCompleted { token, result },
                    Err(e) => Message::ResearchFailed {
                        token,
                        error: user_message(&e),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::AnalyzeImage {
            token,
            source,
            prompt,
        } => {
            tokio::spawn(async move {
                let msg = match analyze_image_source(&*service, &source, &prompt).await {
                    Ok((label, text)) => Message::ImageAnalysisCompleted { token, label, text },
                    Err(e) => Message::ImageAnalysisFailed {
                        token,
                        error: user_message(&e),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::Chat { token, message } => {
            tokio::spawn(async move {
                let msg = match genai::chat(&*service, &message).await {
                    Ok(text) => Message::ChatReplied { token, text },
                    Err(e) => Message::ChatFailed {
                        token,
                        error: user_message(&e),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::StartDeployment {
            run,
            project_id,
            file_count,
            timings,
        } => {
            tokio::spawn(deployment::run_deployment(
                run,
                project_id,
                file_count,
                timings,
                msg_tx,
                shutdown_rx,
            ));
        }
    }
}

/// Load the image and analyze it; returns the image label with the analysis
async fn analyze_image_source<S>(service: &S, source: &str, prompt: &str) -> Result<(String, String)>
where
    S: GenerationService + ?Sized,
{
    let image = InlineImage::load(source)?;
    debug!("Analyzing {} ({} bytes)", image.label, image.byte_len());
    let text = genai::analyze_image(service, &image, prompt).await?;
    Ok((image.label, text))
}
