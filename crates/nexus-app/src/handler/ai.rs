//! AI-backed actions and their replies
//!
//! Every action follows the same cycle: check a trivial precondition (and
//! silently do nothing when it fails), draw a request token for its panel,
//! hand the request to the event loop, then merge the reply only if its
//! token is still current.

use nexus_core::prelude::*;
use nexus_core::{EditorTab, Project};
use nexus_genai::{GeneratedApp, ResearchResult};

use crate::deployment::DeploymentState;
use crate::request::{Panel, RequestToken};
use crate::state::{AppState, InputField, UiMode};

use super::{UpdateAction, UpdateResult};

/// Instruction sent with the refactor action
pub const REFACTOR_INSTRUCTION: &str = "Simplify and optimize";
/// Placeholder shown while an explanation is pending
pub const EXPLAIN_PENDING: &str = "Analyzing...";
/// Insights text when the explanation fails
pub const EXPLAIN_ERROR: &str = "Error.";

// ─────────────────────────────────────────────────────────────────────────────
// Generate
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_generate(state: &mut AppState) -> UpdateResult {
    let prompt = state.editor.prompt.trim().to_string();
    if prompt.is_empty() || state.is_busy(Panel::Generate) {
        return UpdateResult::none();
    }

    let target_id = state.projects.selected_id().map(str::to_string);
    if matches!(state.deployment, DeploymentState::Deployed { .. }) {
        state.deployment = DeploymentState::Idle;
    }
    state.ui_mode = UiMode::Normal;

    let token = state.requests.begin(Panel::Generate);
    info!("Generating project {} with {}", token, state.system_config.ai_model);
    UpdateResult::action(UpdateAction::GenerateProject {
        token,
        model: state.system_config.ai_model.clone(),
        prompt,
        target_id,
    })
}

/// Build the project from the reply: replace the targeted project, or
/// create a new one when nothing was selected.
pub fn handle_generation_completed(
    state: &mut AppState,
    token: RequestToken,
    target_id: Option<String>,
    prompt: &str,
    app: GeneratedApp,
) -> UpdateResult {
    if !state.requests.complete(Panel::Generate, token) {
        return UpdateResult::none();
    }

    let id = target_id.clone().unwrap_or_else(Project::generate_id);
    let project = Project::new(id.clone(), Project::name_from_prompt(prompt), app.description, app.files);

    match target_id {
        Some(id) if state.projects.get(&id).is_none() => {
            warn!("Generated project {} was deleted meanwhile; discarding", id);
            return UpdateResult::none();
        }
        Some(_) => {
            state.projects.update(project);
        }
        None => {
            info!("Created project {} ({} files)", project.id, project.files.len());
            state.projects.create(project);
            state.view = nexus_core::View::Editor;
        }
    }

    if state.projects.selected_id() == Some(id.as_str()) {
        discard_code_draft(state);
        state.requests.cancel(Panel::Explain);
        state.editor.tab = EditorTab::Code;
        state.editor.file_index = 0;
        state.editor.insights = None;
    }
    UpdateResult::none()
}

/// An open draft was taken from file content that has since been replaced
fn discard_code_draft(state: &mut AppState) {
    if state.ui_mode == UiMode::Input(InputField::Code) {
        state.ui_mode = UiMode::Normal;
    }
    state.editor.code_draft.clear();
}

pub fn handle_generation_failed(
    state: &mut AppState,
    token: RequestToken,
    error: String,
) -> UpdateResult {
    if state.requests.complete(Panel::Generate, token) {
        state.show_notice("Generation failed", error);
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// QA
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_run_qa(state: &mut AppState) -> UpdateResult {
    if state.is_busy(Panel::Qa) {
        return UpdateResult::none();
    }
    let Some(project) = state.selected_project() else {
        return UpdateResult::none();
    };
    let (project_id, files) = (project.id.clone(), project.files.clone());

    let token = state.requests.begin(Panel::Qa);
    UpdateResult::action(UpdateAction::RunQa {
        token,
        project_id,
        files,
    })
}

pub fn handle_qa_completed(
    state: &mut AppState,
    token: RequestToken,
    project_id: &str,
    report: String,
) -> UpdateResult {
    if !state.requests.complete(Panel::Qa, token) {
        return UpdateResult::none();
    }
    let Some(updated) = state.projects.get(project_id).map(|p| p.with_test_report(report)) else {
        return UpdateResult::none();
    };
    state.projects.update(updated);
    if state.projects.selected_id() == Some(project_id) {
        state.editor.tab = EditorTab::Qa;
    }
    UpdateResult::none()
}

pub fn handle_qa_failed(state: &mut AppState, token: RequestToken, error: String) -> UpdateResult {
    if state.requests.complete(Panel::Qa, token) {
        state.show_notice("QA analysis failed.", error);
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Explain
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_explain(state: &mut AppState) -> UpdateResult {
    let Some(file) = state.current_file() else {
        return UpdateResult::none();
    };
    let (file_name, content) = (file.name.clone(), file.content.clone());

    let token = state.requests.begin(Panel::Explain);
    state.editor.insights = Some(EXPLAIN_PENDING.to_string());
    UpdateResult::action(UpdateAction::ExplainFile {
        token,
        file_name,
        content,
    })
}

pub fn handle_explain_completed(
    state: &mut AppState,
    token: RequestToken,
    text: String,
) -> UpdateResult {
    if state.requests.complete(Panel::Explain, token) {
        state.editor.insights = Some(text);
    }
    UpdateResult::none()
}

pub fn handle_explain_failed(
    state: &mut AppState,
    token: RequestToken,
    error: String,
) -> UpdateResult {
    if state.requests.complete(Panel::Explain, token) {
        debug!("Explain failed: {}", error);
        state.editor.insights = Some(EXPLAIN_ERROR.to_string());
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Refactor
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_refactor(state: &mut AppState) -> UpdateResult {
    let Some(project_id) = state.projects.selected_id().map(str::to_string) else {
        return UpdateResult::none();
    };
    let Some(file) = state.current_file() else {
        return UpdateResult::none();
    };
    let (file_name, content) = (file.name.clone(), file.content.clone());
    let file_index = state.editor.file_index;

    let token = state.requests.begin(Panel::Refactor);
    UpdateResult::action(UpdateAction::RefactorFile {
        token,
        project_id,
        file_index,
        file_name,
        content,
        instruction: REFACTOR_INSTRUCTION.to_string(),
    })
}

pub fn handle_refactor_completed(
    state: &mut AppState,
    token: RequestToken,
    project_id: &str,
    file_index: usize,
    content: String,
) -> UpdateResult {
    if !state.requests.complete(Panel::Refactor, token) {
        return UpdateResult::none();
    }
    let Some(updated) = state
        .projects
        .get(project_id)
        .and_then(|p| p.with_file_content(file_index, content))
    else {
        debug!("Refactored file {} of {} no longer exists", file_index, project_id);
        return UpdateResult::none();
    };
    state.projects.update(updated);
    if state.projects.selected_id() == Some(project_id) && state.editor.file_index == file_index {
        discard_code_draft(state);
    }
    UpdateResult::none()
}

pub fn handle_refactor_failed(
    state: &mut AppState,
    token: RequestToken,
    error: String,
) -> UpdateResult {
    if state.requests.complete(Panel::Refactor, token) {
        state.show_notice("Refactor failed.", error);
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Research
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_research(state: &mut AppState) -> UpdateResult {
    let query = state.editor.research_query.trim().to_string();
    if query.is_empty() {
        return UpdateResult::none();
    }
    state.ui_mode = UiMode::Normal;
    let token = state.requests.begin(Panel::Research);
    UpdateResult::action(UpdateAction::Research { token, query })
}

pub fn handle_research_completed(
    state: &mut AppState,
    token: RequestToken,
    result: ResearchResult,
) -> UpdateResult {
    if state.requests.complete(Panel::Research, token) {
        state.editor.research = Some(result);
    }
    UpdateResult::none()
}

pub fn handle_research_failed(
    state: &mut AppState,
    token: RequestToken,
    error: String,
) -> UpdateResult {
    if state.requests.complete(Panel::Research, token) {
        state.show_notice("Research failed.", error);
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Image analysis
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_analyze_image(state: &mut AppState) -> UpdateResult {
    let source = state.editor.image_source.trim().to_string();
    if source.is_empty() || state.is_busy(Panel::Image) {
        return UpdateResult::none();
    }
    state.ui_mode = UiMode::Normal;
    let token = state.requests.begin(Panel::Image);
    UpdateResult::action(UpdateAction::AnalyzeImage {
        token,
        source,
        prompt: state.editor.image_prompt.clone(),
    })
}

pub fn handle_image_analysis_completed(
    state: &mut AppState,
    token: RequestToken,
    label: String,
    text: String,
) -> UpdateResult {
    if state.requests.complete(Panel::Image, token) {
        state.editor.image_label = Some(label);
        state.editor.image_analysis = Some(text);
    }
    UpdateResult::none()
}

pub fn handle_image_analysis_failed(
    state: &mut AppState,
    token: RequestToken,
    error: String,
) -> UpdateResult {
    if state.requests.complete(Panel::Image, token) {
        state.show_notice("Image analysis failed.", error);
    }
    UpdateResult::none()
}
