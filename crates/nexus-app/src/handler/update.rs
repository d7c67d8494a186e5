//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in the sibling modules:
//! - `project`: Navigation and project lifecycle
//! - `input`: Text field focus, editing and submission
//! - `ai`: AI-backed actions and their replies
//! - `chat`: Chat overlay
//! - `deployment`: Deployment simulation
//! - `admin`: System configuration

use nexus_core::AppPhase;

use crate::message::Message;
use crate::state::{AppState, LANDING_ROLES};

use super::{admin, ai, chat, deployment, input, keys::handle_key, project, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            if state.requests.any_busy() || state.deployment.is_deploying() {
                state.spinner_frame = state.spinner_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Session
        // ─────────────────────────────────────────────────────────
        Message::Login(role) => {
            state.login(role);
            UpdateResult::none()
        }

        Message::Logout => {
            state.logout();
            UpdateResult::none()
        }

        Message::LandingSelect(index) => {
            state.landing_selected = index.min(LANDING_ROLES.len() - 1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate(view) => project::handle_navigate(state, view),

        Message::SelectTab(tab) => {
            state.editor.tab = tab;
            UpdateResult::none()
        }

        Message::NextTab => {
            state.editor.tab = state.editor.tab.next();
            UpdateResult::none()
        }

        Message::PrevTab => {
            state.editor.tab = state.editor.tab.prev();
            UpdateResult::none()
        }

        Message::DashboardSelect(index) => {
            state.dashboard_selected = index.min(state.projects.len().saturating_sub(1));
            UpdateResult::none()
        }

        Message::DismissNotice => {
            state.notice = None;
            UpdateResult::none()
        }

        Message::CloseInsights => {
            state.editor.insights = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Text Input
        // ─────────────────────────────────────────────────────────
        Message::FocusInput(field) => input::handle_focus(state, field),
        Message::BlurInput => input::handle_blur(state),
        Message::InputChanged { text } => input::handle_changed(state, text),
        Message::SubmitInput => input::handle_submit(state),

        // ─────────────────────────────────────────────────────────
        // Project Lifecycle
        // ─────────────────────────────────────────────────────────
        Message::OpenProject { id } => project::handle_open(state, &id),
        Message::NewProject => project::handle_new(state),
        Message::CloseEditor => project::handle_close(state),
        Message::DeleteProject { id } => project::handle_delete(state, &id),
        Message::SelectFile(index) => project::handle_select_file(state, index),
        Message::EditFile { index, content } => project::handle_edit_file(state, index, content),

        // ─────────────────────────────────────────────────────────
        // AI Actions
        // ─────────────────────────────────────────────────────────
        Message::Generate => ai::handle_generate(state),
        Message::GenerationCompleted {
            token,
            target_id,
            prompt,
            app,
        } => ai::handle_generation_completed(state, token, target_id, &prompt, app),
        Message::GenerationFailed { token, error } => {
            ai::handle_generation_failed(state, token, error)
        }

        Message::RunQa => ai::handle_run_qa(state),
        Message::QaCompleted {
            token,
            project_id,
            report,
        } => ai::handle_qa_completed(state, token, &project_id, report),
        Message::QaFailed { token, error } => ai::handle_qa_failed(state, token, error),

        Message::Explain => ai::handle_explain(state),
        Message::ExplainCompleted { token, text } => ai::handle_explain_completed(state, token, text),
        Message::ExplainFailed { token, error } => ai::handle_explain_failed(state, token, error),

        Message::Refactor => ai::handle_refactor(state),
        Message::RefactorCompleted {
            token,
            project_id,
            file_index,
            content,
        } => ai::handle_refactor_completed(state, token, &project_id, file_index, content),
        Message::RefactorFailed { token, error } => ai::handle_refactor_failed(state, token, error),

        Message::Research => ai::handle_research(state),
        Message::ResearchCompleted { token, result } => {
            ai::handle_research_completed(state, token, result)
        }
        Message::ResearchFailed { token, error } => ai::handle_research_failed(state, token, error),

        Message::AnalyzeImage => ai::handle_analyze_image(state),
        Message::ImageAnalysisCompleted { token, label, text } => {
            ai::handle_image_analysis_completed(state, token, label, text)
        }
        Message::ImageAnalysisFailed { token, error } => {
            ai::handle_image_analysis_failed(state, token, error)
        }

        // ─────────────────────────────────────────────────────────
        // Chat
        // ─────────────────────────────────────────────────────────
        Message::ToggleChat => chat::handle_toggle(state),
        Message::SendChat => chat::handle_send(state),
        Message::ChatReplied { token, text } => chat::handle_reply(state, token, text),
        Message::ChatFailed { token, error } => chat::handle_failure(state, token, error),

        // ─────────────────────────────────────────────────────────
        // Deployment
        // ─────────────────────────────────────────────────────────
        Message::StartDeployment => deployment::handle_start(state),
        Message::DeploymentLog { run, line } => deployment::handle_log(state, run, line),
        Message::DeploymentFinished {
            run,
            project_id,
            preview_url,
            performance,
        } => deployment::handle_finished(state, run, project_id, preview_url, performance),
        Message::RefreshPreview => deployment::handle_refresh(state),

        // ─────────────────────────────────────────────────────────
        // Admin
        // ─────────────────────────────────────────────────────────
        Message::AdminSelect(field) => admin::handle_select(state, field),
        Message::AdminActivate => admin::handle_activate(state),
        Message::AdjustMaxProjects(step) => admin::handle_adjust_max_projects(state, step),

        // ─────────────────────────────────────────────────────────
        // Persistence
        // ─────────────────────────────────────────────────────────
        Message::PersistFailed { error } => {
            state.show_notice("Save failed", error);
            UpdateResult::none()
        }
    }
}
