//! Navigation and project lifecycle handlers

use nexus_core::prelude::*;
use nexus_core::{EditorTab, View};

use crate::request::Panel;
use crate::state::{AppState, EditorState, UiMode};

use super::UpdateResult;

/// Switch the top-level view; views the role may not open are ignored
pub fn handle_navigate(state: &mut AppState, view: View) -> UpdateResult {
    if !state.can_open(view) {
        debug!("Navigation to {:?} denied", view);
        return UpdateResult::none();
    }
    state.view = view;
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

/// Replies for the previous editor context no longer apply
fn reset_editor(state: &mut AppState) {
    for panel in Panel::PROJECT_BOUND {
        state.requests.cancel(panel);
    }
    state.editor = EditorState::default();
    state.ui_mode = UiMode::Normal;
}

pub fn handle_open(state: &mut AppState, id: &str) -> UpdateResult {
    if state.projects.selected_id() != Some(id) {
        if state.projects.get(id).is_none() {
            return UpdateResult::none();
        }
        reset_editor(state);
        state.projects.select(id);
    }
    state.view = View::Editor;
    UpdateResult::none()
}

/// Open the editor in builder mode
pub fn handle_new(state: &mut AppState) -> UpdateResult {
    reset_editor(state);
    state.projects.clear_selection();
    state.view = View::Editor;
    UpdateResult::none()
}

pub fn handle_close(state: &mut AppState) -> UpdateResult {
    state.view = View::Dashboard;
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub fn handle_delete(state: &mut AppState, id: &str) -> UpdateResult {
    let was_selected = state.projects.delete(id);
    if was_selected {
        reset_editor(state);
        state.view = View::Dashboard;
    }
    state.dashboard_selected = state
        .dashboard_selected
        .min(state.projects.len().saturating_sub(1));
    info!("Deleted project {}", id);
    UpdateResult::none()
}

/// Show a file from the manifest; always lands on the code tab
pub fn handle_select_file(state: &mut AppState, index: usize) -> UpdateResult {
    let file_count = state.selected_project().map_or(0, |p| p.files.len());
    if index >= file_count {
        return UpdateResult::none();
    }
    if state.editor.file_index != index {
        state.requests.cancel(Panel::Explain);
        state.editor.insights = None;
    }
    state.editor.file_index = index;
    state.editor.tab = EditorTab::Code;
    UpdateResult::none()
}

/// Replace one file's content and route it through the project update
pub fn handle_edit_file(state: &mut AppState, index: usize, content: String) -> UpdateResult {
    let Some(updated) = state
        .selected_project()
        .and_then(|p| p.with_file_content(index, content))
    else {
        return UpdateResult::none();
    };
    state.projects.update(updated);
    UpdateResult::none()
}
