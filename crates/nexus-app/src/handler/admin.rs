//! System configuration editing (admin view only)

use nexus_core::{View, SELECTABLE_MODELS};

use crate::state::{AdminField, AppState};

use super::UpdateResult;

pub fn handle_select(state: &mut AppState, field: AdminField) -> UpdateResult {
    state.admin_field = field;
    UpdateResult::none()
}

/// Cycle the model, flip a toggle, or bump the project limit
pub fn handle_activate(state: &mut AppState) -> UpdateResult {
    if !state.can_open(View::Admin) {
        return UpdateResult::none();
    }
    let config = &mut state.system_config;
    match state.admin_field {
        AdminField::AiModel => {
            let next = SELECTABLE_MODELS
                .iter()
                .position(|m| *m == config.ai_model)
                .map_or(0, |i| (i + 1) % SELECTABLE_MODELS.len());
            config.ai_model = SELECTABLE_MODELS[next].to_string();
        }
        AdminField::Monetization => config.monetization_enabled = !config.monetization_enabled,
        AdminField::AutoTest => config.auto_test_enabled = !config.auto_test_enabled,
        AdminField::MaxProjects => config.max_user_projects = config.max_user_projects.saturating_add(1),
    }
    tracing::info!("System config updated: {:?}", state.system_config);
    UpdateResult::none()
}

/// Change the project limit; it never drops below 1
pub fn handle_adjust_max_projects(state: &mut AppState, step: i32) -> UpdateResult {
    if !state.can_open(View::Admin) {
        return UpdateResult::none();
    }
    let current = i64::from(state.system_config.max_user_projects);
    let next = (current + i64::from(step)).clamp(1, i64::from(u32::MAX));
    state.system_config.max_user_projects = next as u32;
    UpdateResult::none()
}
