//! Deployment simulation handlers

use nexus_core::prelude::*;
use nexus_core::PerformanceStats;

use crate::deployment::{DeploymentRun, DeploymentState, DeploymentTimings};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Start deploying the selected project. Only one run at a time.
pub fn handle_start(state: &mut AppState) -> UpdateResult {
    if state.deployment.is_deploying() {
        return UpdateResult::none();
    }
    let Some(project) = state.selected_project() else {
        return UpdateResult::none();
    };
    let (project_id, file_count) = (project.id.clone(), project.files.len());

    let run = state.next_deployment_run();
    state.deployment = DeploymentState::Deploying {
        run,
        project_id: project_id.clone(),
        logs: Vec::new(),
    };

    UpdateResult::action(UpdateAction::StartDeployment {
        run,
        project_id,
        file_count,
        timings: DeploymentTimings::from(&state.settings.deployment),
    })
}

pub fn handle_log(state: &mut AppState, run: DeploymentRun, line: String) -> UpdateResult {
    match &mut state.deployment {
        DeploymentState::Deploying {
            run: active, logs, ..
        } if *active == run => logs.push(line),
        _ => debug!("Dropping log line from stale deployment {}", run),
    }
    UpdateResult::none()
}

pub fn handle_finished(
    state: &mut AppState,
    run: DeploymentRun,
    project_id: String,
    preview_url: String,
    performance: PerformanceStats,
) -> UpdateResult {
    if state.deployment.active_run() != Some(run) {
        debug!("Ignoring completion of stale deployment {}", run);
        return UpdateResult::none();
    }

    let updated = state
        .projects
        .get(&project_id)
        .map(|p| p.with_deployment(preview_url, performance));
    state.deployment = DeploymentState::Deployed {
        project_id: project_id.clone(),
    };

    match updated {
        Some(project) => {
            state.projects.update(project);
        }
        None => debug!("Deployed project {} no longer exists", project_id),
    }
    UpdateResult::none()
}

/// Back to the deploy prompt
pub fn handle_refresh(state: &mut AppState) -> UpdateResult {
    if matches!(state.deployment, DeploymentState::Deployed { .. }) {
        state.deployment = DeploymentState::Idle;
    }
    UpdateResult::none()
}
