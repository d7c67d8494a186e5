//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `input`: Text field editing and submission
//! - `project`: Project lifecycle (open, new, close, delete, edit)
//! - `ai`: AI-backed actions and their replies
//! - `chat`: Chat overlay
//! - `deployment`: Deployment simulation
//! - `admin`: System configuration editing

pub(crate) mod admin;
pub(crate) mod ai;
pub(crate) mod chat;
pub(crate) mod deployment;
pub(crate) mod input;
pub(crate) mod keys;
pub(crate) mod project;
pub(crate) mod update;


use nexus_core::ProjectFile;

use crate::deployment::{DeploymentRun, DeploymentTimings};
use crate::request::RequestToken;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Generate a project from a prompt
    GenerateProject {
        token: RequestToken,
        model: String,
        prompt: String,
        /// Project selected when the request was made
        target_id: Option<String>,
    },

    /// Bug/security review of a project's files
    RunQa {
        token: RequestToken,
        project_id: String,
        files: Vec<ProjectFile>,
    },

    ExplainFile {
        token: RequestToken,
        file_name: String,
        content: String,
    },

    RefactorFile {
        token: RequestToken,
        project_id: String,
        file_index: usize,
        file_name: String,
        content: String,
        instruction: String,
    },

    Research { token: RequestToken, query: String },

    /// Load an image (path or data URL) and analyze it
    AnalyzeImage {
        token: RequestToken,
        source: String,
        prompt: String,
    },

    Chat { token: RequestToken, message: String },

    /// Spawn the deployment simulation task
    StartDeployment {
        run: DeploymentRun,
        project_id: String,
        file_count: usize,
        timings: DeploymentTimings,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<crate::message::Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: crate::message::Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
