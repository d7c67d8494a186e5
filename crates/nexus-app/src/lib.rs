//! nexus-app - Application state and orchestration for Nexus Builder
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the Engine that owns the message loop, configuration loading,
//! durable project storage and the deployment simulation.

pub mod actions;
pub mod config;
pub mod deployment;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod project_store;
pub mod request;
pub mod signals;
pub mod state;
pub mod storage;

// Re-export primary types
pub use deployment::{DeploymentRun, DeploymentState};
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use project_store::ProjectStore;
pub use request::{Panel, RequestToken};
pub use state::{AdminField, AppState, InputField, Notice, UiMode};
pub use storage::{KvStore, ProjectRepository};
