//! Engine - orchestration state for the terminal runner
//!
//! The Engine owns the TEA state, the message channel, the shutdown signal
//! and the generation service. After every processed message it writes the
//! project list back to storage if it changed.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use nexus_core::prelude::*;
use nexus_core::AppPhase;
use nexus_genai::GenerationService;

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;
use crate::storage::ProjectRepository;

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for Nexus Builder.
///
/// Frontends feed it messages (keys, ticks) and render `state` after each
/// drain. Background tasks report through `msg_tx`.
pub struct Engine<S> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Send `true` to stop background tasks (deployment runs).
    pub shutdown_tx: watch::Sender<bool>,

    pub shutdown_rx: watch::Receiver<bool>,

    service: Arc<S>,
    repository: ProjectRepository,

    /// Project store revision last written to storage
    persisted_revision: u64,
}

impl<S> Engine<S>
where
    S: GenerationService + Send + Sync + 'static,
{
    /// Create the engine, loading the stored project list.
    ///
    /// Must be called inside a tokio runtime. A corrupt or unreadable store
    /// is fatal and returned as an error.
    pub fn new(settings: Settings, repository: ProjectRepository, service: S) -> Result<Self> {
        let projects = repository.load().context("Failed to load stored projects")?;
        info!(
            "Loaded {} projects from {}",
            projects.len(),
            repository.store().dir().display()
        );

        let mut state = AppState::with_settings(settings, projects);
        state.phase = AppPhase::Running;
        let persisted_revision = state.projects.revision();

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        signals::spawn_signal_handler(msg_tx.clone());

        Ok(Self {
            state,
            msg_tx,
            msg_rx,
            shutdown_tx,
            shutdown_rx,
            service: Arc::new(service),
            repository,
            persisted_revision,
        })
    }

    /// Process a single message through the TEA update cycle, then persist
    /// the project list if it changed.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.service,
            &self.shutdown_rx,
        );
        self.persist_if_changed();
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    fn persist_if_changed(&mut self) {
        let revision = self.state.projects.revision();
        if revision == self.persisted_revision {
            return;
        }
        // Recorded even on failure so one bad write yields one notice
        self.persisted_revision = revision;

        let saved = self
            .repository
            .save(self.state.projects.projects())
            .context("Failed to persist projects");
        if let Err(e) = saved {
            process::process_message(
                &mut self.state,
                Message::PersistFailed {
                    error: e.to_string(),
                },
                &self.msg_tx,
                &self.service,
                &self.shutdown_rx,
            );
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Signal background tasks to stop and write any unsaved changes.
    pub async fn shutdown(&mut self) {
        let _ = self.shutdown_tx.send(true);
        self.persist_if_changed();
        // Let cancelled tasks observe the signal before the runtime drops
        tokio::task::yield_now().await;
        info!("Engine shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use crate::storage::{KvStore, PROJECTS_KEY};
    use nexus_core::{Project, ProjectFile, UserRole};
    use nexus_genai::test_utils::ScriptedService;
    use tempfile::tempdir;

    const APP_JSON: &str = r#"{"description":"Tasks","files":[{"name":"App.tsx","path":"src/App.tsx","content":"export default 1"}]}"#;

    fn engine_in(dir: &std::path::Path, service: ScriptedService) -> Engine<ScriptedService> {
        Engine::new(
            Settings::default(),
            ProjectRepository::in_dir(dir),
            service,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_new_engine_loads_stored_projects() {
        let dir = tempdir().unwrap();
        let project = Project::new("abc", "Stored", "", vec![ProjectFile::new("a", "a", "")]);
        ProjectRepository::in_dir(dir.path())
            .save(std::slice::from_ref(&project))
            .unwrap();

        let engine = engine_in(dir.path(), ScriptedService::new());
        assert_eq!(engine.state.projects.projects(), &[project]);
        assert_eq!(engine.state.phase, AppPhase::Running);
    }

    #[tokio::test]
    async fn test_corrupt_store_is_fatal() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(format!("{PROJECTS_KEY}.json")), "{nope").unwrap();

        let result = Engine::new(
            Settings::default(),
            ProjectRepository::in_dir(dir.path()),
            ScriptedService::new(),
        );
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_generated_project_is_persisted() {
        let dir = tempdir().unwrap();
        let mut engine = engine_in(dir.path(), ScriptedService::new().reply(APP_JSON));

        engine.process_message(Message::Login(UserRole::User));
        engine.state.editor.prompt = "Todo App".to_string();
        engine.process_message(Message::Generate);

        let reply = tokio::time::timeout(std::time::Duration::from_secs(2), engine.msg_rx.recv())
            .await
            .unwrap()
            .unwrap();
        engine.process_message(reply);

        let stored = ProjectRepository::in_dir(dir.path()).load().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "Todo App");
        assert_eq!(stored, engine.state.projects.projects());
    }

    #[tokio::test]
    async fn test_unchanged_state_is_not_written() {
        let dir = tempdir().unwrap();
        let mut engine = engine_in(dir.path(), ScriptedService::new());

        engine.process_message(Message::Login(UserRole::User));
        engine.process_message(Message::Key(InputKey::Char('4')));

        let store = KvStore::new(dir.path());
        assert!(store.get::<Vec<Project>>(PROJECTS_KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_drain_processes_queued_messages() {
        let dir = tempdir().unwrap();
        let mut engine = engine_in(dir.path(), ScriptedService::new());

        let tx = engine.msg_sender();
        tx.send(Message::Login(UserRole::Admin)).await.unwrap();
        tx.send(Message::Quit).await.unwrap();

        assert_eq!(engine.drain_pending_messages(), 2);
        assert!(engine.state.is_authenticated());
        assert!(engine.should_quit());
    }

    #[tokio::test]
    async fn test_shutdown_signals_background_tasks() {
        let dir = tempdir().unwrap();
        let mut engine = engine_in(dir.path(), ScriptedService::new());
        let rx = engine.shutdown_rx.clone();

        engine.shutdown().await;
        assert!(*rx.borrow());
    }
}
