//! Message types for the application (TEA pattern)

use nexus_core::{EditorTab, PerformanceStats, UserRole, View};
use nexus_genai::{GeneratedApp, ResearchResult};

use crate::deployment::DeploymentRun;
use crate::input_key::InputKey;
use crate::request::RequestToken;
use crate::state::{AdminField, InputField};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Periodic tick from the runner (drives the busy spinner)
    Tick,

    /// Quit immediately (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────
    /// Mocked login with the chosen role
    Login(UserRole),
    Logout,
    /// Move the landing screen's role selection
    LandingSelect(usize),

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    Navigate(View),
    SelectTab(EditorTab),
    NextTab,
    PrevTab,
    /// Move the dashboard row selection
    DashboardSelect(usize),
    DismissNotice,
    /// Hide the explain output next to the code view
    CloseInsights,

    // ─────────────────────────────────────────────────────────
    // Text Input
    // ─────────────────────────────────────────────────────────
    /// Start editing a text field
    FocusInput(InputField),
    /// Leave text entry without submitting
    BlurInput,
    /// Replace the focused field's text
    InputChanged { text: String },
    /// Submit the focused field
    SubmitInput,

    // ─────────────────────────────────────────────────────────
    // Project Lifecycle
    // ─────────────────────────────────────────────────────────
    OpenProject { id: String },
    /// Open the editor in builder mode with no project selected
    NewProject,
    CloseEditor,
    DeleteProject { id: String },
    SelectFile(usize),
    /// Replace one file's content of the selected project
    EditFile { index: usize, content: String },

    // ─────────────────────────────────────────────────────────
    // AI Actions and Replies
    // ─────────────────────────────────────────────────────────
    Generate,
    GenerationCompleted {
        token: RequestToken,
        /// Project selected when the request was sent
        target_id: Option<String>,
        prompt: String,
        app: GeneratedApp,
    },
    GenerationFailed { token: RequestToken, error: String },

    RunQa,
    QaCompleted {
        token: RequestToken,
        project_id: String,
        report: String,
    },
    QaFailed { token: RequestToken, error: String },

    Explain,
    ExplainCompleted { token: RequestToken, text: String },
    ExplainFailed { token: RequestToken, error: String },

    Refactor,
    RefactorCompleted {
        token: RequestToken,
        project_id: String,
        file_index: usize,
        content: String,
    },
    RefactorFailed { token: RequestToken, error: String },

    Research,
    ResearchCompleted {
        token: RequestToken,
        result: ResearchResult,
    },
    ResearchFailed { token: RequestToken, error: String },

    AnalyzeImage,
    ImageAnalysisCompleted {
        token: RequestToken,
        /// Display name of the analyzed image
        label: String,
        text: String,
    },
    ImageAnalysisFailed { token: RequestToken, error: String },

    // ─────────────────────────────────────────────────────────
    // Chat
    // ─────────────────────────────────────────────────────────
    ToggleChat,
    SendChat,
    ChatReplied { token: RequestToken, text: String },
    ChatFailed { token: RequestToken, error: String },

    // ─────────────────────────────────────────────────────────
    // Deployment
    // ─────────────────────────────────────────────────────────
    StartDeployment,
    DeploymentLog { run: DeploymentRun, line: String },
    DeploymentFinished {
        run: DeploymentRun,
        project_id: String,
        preview_url: String,
        performance: PerformanceStats,
    },
    /// Return a deployed preview panel to idle
    RefreshPreview,

    // ─────────────────────────────────────────────────────────
    // Admin
    // ─────────────────────────────────────────────────────────
    AdminSelect(AdminField),
    /// Cycle/toggle/increment the selected admin field
    AdminActivate,
    /// Adjust the max-projects limit by a signed step
    AdjustMaxProjects(i32),

    // ─────────────────────────────────────────────────────────
    // Persistence
    // ─────────────────────────────────────────────────────────
    PersistFailed { error: String },
}
