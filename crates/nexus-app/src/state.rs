//! Application state (Model in TEA pattern)

use nexus_core::{
    can_access, AppPhase, ChatMessage, EditorTab, Project, ProjectFile, SystemConfig, User,
    UserRole, View,
};
use nexus_genai::ResearchResult;

use crate::config::Settings;
use crate::deployment::{DeploymentRun, DeploymentState};
use crate::project_store::ProjectStore;
use crate::request::{Panel, RequestTracker};

/// Initial prompt of the image analysis panel
pub const DEFAULT_IMAGE_PROMPT: &str = "Analyze this for UI architecture patterns.";

/// First message shown in the chat overlay
pub const CHAT_GREETING: &str =
    "Hello! I am your NexusAI assistant. How can I help you architect your next platform?";

/// Roles offered on the landing screen, in display order
pub const LANDING_ROLES: [UserRole; 3] = [UserRole::User, UserRole::Admin, UserRole::SuperAdmin];

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Keys navigate
    #[default]
    Normal,
    /// Keys edit a text field
    Input(InputField),
    /// Chat overlay open with its input focused
    Chat,
}

/// Editable text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    /// Builder prompt for project generation
    Prompt,
    ResearchQuery,
    /// Path or data URL of the image to analyze
    ImageSource,
    ImagePrompt,
    /// Draft content of the current file
    Code,
    Chat,
}

impl InputField {
    pub fn label(&self) -> &'static str {
        match self {
            InputField::Prompt => "Prompt",
            InputField::ResearchQuery => "Research",
            InputField::ImageSource => "Image",
            InputField::ImagePrompt => "Analysis prompt",
            InputField::Code => "Code",
            InputField::Chat => "Message",
        }
    }

    /// Enter inserts a newline instead of submitting
    pub fn is_multiline(&self) -> bool {
        matches!(self, InputField::Code)
    }
}

/// Editable rows of the admin view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminField {
    #[default]
    AiModel,
    Monetization,
    AutoTest,
    MaxProjects,
}

impl AdminField {
    pub const ALL: [AdminField; 4] = [
        AdminField::AiModel,
        AdminField::Monetization,
        AdminField::AutoTest,
        AdminField::MaxProjects,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdminField::AiModel => "AI Model",
            AdminField::Monetization => "Monetization",
            AdminField::AutoTest => "Auto QA",
            AdminField::MaxProjects => "Max Projects / User",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A one-shot modal message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Per-editor panel state
#[derive(Debug, Clone)]
pub struct EditorState {
    pub tab: EditorTab,
    pub file_index: usize,
    pub prompt: String,
    /// Explain output; `Some` while the insights panel is shown
    pub insights: Option<String>,
    pub research_query: String,
    pub research: Option<ResearchResult>,
    pub image_source: String,
    pub image_prompt: String,
    /// Name of the last analyzed image
    pub image_label: Option<String>,
    pub image_analysis: Option<String>,
    /// Working copy while editing the current file
    pub code_draft: String,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            tab: EditorTab::default(),
            file_index: 0,
            prompt: String::new(),
            insights: None,
            research_query: String::new(),
            research: None,
            image_source: String::new(),
            image_prompt: DEFAULT_IMAGE_PROMPT.to_string(),
            image_label: None,
            image_analysis: None,
            code_draft: String::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatState {
    pub open: bool,
    pub messages: Vec<ChatMessage>,
    pub input: String,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            open: false,
            messages: vec![ChatMessage::bot(CHAT_GREETING)],
            input: String::new(),
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,

    /// Mocked identity; `None` shows the landing screen
    pub user: Option<User>,
    pub view: View,

    pub projects: ProjectStore,
    pub system_config: SystemConfig,
    pub settings: Settings,

    pub editor: EditorState,
    pub chat: ChatState,
    pub deployment: DeploymentState,
    last_run: u64,

    /// In-flight service requests per panel
    pub requests: RequestTracker,
    pub notice: Option<Notice>,

    pub landing_selected: usize,
    pub dashboard_selected: usize,
    pub admin_field: AdminField,

    /// Animation frame counter, advanced while something is busy
    pub spinner_frame: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), Vec::new())
    }

    /// State seeded with loaded settings and the stored project list
    pub fn with_settings(settings: Settings, projects: Vec<Project>) -> Self {
        Self {
            phase: AppPhase::Initializing,
            ui_mode: UiMode::Normal,
            user: None,
            view: View::Dashboard,
            projects: ProjectStore::with_projects(projects),
            system_config: settings.defaults.clone(),
            settings,
            editor: EditorState::default(),
            chat: ChatState::default(),
            deployment: DeploymentState::Idle,
            last_run: 0,
            requests: RequestTracker::new(),
            notice: None,
            landing_selected: 0,
            dashboard_selected: 0,
            admin_field: AdminField::default(),
            spinner_frame: 0,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────

    /// Mocked login: fabricate a user for `role`
    pub fn login(&mut self, role: UserRole) {
        let user = User::mock(role);
        tracing::info!("Logged in as {} ({})", user.email, user.role);
        self.user = Some(user);
        self.view = View::Dashboard;
        self.ui_mode = UiMode::Normal;
    }

    /// Clear the identity and return to the dashboard.
    ///
    /// In-flight replies are discarded; projects stay shared.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!("Logged out {}", user.email);
        }
        self.view = View::Dashboard;
        self.ui_mode = UiMode::Normal;
        self.requests.cancel_all();
        self.chat = ChatState::default();
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Whether the current user may open `view`
    pub fn can_open(&self, view: View) -> bool {
        self.role().is_some_and(|role| can_access(role, view))
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    // ─────────────────────────────────────────────────────────
    // Editor helpers
    // ─────────────────────────────────────────────────────────

    pub fn selected_project(&self) -> Option<&Project> {
        self.projects.selected()
    }

    /// File shown in the code tab
    pub fn current_file(&self) -> Option<&ProjectFile> {
        self.projects
            .selected()
            .and_then(|p| p.files.get(self.editor.file_index))
    }

    pub fn is_busy(&self, panel: Panel) -> bool {
        self.requests.is_busy(panel)
    }

    pub fn input_text(&self, field: InputField) -> &str {
        match field {
            InputField::Prompt => &self.editor.prompt,
            InputField::ResearchQuery => &self.editor.research_query,
            InputField::ImageSource => &self.editor.image_source,
            InputField::ImagePrompt => &self.editor.image_prompt,
            InputField::Code => &self.editor.code_draft,
            InputField::Chat => &self.chat.input,
        }
    }

    pub fn input_text_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::Prompt => &mut self.editor.prompt,
            InputField::ResearchQuery => &mut self.editor.research_query,
            InputField::ImageSource => &mut self.editor.image_source,
            InputField::ImagePrompt => &mut self.editor.image_prompt,
            InputField::Code => &mut self.editor.code_draft,
            InputField::Chat => &mut self.chat.input,
        }
    }

    /// Field currently receiving keystrokes
    pub fn focused_field(&self) -> Option<InputField> {
        match self.ui_mode {
            UiMode::Input(field) => Some(field),
            UiMode::Chat => Some(InputField::Chat),
            UiMode::Normal => None,
        }
    }

    pub fn show_notice(&mut self, title: impl Into<String>, message: impl Into<String>) {
        let notice = Notice::new(title, message);
        tracing::debug!("Notice: {} - {}", notice.title, notice.message);
        self.notice = Some(notice);
    }

    pub fn next_deployment_run(&mut self) -> DeploymentRun {
        self.last_run += 1;
        DeploymentRun(self.last_run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_unauthenticated() {
        let state = AppState::new();
        assert!(!state.is_authenticated());
        assert_eq!(state.view, View::Dashboard);
        assert_eq!(state.system_config, SystemConfig::default());
        assert_eq!(state.chat.messages, vec![ChatMessage::bot(CHAT_GREETING)]);
        assert_eq!(state.editor.image_prompt, DEFAULT_IMAGE_PROMPT);
    }

    #[test]
    fn test_login_fabricates_user() {
        let mut state = AppState::new();
        state.login(UserRole::SuperAdmin);
        let user = state.user.as_ref().unwrap();
        assert_eq!(user.email, "admin@nexus.ai");
        assert_eq!(user.credits, 999_999);
        assert!(state.can_open(View::Admin));
    }

    #[test]
    fn test_logout_resets_view_and_requests() {
        let mut state = AppState::new();
        state.login(UserRole::Admin);
        state.view = View::Settings;
        state.requests.begin(Panel::Chat);

        state.logout();
        assert!(state.user.is_none());
        assert_eq!(state.view, View::Dashboard);
        assert!(!state.requests.any_busy());
    }

    #[test]
    fn test_can_open_requires_login() {
        let state = AppState::new();
        assert!(!state.can_open(View::Dashboard));
    }

    #[test]
    fn test_settings_seed_system_config() {
        let mut settings = Settings::default();
        settings.defaults.max_user_projects = 9;
        let state = AppState::with_settings(settings, Vec::new());
        assert_eq!(state.system_config.max_user_projects, 9);
    }

    #[test]
    fn test_admin_field_cycles() {
        assert_eq!(AdminField::AiModel.next(), AdminField::Monetization);
        assert_eq!(AdminField::MaxProjects.next(), AdminField::AiModel);
        assert_eq!(AdminField::AiModel.prev(), AdminField::MaxProjects);
    }

    #[test]
    fn test_deployment_runs_increase() {
        let mut state = AppState::new();
        let a = state.next_deployment_run();
        let b = state.next_deployment_run();
        assert!(b > a);
    }
}
