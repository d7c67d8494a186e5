//! Core domain type definitions

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Application state enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Application is initializing
    #[default]
    Initializing,
    /// Event loop is running
    Running,
    /// Application is shutting down
    Quitting,
}

// ─────────────────────────────────────────────────────────────────────────────
// Identity
// ─────────────────────────────────────────────────────────────────────────────

/// Privilege tier of the signed-in user.
///
/// Variants are declared in ascending privilege so the derived `Ord` gives the
/// total order `User < Admin < SuperAdmin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    User,
    Admin,
    SuperAdmin,
}

impl UserRole {
    /// The baseline (least privileged) role
    pub const BASELINE: UserRole = UserRole::User;

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Admin => "ADMIN",
            UserRole::SuperAdmin => "SUPER_ADMIN",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The signed-in identity. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub credits: u64,
}

impl User {
    /// Fabricate a user for the chosen role. There is no credential check.
    pub fn mock(role: UserRole) -> Self {
        let (email, credits) = match role {
            UserRole::SuperAdmin => ("admin@nexus.ai", 999_999),
            UserRole::Admin | UserRole::User => ("builder@nexus.ai", 50),
        };
        Self {
            id: random_id(),
            email: email.to_string(),
            role,
            credits,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Projects
// ─────────────────────────────────────────────────────────────────────────────

/// Informational lifecycle label; no transition rules are enforced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Draft,
    Building,
    Testing,
    Stable,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::Building => "building",
            ProjectStatus::Testing => "testing",
            ProjectStatus::Stable => "stable",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single generated source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFile {
    pub name: String,
    pub path: String,
    pub content: String,
}

impl ProjectFile {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OptimizationLevel {
    #[default]
    Standard,
    Aggressive,
    Ultra,
}

impl std::fmt::Display for OptimizationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OptimizationLevel::Standard => "Standard",
            OptimizationLevel::Aggressive => "Aggressive",
            OptimizationLevel::Ultra => "Ultra",
        };
        f.write_str(label)
    }
}

/// Synthetic deployment metrics. Never derived from file content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceStats {
    pub score: u8,
    pub bundle_size: String,
    pub ttfb: String,
    pub fcp: String,
    pub optimization_level: OptimizationLevel,
}

/// A generated application, owned by the session's project list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub files: Vec<ProjectFile>,
    #[serde(default)]
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_report: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceStats>,
}

impl Project {
    /// Create a draft project stamped with the current time
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        files: Vec<ProjectFile>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            files,
            status: ProjectStatus::Draft,
            created_at: Utc::now(),
            test_report: None,
            preview_url: None,
            performance: None,
        }
    }

    /// Fresh random project id (9 base36 characters)
    pub fn generate_id() -> String {
        random_id()
    }

    /// Project name derived from a prompt: its first three words
    pub fn name_from_prompt(prompt: &str) -> String {
        prompt
            .split_whitespace()
            .take(3)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Copy of this project with one file's content replaced.
    ///
    /// Returns `None` when `index` is out of range.
    pub fn with_file_content(&self, index: usize, content: impl Into<String>) -> Option<Self> {
        let mut updated = self.clone();
        let file = updated.files.get_mut(index)?;
        file.content = content.into();
        Some(updated)
    }

    /// Copy of this project carrying a QA report; QA marks the project stable
    pub fn with_test_report(&self, report: impl Into<String>) -> Self {
        Self {
            test_report: Some(report.into()),
            status: ProjectStatus::Stable,
            ..self.clone()
        }
    }

    /// Copy of this project after a completed deployment
    pub fn with_deployment(&self, preview_url: String, performance: PerformanceStats) -> Self {
        Self {
            preview_url: Some(preview_url),
            performance: Some(performance),
            status: ProjectStatus::Stable,
            ..self.clone()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// System configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Models offered in the admin panel
pub const SELECTABLE_MODELS: &[&str] = &["gemini-3-pro-preview", "gemini-3-flash-preview"];

/// Process-wide configuration, editable from the admin view only.
///
/// `max_user_projects` is displayed but never enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_ai_model")]
    pub ai_model: String,
    #[serde(default = "default_true")]
    pub monetization_enabled: bool,
    #[serde(default = "default_true")]
    pub auto_test_enabled: bool,
    #[serde(default = "default_max_user_projects")]
    pub max_user_projects: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            ai_model: default_ai_model(),
            monetization_enabled: true,
            auto_test_enabled: true,
            max_user_projects: default_max_user_projects(),
        }
    }
}

fn default_ai_model() -> String {
    SELECTABLE_MODELS[0].to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_user_projects() -> u32 {
    5
}

// ─────────────────────────────────────────────────────────────────────────────
// Chat
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Bot,
            text: text.into(),
        }
    }
}

/// 9 random base36 characters
fn random_id() -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    (0..9)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
