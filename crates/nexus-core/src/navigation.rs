//! Top-level views, editor tabs and role-gated access

use crate::types::UserRole;

/// Top-level view of an authenticated session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum View {
    #[default]
    Dashboard,
    Editor,
    Admin,
    Settings,
}

impl View {
    pub const ALL: [View; 4] = [View::Dashboard, View::Editor, View::Admin, View::Settings];

    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Editor => "Editor",
            View::Admin => "Admin",
            View::Settings => "Settings",
        }
    }
}

/// Sub-tab of the project editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum EditorTab {
    #[default]
    Code,
    Qa,
    Research,
    Visual,
    Preview,
}

impl EditorTab {
    pub const ALL: [EditorTab; 5] = [
        EditorTab::Code,
        EditorTab::Qa,
        EditorTab::Research,
        EditorTab::Visual,
        EditorTab::Preview,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EditorTab::Code => "code",
            EditorTab::Qa => "qa",
            EditorTab::Research => "research",
            EditorTab::Visual => "visual",
            EditorTab::Preview => "preview",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    /// Next tab, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Whether a user holding `role` may open `view`.
///
/// Admin requires any role above the baseline; every other view is open to
/// all authenticated users.
pub fn can_access(role: UserRole, view: View) -> bool {
    match view {
        View::Admin => role != UserRole::BASELINE,
        View::Dashboard | View::Editor | View::Settings => true,
    }
}
