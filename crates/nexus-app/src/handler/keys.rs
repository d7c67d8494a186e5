//! Key event handlers for different UI modes

use nexus_core::{EditorTab, UserRole, View};

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, InputField, UiMode, LANDING_ROLES};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key.is_force_quit() {
        return Some(Message::Quit);
    }

    // A notice blocks everything until dismissed
    if state.notice.is_some() {
        return handle_key_notice(key);
    }

    if !state.is_authenticated() {
        return handle_key_landing(state, key);
    }

    match state.ui_mode {
        UiMode::Input(field) => handle_key_input(state, field, key),
        UiMode::Chat => handle_key_input(state, InputField::Chat, key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

fn handle_key_notice(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => Some(Message::DismissNotice),
        _ => None,
    }
}

fn handle_key_landing(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::Up | InputKey::Char('k') => Some(Message::LandingSelect(
            state.landing_selected.saturating_sub(1),
        )),
        InputKey::Down | InputKey::Char('j') => {
            Some(Message::LandingSelect(state.landing_selected + 1))
        }
        InputKey::Enter => LANDING_ROLES
            .get(state.landing_selected)
            .map(|role| Message::Login(*role)),
        InputKey::Char('b') => Some(Message::Login(UserRole::User)),
        InputKey::Char('a') => Some(Message::Login(UserRole::Admin)),
        InputKey::Char('s') => Some(Message::Login(UserRole::SuperAdmin)),
        _ => None,
    }
}

/// Keys while a text field is focused
fn handle_key_input(state: &AppState, field: InputField, key: InputKey) -> Option<Message> {
    let text = state.input_text(field);
    match key {
        InputKey::Esc => Some(Message::BlurInput),

        InputKey::Enter if field.is_multiline() => Some(Message::InputChanged {
            text: format!("{text}\n"),
        }),
        InputKey::Enter | InputKey::CharCtrl('s') => Some(Message::SubmitInput),

        InputKey::Backspace => {
            let mut text = text.to_string();
            text.pop();
            Some(Message::InputChanged { text })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::InputChanged {
            text: String::new(),
        }),

        InputKey::Tab if field.is_multiline() => Some(Message::InputChanged {
            text: format!("{text}  "),
        }),

        InputKey::Char(c) => Some(Message::InputChanged {
            text: format!("{text}{c}"),
        }),

        _ => None,
    }
}

/// Keys in normal (navigation) mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => return Some(Message::Quit),
        InputKey::Char('c') => return Some(Message::ToggleChat),
        InputKey::Char('L') => return Some(Message::Logout),

        // Top-level views
        InputKey::Char('1') => return Some(Message::Navigate(View::Dashboard)),
        InputKey::Char('2') => return Some(Message::Navigate(View::Editor)),
        InputKey::Char('3') => return Some(Message::Navigate(View::Admin)),
        InputKey::Char('4') => return Some(Message::Navigate(View::Settings)),
        _ => {}
    }

    match state.view {
        View::Dashboard => handle_key_dashboard(state, key),
        View::Editor => handle_key_editor(state, key),
        View::Admin => handle_key_admin(state, key),
        View::Settings => None,
    }
}

fn handle_key_dashboard(state: &AppState, key: InputKey) -> Option<Message> {
    let selected = state
        .projects
        .get_by_index(state.dashboard_selected)
        .map(|p| p.id.clone());

    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::DashboardSelect(
            state.dashboard_selected.saturating_sub(1),
        )),
        InputKey::Down | InputKey::Char('j') => {
            Some(Message::DashboardSelect(state.dashboard_selected + 1))
        }
        InputKey::Enter => selected.map(|id| Message::OpenProject { id }),
        InputKey::Char('d') => selected.map(|id| Message::DeleteProject { id }),
        InputKey::Char('n') => Some(Message::NewProject),
        _ => None,
    }
}

fn handle_key_editor(state: &AppState, key: InputKey) -> Option<Message> {
    // Shared across tabs
    match key {
        InputKey::Esc if state.editor.insights.is_some() => return Some(Message::CloseInsights),
        InputKey::Esc => return Some(Message::CloseEditor),
        InputKey::Tab => return Some(Message::NextTab),
        InputKey::BackTab => return Some(Message::PrevTab),
        InputKey::Char('p') => return Some(Message::FocusInput(InputField::Prompt)),
        InputKey::Char('a') => return Some(Message::RunQa),
        _ => {}
    }

    match state.editor.tab {
        EditorTab::Code => match key {
            InputKey::Up | InputKey::Char('k') => Some(Message::SelectFile(
                state.editor.file_index.saturating_sub(1),
            )),
            InputKey::Down | InputKey::Char('j') => {
                Some(Message::SelectFile(state.editor.file_index + 1))
            }
            InputKey::Char('x') => Some(Message::Explain),
            InputKey::Char('r') => Some(Message::Refactor),
            InputKey::Char('e') => Some(Message::FocusInput(InputField::Code)),
            // Builder mode: Enter starts typing the prompt
            InputKey::Enter if state.selected_project().is_none() => {
                Some(Message::FocusInput(InputField::Prompt))
            }
            _ => None,
        },
        EditorTab::Qa => match key {
            InputKey::Enter => Some(Message::RunQa),
            _ => None,
        },
        EditorTab::Research => match key {
            InputKey::Char('/') | InputKey::Char('i') => {
                Some(Message::FocusInput(InputField::ResearchQuery))
            }
            InputKey::Enter => Some(Message::Research),
            _ => None,
        },
        EditorTab::Visual => match key {
            InputKey::Char('o') => Some(Message::FocusInput(InputField::ImageSource)),
            InputKey::Char('i') => Some(Message::FocusInput(InputField::ImagePrompt)),
            InputKey::Enter => Some(Message::AnalyzeImage),
            _ => None,
        },
        EditorTab::Preview => match key {
            InputKey::Enter | InputKey::Char('d') => Some(Message::StartDeployment),
            InputKey::Char('r') => Some(Message::RefreshPreview),
            _ => None,
        },
    }
}

fn handle_key_admin(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::AdminSelect(state.admin_field.prev())),
        InputKey::Down | InputKey::Char('j') => {
            Some(Message::AdminSelect(state.admin_field.next()))
        }
        InputKey::Enter | InputKey::Char(' ') => Some(Message::AdminActivate),
        InputKey::Char('+') | InputKey::Char('=') | InputKey::Right => {
            Some(Message::AdjustMaxProjects(1))
        }
        InputKey::Char('-') | InputKey::Left => Some(Message::AdjustMaxProjects(-1)),
        _ => None,
    }
}
