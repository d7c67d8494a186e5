//! Full-frame rendering tests

use super::*;
use crate::test_utils::{editor_state, logged_in_state, TestTerminal};
use nexus_app::{InputField, Message, UiMode};
use nexus_core::UserRole;

fn draw(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_logged_out_renders_landing() {
    let state = AppState::new();
    let term = draw(&state);

    assert!(term.buffer_contains("Enter as Builder"));
    assert!(term.buffer_contains("login"));
}

#[test]
fn test_dashboard_after_login() {
    let state = logged_in_state(UserRole::User);
    let term = draw(&state);

    assert!(term.buffer_contains("No projects yet"));
    assert!(term.buffer_contains("builder@nexus.ai"));
}

#[test]
fn test_each_view_renders() {
    let mut state = logged_in_state(UserRole::SuperAdmin);

    state.view = View::Admin;
    assert!(draw(&state).buffer_contains("System Config"));

    state.view = View::Settings;
    assert!(draw(&state).buffer_contains("Credit balance"));

    state.view = View::Editor;
    assert!(draw(&state).buffer_contains("What are we building today?"));
}

#[test]
fn test_editor_with_project() {
    let state = editor_state();
    let term = draw(&state);

    assert!(term.buffer_contains("src/App.tsx"));
    assert!(term.buffer_contains("export default function App() {}"));
}

#[test]
fn test_notice_overlays_view() {
    let mut state = logged_in_state(UserRole::User);
    state.show_notice("Generation failed.", "Please refine your prompt.");

    let term = draw(&state);
    assert!(term.buffer_contains("Please refine your prompt."));
    assert!(term.buffer_contains("dismiss"));
}

#[test]
fn test_chat_overlay() {
    let mut state = logged_in_state(UserRole::User);
    state.chat.open = true;
    state.ui_mode = UiMode::Chat;

    let term = draw(&state);
    assert!(term.buffer_contains("NexusAI Assistant"));
    assert!(term.buffer_contains("close chat"));
}

#[test]
fn test_prompt_typing_is_visible() {
    let mut state = logged_in_state(UserRole::User);
    state.view = View::Editor;
    state.ui_mode = UiMode::Input(InputField::Prompt);
    let _ = nexus_app::handler::update(
        &mut state,
        Message::InputChanged {
            text: "Todo App".to_string(),
        },
    );

    let term = draw(&state);
    assert!(term.buffer_contains("Todo App▏"));
}

#[test]
fn test_compact_terminal_does_not_panic() {
    let state = editor_state();
    let mut term = TestTerminal::compact();
    term.draw_with(|frame| view(frame, &state));
    assert!(term.buffer_contains("Nexus"));
}
