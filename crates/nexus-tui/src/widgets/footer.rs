//! Footer: key hints for the current context and busy indicators

use nexus_app::request::Panel;
use nexus_app::{AppState, InputField, UiMode};
use nexus_core::{EditorTab, View};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub struct Footer<'a> {
    state: &'a AppState,
}

impl<'a> Footer<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

/// (key, action) pairs for the current context
pub fn hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
    if state.notice.is_some() {
        return vec![("Enter", "dismiss")];
    }
    if !state.is_authenticated() {
        return vec![("↑↓", "select"), ("Enter", "login"), ("q", "quit")];
    }

    match state.ui_mode {
        UiMode::Input(InputField::Code) => {
            return vec![("Enter", "newline"), ("Ctrl+S", "save"), ("Esc", "discard")]
        }
        UiMode::Input(_) => return vec![("Enter", "submit"), ("Esc", "cancel")],
        UiMode::Chat => return vec![("Enter", "send"), ("Esc", "close chat")],
        UiMode::Normal => {}
    }

    let mut hints = match state.view {
        View::Dashboard => vec![
            ("↑↓", "select"),
            ("Enter", "open"),
            ("n", "new"),
            ("d", "delete"),
        ],
        View::Editor if state.selected_project().is_none() => {
            vec![("p", "prompt"), ("Esc", "back")]
        }
        View::Editor => {
            let mut hints = vec![("Tab", "switch"), ("p", "prompt")];
            hints.extend(match state.editor.tab {
                EditorTab::Code => vec![
                    ("↑↓", "file"),
                    ("e", "edit"),
                    ("x", "explain"),
                    ("r", "refactor"),
                ],
                EditorTab::Qa => vec![("Enter", "audit")],
                EditorTab::Research => vec![("/", "query"), ("Enter", "search")],
                EditorTab::Visual => vec![("o", "image"), ("i", "prompt"), ("Enter", "analyze")],
                EditorTab::Preview => vec![("Enter", "deploy"), ("r", "refresh")],
            });
            hints.push(("Esc", "back"));
            hints
        }
        View::Admin => vec![("↑↓", "field"), ("Enter", "toggle"), ("+/-", "adjust")],
        View::Settings => vec![("L", "logout")],
    };
    hints.extend([("c", "chat"), ("q", "quit")]);
    hints
}

/// Label for each busy panel, in display order
fn busy_labels(state: &AppState) -> Vec<&'static str> {
    [
        (Panel::Generate, "Architecting"),
        (Panel::Qa, "Auditing"),
        (Panel::Explain, "Explaining"),
        (Panel::Refactor, "Refactoring"),
        (Panel::Research, "Researching"),
        (Panel::Image, "Analyzing image"),
        (Panel::Chat, "Thinking"),
    ]
    .into_iter()
    .filter(|(panel, _)| state.is_busy(*panel))
    .map(|(_, label)| label)
    .collect()
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_style(area, ratatui::style::Style::default().bg(palette::DEEPEST_BG));

        let mut spans = vec![Span::raw(" ")];
        for (key, action) in hints(self.state) {
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {action}  "), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);

        let mut busy = busy_labels(self.state);
        if self.state.deployment.is_deploying() {
            busy.push("Deploying");
        }
        if busy.is_empty() {
            return;
        }
        let right = Line::from(vec![
            Span::styled(styles::spinner(self.state.spinner_frame), styles::accent()),
            Span::styled(format!(" {}... ", busy.join(", ")), styles::text_secondary()),
        ]);
        let width = (right.width() as u16).min(area.width);
        Paragraph::new(right).render(
            Rect::new(area.right() - width, area.y, width, 1),
            buf,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{editor_state, logged_in_state, TestTerminal};
    use nexus_core::UserRole;

    #[test]
    fn test_landing_hints() {
        let state = AppState::new();
        assert_eq!(hints(&state)[1], ("Enter", "login"));
    }

    #[test]
    fn test_code_tab_hints_offer_explain() {
        let state = editor_state();
        assert!(hints(&state).contains(&("x", "explain")));
    }

    #[test]
    fn test_input_mode_hints() {
        let mut state = logged_in_state(UserRole::User);
        state.ui_mode = UiMode::Input(InputField::Prompt);
        assert_eq!(hints(&state), vec![("Enter", "submit"), ("Esc", "cancel")]);
    }

    #[test]
    fn test_busy_panel_is_shown() {
        let mut state = logged_in_state(UserRole::User);
        state.requests.begin(Panel::Generate);

        let mut term = TestTerminal::new();
        term.render_widget(Footer::new(&state), Rect::new(0, 0, 100, 1));
        assert!(term.buffer_contains("Architecting..."));
    }
}
