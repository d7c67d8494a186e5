//! Chat assistant overlay

use nexus_app::request::Panel;
use nexus_app::{AppState, UiMode};
use nexus_core::ChatRole;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use super::input::TextInput;
use super::modal_overlay::render_shadow;
use crate::theme::styles;

const PANEL_WIDTH: u16 = 56;

pub struct ChatPanel<'a> {
    state: &'a AppState,
}

impl<'a> ChatPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Panel rect docked to the right edge of `area`
    pub fn area_in(area: Rect) -> Rect {
        let width = PANEL_WIDTH.min(area.width);
        Rect::new(
            area.right() - width,
            area.y,
            width,
            area.height.saturating_sub(1),
        )
    }

    fn transcript(&self) -> Vec<Line<'a>> {
        let state = self.state;
        let mut lines = Vec::new();
        for message in &state.chat.messages {
            let (who, style) = match message.role {
                ChatRole::User => ("you", styles::accent_bold()),
                ChatRole::Bot => ("nexus", styles::status_green()),
            };
            lines.push(Line::from(Span::styled(who, style)));
            for text_line in message.text.lines() {
                lines.push(Line::from(Span::styled(text_line, styles::text_primary())));
            }
            lines.push(Line::from(""));
        }
        if state.is_busy(Panel::Chat) {
            lines.push(Line::from(vec![
                Span::styled(styles::spinner(state.spinner_frame), styles::accent()),
                Span::styled(" thinking...", styles::text_muted()),
            ]));
        }
        lines
    }
}

impl Widget for ChatPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panel = Self::area_in(area);
        render_shadow(buf, panel);
        Clear.render(panel, buf);

        let block = styles::modal_block(" NexusAI Assistant ");
        let inner = block.inner(panel);
        block.render(panel, buf);

        let [messages, input] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(inner);

        let lines = self.transcript();
        // Keep the newest messages visible; wrapping is approximated by line count
        let overflow = lines.len().saturating_sub(messages.height as usize);
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((overflow.min(u16::MAX as usize) as u16, 0))
            .render(messages, buf);

        TextInput::new("Message", &self.state.chat.input)
            .focused(self.state.ui_mode == UiMode::Chat)
            .placeholder("Ask about architecture...")
            .render(input, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{logged_in_state, TestTerminal};
    use nexus_app::state::CHAT_GREETING;
    use nexus_core::{ChatMessage, UserRole};

    #[test]
    fn test_chat_shows_greeting() {
        let mut state = logged_in_state(UserRole::User);
        state.chat.open = true;

        let mut term = TestTerminal::with_size(120, 30);
        let area = term.area();
        term.render_widget(ChatPanel::new(&state), area);

        assert!(term.buffer_contains("NexusAI Assistant"));
        assert!(term.buffer_contains(&CHAT_GREETING[..20]));
    }

    #[test]
    fn test_chat_shows_pending_indicator_and_input() {
        let mut state = logged_in_state(UserRole::User);
        state.chat.open = true;
        state.ui_mode = UiMode::Chat;
        state.chat.messages.push(ChatMessage::user("Design a CRM"));
        state.chat.input = "draft".to_string();
        state.requests.begin(Panel::Chat);

        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(ChatPanel::new(&state), area);

        assert!(term.buffer_contains("Design a CRM"));
        assert!(term.buffer_contains("thinking..."));
        assert!(term.buffer_contains("draft"));
    }

    #[test]
    fn test_panel_docks_right() {
        let panel = ChatPanel::area_in(Rect::new(0, 0, 100, 30));
        assert_eq!(panel.right(), 100);
        assert_eq!(panel.width, PANEL_WIDTH);
    }
}
