//! Visual tab: image source, analysis prompt and the model's reading of it

use nexus_app::request::Panel;
use nexus_app::{AppState, InputField, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::busy_line;
use crate::theme::styles;
use crate::widgets::input::TextInput;

pub const VISUAL_PLACEHOLDER: &str = "Awaiting visual data...";

pub struct VisualTab<'a> {
    state: &'a AppState,
}

impl<'a> VisualTab<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for VisualTab<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let [source, prompt, analysis] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .areas(area);

        TextInput::new(InputField::ImageSource.label(), &state.editor.image_source)
            .focused(state.ui_mode == UiMode::Input(InputField::ImageSource))
            .placeholder("Press o to enter an image path or data URL")
            .render(source, buf);
        TextInput::new(InputField::ImagePrompt.label(), &state.editor.image_prompt)
            .focused(state.ui_mode == UiMode::Input(InputField::ImagePrompt))
            .render(prompt, buf);

        let title = match state.editor.image_label.as_deref() {
            Some(label) => format!(" Visual Audit: {label} "),
            None => " Visual Audit ".to_string(),
        };
        let block = styles::glass_block(false).title(Span::styled(title, styles::title()));
        let inner = block.inner(analysis);
        block.render(analysis, buf);

        if state.is_busy(Panel::Image) {
            busy_line(state, "Reading the image...").render(inner, buf);
            return;
        }
        let line = match state.editor.image_analysis.as_deref() {
            Some(text) => Paragraph::new(text).style(styles::text_primary()),
            None => Paragraph::new(Line::from(Span::styled(
                VISUAL_PLACEHOLDER,
                styles::text_muted(),
            ))),
        };
        line.wrap(Wrap { trim: false }).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{editor_state, TestTerminal};

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(VisualTab::new(state), area);
        term
    }

    #[test]
    fn test_placeholder_before_analysis() {
        let state = editor_state();
        let term = render(&state);
        assert!(term.buffer_contains(VISUAL_PLACEHOLDER));
        assert!(term.buffer_contains(nexus_app::state::DEFAULT_IMAGE_PROMPT));
    }

    #[test]
    fn test_analysis_with_label() {
        let mut state = editor_state();
        state.editor.image_label = Some("mock.png".to_string());
        state.editor.image_analysis = Some("Two-column card grid".to_string());

        let term = render(&state);
        assert!(term.buffer_contains("Visual Audit: mock.png"));
        assert!(term.buffer_contains("Two-column card grid"));
    }
}
