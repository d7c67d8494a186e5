//! Code tab: file content with line numbers and the insights panel

use nexus_app::request::Panel;
use nexus_app::{AppState, InputField, UiMode};
use nexus_core::Project;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::busy_line;
use crate::theme::{palette, styles};

pub struct CodeTab<'a> {
    state: &'a AppState,
    project: &'a Project,
}

impl<'a> CodeTab<'a> {
    pub fn new(state: &'a AppState, project: &'a Project) -> Self {
        Self { state, project }
    }

    fn editing(&self) -> bool {
        self.state.ui_mode == UiMode::Input(InputField::Code)
    }

    fn render_code(&self, area: Rect, buf: &mut Buffer) {
        let file = self.project.files.get(self.state.editor.file_index);
        let title = match file {
            Some(f) if self.editing() => format!(" {} (editing) ", f.path),
            Some(f) => format!(" {} ", f.path),
            None => " no file ".to_string(),
        };
        let block = styles::glass_block(self.editing()).title(Span::styled(title, styles::title()));
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(file) = file else {
            Paragraph::new(Span::styled("This project has no files.", styles::text_muted()))
                .render(inner, buf);
            return;
        };

        let content = if self.editing() {
            self.state.editor.code_draft.as_str()
        } else {
            file.content.as_str()
        };
        let lines = numbered_lines(content);

        // Follow the end of the draft while typing
        let scroll = if self.editing() {
            lines.len().saturating_sub(inner.height as usize)
        } else {
            0
        };
        Paragraph::new(lines)
            .scroll((scroll.min(u16::MAX as usize) as u16, 0))
            .render(inner, buf);
    }

    fn render_insights(&self, text: &str, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(Span::styled(" Insights ", styles::title()));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.state.is_busy(Panel::Explain) {
            busy_line(self.state, text).render(inner, buf);
            return;
        }
        Paragraph::new(text)
            .style(styles::text_primary())
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

/// Content lines prefixed with a right-aligned line number gutter
fn numbered_lines(content: &str) -> Vec<Line<'_>> {
    let count = content.lines().count().max(1);
    let gutter = count.to_string().len();
    content
        .lines()
        .enumerate()
        .map(|(i, line)| {
            Line::from(vec![
                Span::styled(
                    format!("{:>gutter$} ", i + 1),
                    Style::default().fg(palette::LINE_NUMBER),
                ),
                Span::styled(line, Style::default().fg(palette::CODE_TEXT)),
            ])
        })
        .collect()
}

impl Widget for CodeTab<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let refactoring = self.state.is_busy(Panel::Refactor);
        let [code, status] = if refactoring {
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area)
        } else {
            [area, Rect::new(area.x, area.bottom(), area.width, 0)]
        };

        match self.state.editor.insights.as_deref() {
            Some(text) => {
                let [left, right] =
                    Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                        .areas(code);
                self.render_code(left, buf);
                self.render_insights(text, right, buf);
            }
            None => self.render_code(code, buf),
        }

        if refactoring {
            busy_line(self.state, "Refactoring...").render(status, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{editor_state, TestTerminal};

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::new();
        let area = term.area();
        let project = state.selected_project().unwrap();
        term.render_widget(CodeTab::new(state, project), area);
        term
    }

    #[test]
    fn test_numbered_lines_pads_gutter() {
        let content = (1..=10).map(|i| format!("l{i}")).collect::<Vec<_>>().join("\n");
        let lines = numbered_lines(&content);
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0].spans[0].content, " 1 ");
        assert_eq!(lines[9].spans[0].content, "10 ");
    }

    #[test]
    fn test_shows_current_file() {
        let mut state = editor_state();
        state.editor.file_index = 1;

        let term = render(&state);
        assert!(term.buffer_contains("src/main.tsx"));
        assert!(term.buffer_contains("render(<App />)"));
    }

    #[test]
    fn test_editing_shows_draft() {
        let mut state = editor_state();
        state.ui_mode = UiMode::Input(InputField::Code);
        state.editor.code_draft = "const draft = true;".to_string();

        let term = render(&state);
        assert!(term.buffer_contains("(editing)"));
        assert!(term.buffer_contains("const draft = true;"));
    }

    #[test]
    fn test_insights_panel() {
        let mut state = editor_state();
        state.editor.insights = Some("Renders the root".to_string());

        let term = render(&state);
        assert!(term.buffer_contains("Insights"));
        assert!(term.buffer_contains("Renders the root"));
    }

    #[test]
    fn test_refactor_progress() {
        let mut state = editor_state();
        state.requests.begin(Panel::Refactor);

        let term = render(&state);
        assert!(term.buffer_contains("Refactoring..."));
    }
}
