//! Project editor: builder prompt, file manifest and the five workspace tabs

mod code;
mod preview;
mod qa;
mod research;
mod visual;

use nexus_app::request::Panel;
use nexus_app::{AppState, InputField, UiMode};
use nexus_core::{EditorTab, Project};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget},
};

pub use code::CodeTab;
pub use preview::PreviewTab;
pub use qa::QaTab;
pub use research::ResearchTab;
pub use visual::VisualTab;

use super::input::TextInput;
use crate::layout::editor_columns;
use crate::theme::styles;

pub struct EditorView<'a> {
    state: &'a AppState,
}

impl<'a> EditorView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn prompt_input(&self) -> TextInput<'a> {
        let state = self.state;
        TextInput::new(InputField::Prompt.label(), &state.editor.prompt)
            .focused(state.ui_mode == UiMode::Input(InputField::Prompt))
            .placeholder("Press p to describe what to build or change")
    }

    /// No project open: a centered prompt to generate a new one
    fn render_builder(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true);
        let inner = block.inner(area);
        block.render(area, buf);

        let [_, heading, input, status, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .areas(inner);

        Paragraph::new(vec![
            Line::from(Span::styled("What are we building today?", styles::title())),
            Line::from(Span::styled(
                "Describe an application and Nexus will architect the codebase.",
                styles::text_muted(),
            )),
        ])
        .alignment(Alignment::Center)
        .render(heading, buf);

        let [_, input, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Max(80),
            Constraint::Fill(1),
        ])
        .areas(input);
        self.prompt_input().render(input, buf);

        if self.state.is_busy(Panel::Generate) {
            busy_line(self.state, "Architecting your application...")
                .alignment(Alignment::Center)
                .render(status, buf);
        }
    }

    fn render_manifest(&self, project: &Project, area: Rect, buf: &mut Buffer) {
        if area.width == 0 {
            return;
        }
        let block = styles::glass_block(false).title(Span::styled(" Files ", styles::title()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(Span::styled(project.name.as_str(), styles::accent_bold())),
            Line::from(Span::styled(
                format!("{} · {}", project.status, project.created_at.format("%Y-%m-%d")),
                styles::text_muted(),
            )),
            Line::from(""),
        ];
        for (i, file) in project.files.iter().enumerate() {
            let current = i == self.state.editor.file_index;
            let style = if current && self.state.editor.tab == EditorTab::Code {
                styles::focused_selected()
            } else if current {
                styles::accent()
            } else {
                styles::text_secondary()
            };
            lines.push(Line::from(Span::styled(format!(" {} ", file.path), style)));
        }
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_tabs(&self, area: Rect, buf: &mut Buffer) {
        let titles = EditorTab::ALL
            .iter()
            .map(|tab| format!(" {} ", tab.label()));
        Tabs::new(titles)
            .select(self.state.editor.tab.index())
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider(Span::styled("│", styles::border_inactive()))
            .render(area, buf);
    }

    fn render_workspace(&self, project: &'a Project, area: Rect, buf: &mut Buffer) {
        match self.state.editor.tab {
            EditorTab::Code => CodeTab::new(self.state, project).render(area, buf),
            EditorTab::Qa => QaTab::new(self.state, project).render(area, buf),
            EditorTab::Research => ResearchTab::new(self.state).render(area, buf),
            EditorTab::Visual => VisualTab::new(self.state).render(area, buf),
            EditorTab::Preview => PreviewTab::new(self.state, project).render(area, buf),
        }
    }
}

impl Widget for EditorView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(project) = self.state.selected_project() else {
            self.render_builder(area, buf);
            return;
        };

        let [tabs, body, prompt] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .areas(area);

        self.render_tabs(tabs, buf);
        let (sidebar, main) = editor_columns(body);
        self.render_manifest(project, sidebar, buf);
        self.render_workspace(project, main, buf);

        let [input, status] =
            Layout::horizontal([Constraint::Min(20), Constraint::Length(22)]).areas(prompt);
        self.prompt_input().render(input, buf);
        if self.state.is_busy(Panel::Generate) {
            busy_line(self.state, "Rebuilding...").render(
                Rect::new(status.x + 1, status.y + 1, status.width.saturating_sub(1), 1),
                buf,
            );
        }
    }
}

/// Spinner followed by a status message
pub(crate) fn busy_line<'a>(state: &AppState, text: &'a str) -> Paragraph<'a> {
    Paragraph::new(Line::from(vec![
        Span::styled(styles::spinner(state.spinner_frame), styles::accent()),
        Span::styled(format!(" {text}"), styles::text_secondary()),
    ]))
}
