//! Research tab: search-grounded answers with their sources

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

pub struct ResearchTab<'a> {
    state: &'a AppState,
}

impl<'a> ResearchTab<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for ResearchTab<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let [query, results] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(area);

        TextInput::new("Research", &state.editor.research_query)
            .focused(state.ui_mode == UiMode::Input(InputField::ResearchQuery))
            .placeholder("Press / to ask about libraries, APIs or patterns")
            .render(query, buf);

        let block = styles::glass_block(false).title(Span::styled(" Findings ", styles::title()));
        let inner = block.inner(results);
        block.render(results, buf);

        if state.is_busy(Panel::Research) {
            busy_line(state, "Searching the web...").render(inner, buf);
            return;
        }
        let Some(result) = state.editor.research.as_ref() else {
            Paragraph::new(Span::styled(
                "Search-grounded answers appear here.",
                styles::text_muted(),
            ))
            .render(inner, buf);
            return;
        };

        let mut lines: Vec<Line> = result
            .text
            .lines()
            .map(|l| Line::from(Span::styled(l, styles::text_primary())))
            .collect();
        if !result.sources.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Sources", styles::accent_bold())));
            for source in &result.sources {
                lines.push(Line::from(vec![
                    Span::styled(" • ", styles::accent()),
                    Span::styled(source.title.as_str(), styles::text_secondary()),
                    Span::raw(" "),
                    Span::styled(source.uri.as_str(), styles::text_muted()),
                ]));
            }
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
