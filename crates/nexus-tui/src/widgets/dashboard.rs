//! Dashboard: the shared project list

use nexus_app::AppState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Rows used by one project entry
const ROWS_PER_PROJECT: usize = 2;

pub struct Dashboard<'a> {
    state: &'a AppState,
}

impl<'a> Dashboard<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let top = area.height.saturating_sub(3) / 2;
        let mut lines = vec![Line::from(""); top as usize];
        lines.push(Line::from(Span::styled("No projects yet", styles::title())));
        lines.push(Line::from(Span::styled(
            "Press n and describe the app you want to build",
            styles::text_muted(),
        )));
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let projects = self.state.projects.projects();
        let title = format!(" Projects ({}) ", projects.len());
        let block = styles::glass_block(true).title(Span::styled(title, styles::title()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }
        if projects.is_empty() {
            self.render_empty(inner, buf);
            return;
        }

        let selected = self.state.dashboard_selected.min(projects.len() - 1);
        let visible = (inner.height as usize / ROWS_PER_PROJECT).max(1);
        let first = (selected + 1).saturating_sub(visible);

        let mut lines = Vec::new();
        for (i, project) in projects.iter().enumerate().skip(first).take(visible) {
            let is_selected = i == selected;
            let name_style = if is_selected {
                styles::focused_selected()
            } else {
                styles::title()
            };
            let open = self.state.projects.selected_id() == Some(project.id.as_str());
            lines.push(Line::from(vec![
                Span::styled(if is_selected { "▸ " } else { "  " }, styles::accent()),
                Span::styled(format!(" {} ", project.name), name_style),
                Span::raw(" "),
                Span::styled(
                    format!("[{}]", project.status),
                    styles::project_status(project.status),
                ),
                Span::styled(
                    format!("  {} files", project.files.len()),
                    styles::text_secondary(),
                ),
                Span::styled(if open { "  (open)" } else { "" }, styles::accent()),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}", project.description),
                styles::text_muted(),
            )));
        }
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{logged_in_state, sample_project, TestTerminal};
    use nexus_core::{Project, UserRole};

    #[test]
    fn test_empty_dashboard_shows_empty_state() {
        let state = logged_in_state(UserRole::User);
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(Dashboard::new(&state), area);

        assert!(term.buffer_contains("Projects (0)"));
        assert!(term.buffer_contains("No projects yet"));
    }

    #[test]
    fn test_dashboard_lists_project_details() {
        let mut state = logged_in_state(UserRole::User);
        state.projects.create(sample_project());

        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(Dashboard::new(&state), area);

        assert!(term.buffer_contains("Todo App"));
        assert!(term.buffer_contains("[draft]"));
        assert!(term.buffer_contains("2 files"));
        assert!(term.buffer_contains("A task tracker"));
    }

    #[test]
    fn test_selection_scrolls_into_view() {
        let mut state = logged_in_state(UserRole::User);
        for i in 0..10 {
            state
                .projects
                .create(Project::new(format!("id{i}"), format!("Project {i}"), "", vec![]));
        }
        // Newest first: index 9 is "Project 0"
        state.dashboard_selected = 9;

        let mut term = TestTerminal::with_size(60, 8);
        let area = term.area();
        term.render_widget(Dashboard::new(&state), area);

        assert!(term.buffer_contains("Project 0"), "{}", term.content());
        assert!(!term.buffer_contains("Project 9"));
    }
}
