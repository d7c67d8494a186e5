//! Admin console: system configuration and the global project registry

use nexus_app::{AdminField, AppState};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct AdminPanel<'a> {
    state: &'a AppState,
}

impl<'a> AdminPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn field_value(&self, field: AdminField) -> String {
        let config = &self.state.system_config;
        let on_off = |b: bool| (if b { "ON" } else { "OFF" }).to_string();
        match field {
            AdminField::AiModel => config.ai_model.clone(),
            AdminField::Monetization => on_off(config.monetization_enabled),
            AdminField::AutoTest => on_off(config.auto_test_enabled),
            AdminField::MaxProjects => config.max_user_projects.to_string(),
        }
    }

    fn render_config(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(Span::styled(" System Config ", styles::title()));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = AdminField::ALL
            .iter()
            .map(|field| {
                let selected = *field == self.state.admin_field;
                Line::from(vec![
                    Span::styled(if selected { "▸ " } else { "  " }, styles::accent()),
                    Span::styled(format!("{:<20}", field.label()), styles::text_secondary()),
                    Span::styled(
                        format!(" {} ", self.field_value(*field)),
                        if selected {
                            styles::focused_selected()
                        } else {
                            styles::text_primary()
                        },
                    ),
                ])
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_registry(&self, area: Rect, buf: &mut Buffer) {
        let projects = self.state.projects.projects();
        let title = format!(" Global Registry ({}) ", projects.len());
        let block = styles::glass_block(false).title(Span::styled(title, styles::title()));
        let inner = block.inner(area);
        block.render(area, buf);

        if projects.is_empty() {
            Paragraph::new(Span::styled("No projects in the registry", styles::text_muted()))
                .render(inner, buf);
            return;
        }

        let lines: Vec<Line> = projects
            .iter()
            .map(|project| {
                Line::from(vec![
                    Span::styled(format!("  {:<24}", project.name), styles::text_primary()),
                    Span::styled(format!("{:<14}", owner_label(&project.id)), styles::text_muted()),
                    Span::styled(
                        format!("{:<10}", project.status.label()),
                        styles::project_status(project.status),
                    ),
                    Span::styled(
                        format!("{} files", project.files.len()),
                        styles::text_secondary(),
                    ),
                ])
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

/// Synthetic owner tag derived from the project id
fn owner_label(project_id: &str) -> String {
    let prefix: String = project_id.chars().take(4).collect();
    format!("User_{prefix}")
}

impl Widget for AdminPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [config, registry] =
            Layout::vertical([Constraint::Length(6), Constraint::Min(3)]).areas(area);
        self.render_config(config, buf);
        self.render_registry(registry, buf);
    }
}
