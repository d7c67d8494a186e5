//! QA tab: the model's audit report for the project

use nexus_app::request::Panel;
use nexus_app::AppState;
use nexus_core::Project;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Span,
    widgets::{Paragraph, Widget, Wrap},
};

use super::busy_line;
use crate::theme::styles;

pub const QA_PLACEHOLDER: &str = "Run 'Audit' to begin technical verification.";

pub struct QaTab<'a> {
    state: &'a AppState,
    project: &'a Project,
}

impl<'a> QaTab<'a> {
    pub fn new(state: &'a AppState, project: &'a Project) -> Self {
        Self { state, project }
    }
}

impl Widget for QaTab<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(Span::styled(" Architectural Audit ", styles::title()));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.state.is_busy(Panel::Qa) {
            busy_line(self.state, "Auditing architecture...").render(inner, buf);
            return;
        }

        match self.project.test_report.as_deref() {
            Some(report) => Paragraph::new(report)
                .style(styles::text_primary())
                .wrap(Wrap { trim: false })
                .render(inner, buf),
            None => Paragraph::new(Span::styled(QA_PLACEHOLDER, styles::text_muted()))
                .alignment(Alignment::Center)
                .render(inner, buf),
        }
    }
}
