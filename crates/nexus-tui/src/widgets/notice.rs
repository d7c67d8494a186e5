//! Modal notice (errors and confirmations)

use nexus_app::Notice;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::modal_overlay::prepare_modal;
use crate::theme::styles;

pub struct NoticeModal<'a> {
    notice: &'a Notice,
}

impl<'a> NoticeModal<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }
}

impl Widget for NoticeModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 60.min(area.width.saturating_sub(4)).max(20);
        let modal = prepare_modal(buf, area, width, 9);

        let title = format!(" {} ", self.notice.title);
        let block = styles::modal_block(&title);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let lines = vec![
            Line::from(Span::styled(self.notice.message.as_str(), styles::text_primary())),
            Line::from(""),
            Line::from(Span::styled("[ Enter ] OK", styles::keybinding())),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_notice_shows_title_and_message() {
        let notice = Notice::new("Generation failed.", "Please refine your prompt.");
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(NoticeModal::new(&notice), area);

        assert!(term.buffer_contains("Generation failed."));
        assert!(term.buffer_contains("Please refine your prompt."));
        assert!(term.buffer_contains("OK"));
    }
}
