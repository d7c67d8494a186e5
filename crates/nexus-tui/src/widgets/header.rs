//! Header bar: brand, navigation and the signed-in user

use nexus_app::AppState;
use nexus_core::View;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub struct MainHeader<'a> {
    state: &'a AppState,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Navigation entries the current role may open, with their number keys
    fn nav_spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for (i, view) in View::ALL.iter().enumerate() {
            if !self.state.can_open(*view) {
                continue;
            }
            let label = format!(" {} {} ", i + 1, view.label());
            let style = if *view == self.state.view {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }
        spans
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut left = vec![
            Span::raw(" "),
            Span::styled("◆ ", styles::accent()),
            Span::styled("Nexus Builder", styles::accent_bold()),
            Span::raw("  "),
        ];
        if self.state.is_authenticated() {
            left.extend(self.nav_spans());
        }
        Paragraph::new(Line::from(left)).render(inner, buf);

        let Some(user) = self.state.user.as_ref() else {
            return;
        };
        let right = Line::from(vec![
            Span::styled(user.email.as_str(), styles::text_muted()),
            Span::raw(" "),
            Span::styled(
                format!(" {} ", user.role.label()),
                Style::default().fg(palette::CONTRAST_FG).bg(palette::STATUS_BLUE),
            ),
            Span::raw(" "),
        ]);
        let width = (right.width() as u16).min(inner.width);
        let right_area = Rect::new(inner.right() - width, inner.y, width, 1);
        Paragraph::new(right).render(right_area, buf);
    }
}
