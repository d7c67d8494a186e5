//! Account settings: identity, tier and credits

use nexus_app::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct AccountSettings<'a> {
    state: &'a AppState,
}

impl<'a> AccountSettings<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for AccountSettings<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(Span::styled(" Account ", styles::title()));
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(user) = self.state.user.as_ref() else {
            return;
        };

        let row = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("  {label:<22}"), styles::text_secondary()),
                Span::styled(value, styles::text_primary()),
            ])
        };
        let lines = vec![
            Line::from(""),
            row("Authenticated identity", user.email.clone()),
            row("Authorization tier", user.role.label().to_string()),
            row("Credit balance", user.credits.to_string()),
            Line::from(""),
            Line::from(Span::styled("  Press L to sign out", styles::text_muted())),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}
