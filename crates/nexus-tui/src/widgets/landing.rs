//! Landing screen shown before login

use nexus_app::state::LANDING_ROLES;
use nexus_app::AppState;
use nexus_core::UserRole;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::modal_overlay::centered_rect;
use crate::theme::styles;

/// Name of the login entry for a role
pub fn role_entry(role: UserRole) -> &'static str {
    match role {
        UserRole::User => "Builder",
        UserRole::Admin => "Admin",
        UserRole::SuperAdmin => "Super Admin",
    }
}

pub struct Landing<'a> {
    state: &'a AppState,
}

impl<'a> Landing<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for Landing<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card = centered_rect(52, 14, area);
        let block = styles::glass_block(true);
        let inner = block.inner(card);
        block.render(card, buf);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled("N E X U S", styles::accent_bold())),
            Line::from(Span::styled(
                "Describe an app. Get a codebase.",
                styles::text_secondary(),
            )),
            Line::from(""),
        ];
        for (i, role) in LANDING_ROLES.iter().enumerate() {
            let selected = i == self.state.landing_selected;
            let (marker, style) = if selected {
                ("▸ ", styles::focused_selected())
            } else {
                ("  ", styles::text_primary())
            };
            lines.push(Line::from(vec![
                Span::styled(marker, styles::accent()),
                Span::styled(format!(" Enter as {} ", role_entry(*role)), style),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Mocked sign-in: no credentials required",
            styles::text_muted(),
        )));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_landing_offers_every_role() {
        let state = AppState::new();
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(Landing::new(&state), area);

        assert!(term.buffer_contains("Enter as Builder"));
        assert!(term.buffer_contains("Enter as Admin"));
        assert!(term.buffer_contains("Enter as Super Admin"));
    }

    #[test]
    fn test_landing_fits_compact_terminal() {
        let state = AppState::new();
        let mut term = TestTerminal::compact();
        let area = term.area();
        term.render_widget(Landing::new(&state), area);
        assert!(term.buffer_contains("N E X U S"));
    }
}
