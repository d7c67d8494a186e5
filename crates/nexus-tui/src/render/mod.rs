//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use nexus_app::AppState;
use nexus_core::View;
use ratatui::{style::Style, widgets::Block, Frame};

use crate::layout;
use crate::theme::palette;
use crate::widgets;

/// Render the complete UI for the current state
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);
    frame.render_widget(widgets::MainHeader::new(state), areas.header);

    if !state.is_authenticated() {
        frame.render_widget(widgets::Landing::new(state), areas.body);
    } else {
        match state.view {
            View::Dashboard => frame.render_widget(widgets::Dashboard::new(state), areas.body),
            View::Editor => frame.render_widget(widgets::EditorView::new(state), areas.body),
            View::Admin => frame.render_widget(widgets::AdminPanel::new(state), areas.body),
            View::Settings => frame.render_widget(widgets::AccountSettings::new(state), areas.body),
        }
    }

    frame.render_widget(widgets::Footer::new(state), areas.footer);

    // Overlays, topmost last
    if state.chat.open && state.is_authenticated() {
        frame.render_widget(widgets::ChatPanel::new(state), areas.body);
    }
    if let Some(notice) = state.notice.as_ref() {
        frame.render_widget(widgets::NoticeModal::new(notice), area);
    }
}
