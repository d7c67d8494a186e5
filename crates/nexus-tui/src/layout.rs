//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header rows: top border, title row, bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Single hint row at the bottom
pub const FOOTER_HEIGHT: u16 = 1;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, navigation and user badge
    pub header: Rect,

    /// Active view
    pub body: Rect,

    /// Key hints and busy indicator
    pub footer: Rect,
}

/// Split the screen into header, body and footer
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// Editor body: file sidebar on the left, workspace on the right.
///
/// The sidebar collapses on narrow terminals.
pub fn editor_columns(area: Rect) -> (Rect, Rect) {
    if area.width < 60 {
        return (Rect::new(area.x, area.y, 0, area.height), area);
    }
    let chunks = Layout::horizontal([Constraint::Length(28), Constraint::Min(20)]).split(area);
    (chunks[0], chunks[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_standard() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.body.y, 3);
        assert_eq!(layout.body.height, 20); // 24 - 3 - 1
        assert_eq!(layout.footer.y, 23);
        assert_eq!(layout.footer.height, 1);
    }

    #[test]
    fn test_create_layout_compact() {
        let layout = create(Rect::new(0, 0, 40, 12));
        assert_eq!(layout.body.height, 8);
        assert_eq!(layout.body.width, 40);
    }

    #[test]
    fn test_editor_columns_wide() {
        let (sidebar, main) = editor_columns(Rect::new(0, 0, 100, 20));
        assert_eq!(sidebar.width, 28);
        assert_eq!(main.x, 28);
        assert_eq!(main.width, 72);
    }

    #[test]
    fn test_editor_columns_narrow_hides_sidebar() {
        let area = Rect::new(0, 0, 40, 12);
        let (sidebar, main) = editor_columns(area);
        assert_eq!(sidebar.width, 0);
        assert_eq!(main, area);
    }
}
