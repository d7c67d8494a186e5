//! Single-line text input box

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

const CURSOR: &str = "▏";

pub struct TextInput<'a> {
    label: &'a str,
    value: &'a str,
    focused: bool,
    placeholder: &'a str,
}

impl<'a> TextInput<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            placeholder: "",
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }
}

/// Longest suffix of `text` that fits in `width` columns
pub fn visible_tail(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }
    let mut start = text.len();
    let mut used = 0;
    for (idx, ch) in text.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", self.label);
        let block = styles::glass_block(self.focused).title(Span::styled(title, styles::text_secondary()));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Multi-line values show their last line
        let value = self.value.rsplit('\n').next().unwrap_or("");
        let line = if self.value.is_empty() && !self.focused {
            Line::from(Span::styled(self.placeholder, styles::text_muted()))
        } else {
            let room = (inner.width as usize).saturating_sub(2);
            let mut spans = vec![Span::raw(" "), Span::styled(visible_tail(value, room), styles::text_primary())];
            if self.focused {
                spans.push(Span::styled(CURSOR, styles::accent()));
            }
            Line::from(spans)
        };
        Paragraph::new(line).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_visible_tail_keeps_end() {
        assert_eq!(visible_tail("hello", 10), "hello");
        assert_eq!(visible_tail("hello world", 5), "world");
        assert_eq!(visible_tail("", 3), "");
    }

    #[test]
    fn test_placeholder_when_empty_and_unfocused() {
        let mut term = TestTerminal::new();
        term.render_widget(
            TextInput::new("Prompt", "").placeholder("Describe your app"),
            Rect::new(0, 0, 40, 3),
        );
        assert!(term.buffer_contains("Prompt"));
        assert!(term.buffer_contains("Describe your app"));
    }

    #[test]
    fn test_focused_input_shows_value_and_cursor() {
        let mut term = TestTerminal::new();
        term.render_widget(
            TextInput::new("Prompt", "Todo App").focused(true),
            Rect::new(0, 0, 40, 3),
        );
        assert!(term.buffer_contains("Todo App▏"));
    }
}
