//! Color palette: dark slate surfaces with an indigo accent.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(2, 6, 23);
pub const CARD_BG: Color = Color::Rgb(15, 23, 42);
pub const POPUP_BG: Color = Color::Rgb(30, 41, 59);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(51, 65, 85);
pub const BORDER_ACTIVE: Color = Color::Rgb(99, 102, 241);

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(129, 140, 248);
/// Text drawn on top of an accent background
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(16, 185, 129);
pub const STATUS_RED: Color = Color::Rgb(244, 63, 94);
pub const STATUS_YELLOW: Color = Color::Rgb(234, 179, 8);
pub const STATUS_BLUE: Color = Color::Rgb(56, 189, 248);

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(1, 3, 10);

// --- Code view ---
pub const LINE_NUMBER: Color = Color::Rgb(71, 85, 105);
pub const CODE_TEXT: Color = Color::Rgb(165, 180, 252);

// --- Deployment console ---
pub const CONSOLE_BG: Color = Color::Black;
pub const CONSOLE_TEXT: Color = Color::Rgb(52, 211, 153);
