//! Color palette for the forest theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(10, 14, 12); // Terminal background
pub const CARD_BG: Color = Color::Rgb(18, 24, 21); // Panel/card backgrounds
pub const POPUP_BG: Color = Color::Rgb(24, 31, 27); // Modal background
pub const INPUT_BG: Color = Color::Rgb(32, 41, 36); // Text input background

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(52, 64, 58); // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Rgb(74, 222, 128); // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(34, 197, 94); // forest-500
pub const ACCENT_DIM: Color = Color::Rgb(21, 128, 61); // forest-700

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 229);
pub const TEXT_SECONDARY: Color = Color::Rgb(150, 160, 155);
pub const TEXT_MUTED: Color = Color::Rgb(88, 98, 93);
pub const TEXT_BRIGHT: Color = Color::White;
/// Text drawn on top of the accent color
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(16, 185, 129);
pub const STATUS_RED: Color = Color::Rgb(244, 63, 94);
pub const STATUS_YELLOW: Color = Color::Rgb(234, 179, 8);

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(5, 6, 8);
