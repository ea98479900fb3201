use ratatui::style::Color;

pub const KEY_HINTS: &str = "Type: search │ Tab/Shift-Tab: category │ ↑/↓: select │ Enter: open │ Ctrl-U: clear │ Esc: quit";
pub const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub const ACCENT: Color = Color::Cyan;
pub const MUTED: Color = Color::DarkGray;
pub const POLL_INTERVAL_MS: u64 = 100;
