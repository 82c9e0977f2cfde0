use colored::Color;

pub const PRIMARY: Color = Color::BrightBlue;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const IPV4_ADDR: Color = Color::BrightCyan;
pub const MAC_ADDR: Color = Color::Magenta;
pub const SUCCESS: Color = Color::Green;
pub const FAILURE: Color = Color::Red;
pub const ALERT: Color = Color::Yellow;

/// Decides once whether the terminal can show ANSI colors.
///
/// Respects `NO_COLOR` and the `CLICOLOR` conventions, and falls back to plain
/// text when stdout is not a terminal or the terminal lacks color support.
pub fn detect() -> bool {
    std::env::var_os("NO_COLOR").is_none()
        && console::colors_enabled()
        && console::Term::stdout().features().colors_supported()
}
