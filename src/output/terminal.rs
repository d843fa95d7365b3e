//! ANSI styling for terminal output

/// 256-color palette
pub mod colors {
    pub const GREY: u8 = 102;      // #7D7D7D - secondary text
    pub const AQUA: u8 = 109;      // #7A9EB5 - timing
    pub const ORANGE: u8 = 208;    // #F2913D - 4xx, warnings
    pub const RED: u8 = 167;       // #E34F45 - 5xx, errors
    pub const BLUE: u8 = 68;       // #426BD1 - section titles
    pub const GREEN: u8 = 71;      // #63C27A - 2xx
    pub const YELLOW: u8 = 185;    // #CCCC3D - 3xx
}

pub const RESET: &str = "\x1b[0m";

#[inline]
pub fn fg(color: u8) -> String {
    format!("\x1b[38;5;{}m", color)
}

#[inline]
pub fn bold_fg(color: u8) -> String {
    format!("\x1b[1;38;5;{}m", color)
}

#[inline]
pub fn colorize(text: &str, color: u8) -> String {
    format!("{}{}{}", fg(color), text, RESET)
}

#[inline]
pub fn bold(text: &str, color: u8) -> String {
    format!("{}{}{}", bold_fg(color), text, RESET)
}

/// Error message (red)
#[inline]
pub fn error(text: &str) -> String {
    bold(text, colors::RED)
}

/// Warning message (orange)
#[inline]
pub fn warning(text: &str) -> String {
    bold(text, colors::ORANGE)
}

/// Color for an HTTP status code by class
pub fn status_color(code: u16) -> u8 {
    match code {
        200..=299 => colors::GREEN,
        300..=399 => colors::YELLOW,
        400..=499 => colors::ORANGE,
        500..=599 => colors::RED,
        _ => colors::GREY,
    }
}
