/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

/// Returns GREY for a day with nothing recorded, RESET otherwise.
pub fn color_for_minutes(minutes: u32) -> &'static str {
    if minutes == 0 { GREY } else { RESET }
}
