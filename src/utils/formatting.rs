//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Long form of a minute count, e.g. `07h 45m`.
pub fn mins2readable(mins: u64) -> String {
    format!("{:02}h {:02}m", mins / 60, mins % 60)
}
