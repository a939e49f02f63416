//! ANSI escape sequences for the terminal shell. The game itself never emits
//! these; only the binary decorates its output.

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const FG_RED: &str = "\x1b[31m";
pub const FG_GREEN: &str = "\x1b[32m";
pub const FG_YELLOW: &str = "\x1b[33m";
pub const FG_CYAN: &str = "\x1b[36m";

/// Wraps `text` in `sgr` .. reset, or returns it untouched when colour is off.
pub fn paint(text: &str, sgr: &str, enabled: bool) -> String {
    if !enabled || sgr.is_empty() {
        return text.to_string();
    }
    format!("{sgr}{text}{RESET}")
}
