/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Overtime color: >0 → green, 0 → reset.
pub fn color_for_overtime(value: i64) -> &'static str {
    if value > 0 { GREEN } else { RESET }
}

/// Compliance color: compliant → green, violation → red.
pub fn color_for_compliance(is_compliant: bool) -> &'static str {
    if is_compliant { GREEN } else { RED }
}
