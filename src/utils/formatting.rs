//! Formatting utilities used for CLI and export outputs.

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Leave-day amounts come in half-day steps; show "3" rather than "3.0"
/// but keep the ".5" when present.
pub fn days2readable(days: f64) -> String {
    if (days - days.trunc()).abs() < f64::EPSILON {
        format!("{}", days.trunc() as i64)
    } else {
        format!("{:.1}", days)
    }
}
