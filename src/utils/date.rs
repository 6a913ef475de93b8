use chrono::{Datelike, NaiveDate};
use regex::Regex;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Expand a period expression into its first and last day.
/// Accepted forms: "YYYY", "YYYY-MM", "YYYY-MM-DD".
pub fn period_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        let last = last_day_of_month(first.year(), first.month());
        return Ok((first, last));
    }

    // YYYY
    if Regex::new(r"^\d{4}$").unwrap().is_match(p) {
        let year: i32 = p.parse().map_err(|_| format!("Invalid period: {p}"))?;
        let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or("Invalid year")?;
        let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or("Invalid year")?;
        return Ok((first, last));
    }

    Err(format!("Invalid period: {p}"))
}

/// Parse a range expression: either a single period or "start:end" where
/// both sides are period expressions.
pub fn parse_range(expr: &str) -> Result<(NaiveDate, NaiveDate), String> {
    if let Some((a, b)) = expr.split_once(':') {
        let (start, _) = period_bounds(a)?;
        let (_, end) = period_bounds(b)?;
        if end < start {
            return Err(format!("Invalid range: {expr} (end before start)"));
        }
        return Ok((start, end));
    }

    period_bounds(expr)
}

pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let first_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_next.unwrap().pred_opt().unwrap()
}
