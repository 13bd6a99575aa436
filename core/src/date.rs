use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::ValidationError;

/// Turns human date entry into a concrete calendar day. `today` anchors the
/// relative forms so callers (and tests) control the clock.
///
/// Accepted: `today`/`tod`, `tomorrow`/`tom`, `+Nd`, `+Nw`, a weekday name
/// (`fri` means the next Friday strictly after today), and `YYYY-MM-DD`.
pub fn parse_human_date(input: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(invalid(input));
    }

    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "tomorrow" | "tom" => return Ok(today + Duration::days(1)),
        _ => {}
    }

    // Relative format (+Nd, +Nw)
    if let Some(rest) = input.strip_prefix('+') {
        if rest.len() >= 2 && rest.is_char_boundary(rest.len() - 1) {
            let (num_str, unit) = rest.split_at(rest.len() - 1);
            if let Ok(count) = num_str.parse::<i64>() {
                match unit {
                    "d" => return Ok(today + Duration::days(count)),
                    "w" => return Ok(today + Duration::weeks(count)),
                    _ => {}
                }
            }
        }
        return Err(invalid(input));
    }

    // Weekday format: always the next occurrence, never today itself
    if let Some(target) = parse_weekday(input) {
        let mut days_ahead = target.num_days_from_monday() as i64
            - today.weekday().num_days_from_monday() as i64;
        if days_ahead <= 0 {
            days_ahead += 7;
        }
        return Ok(today + Duration::days(days_ahead));
    }

    // Fallback to the normalized form
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }

    Err(invalid(input))
}

fn invalid(input: &str) -> ValidationError {
    ValidationError::InvalidDueDate {
        input: input.to_string(),
    }
}

fn parse_weekday(s: &str) -> Option<Weekday> {
    match s.to_lowercase().as_str() {
        "mon" | "monday" => Some(Weekday::Mon),
        "tue" | "tuesday" => Some(Weekday::Tue),
        "wed" | "wednesday" => Some(Weekday::Wed),
        "thu" | "thursday" => Some(Weekday::Thu),
        "fri" | "friday" => Some(Weekday::Fri),
        "sat" | "saturday" => Some(Weekday::Sat),
        "sun" | "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}
