//! Display formatting for dates, timestamps, and serving counts.
//!
//! Pure string transforms so page rendering stays testable off-browser.
//! Blank or unparsable inputs fall back to a placeholder or the raw
//! value rather than failing the page.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Placeholder for blank display fields.
pub const BLANK: &str = "—";

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format a `YYYY-MM-DD` meal date as `"Mar 1, 2026"`. Unparsable values
/// pass through unchanged; empty values become the placeholder.
pub fn format_meal_date(value: &str) -> String {
    if value.is_empty() {
        return BLANK.to_owned();
    }
    let mut parts = value.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return value.to_owned();
    };
    let (Ok(month), Ok(day)) = (month.parse::<usize>(), day.parse::<u32>()) else {
        return value.to_owned();
    };
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) || year.len() != 4 {
        return value.to_owned();
    }
    format!("{} {day}, {year}", MONTHS[month - 1])
}

/// Format an ISO-8601 timestamp as `"Mar 1, 2026 12:30"`. Values without
/// a time component fall back to the date formatting; unparsable values
/// pass through.
pub fn format_timestamp(value: &str) -> String {
    if value.is_empty() {
        return BLANK.to_owned();
    }
    let Some((date, time)) = value.split_once('T') else {
        return format_meal_date(value);
    };
    let formatted_date = format_meal_date(date);
    let clock: String = time.chars().take(5).collect();
    if clock.len() == 5 && clock.as_bytes()[2] == b':' {
        format!("{formatted_date} {clock}")
    } else {
        formatted_date
    }
}

/// Capitalize a lowercase word like `mealtime` or `difficulty` for
/// display. Empty values become the placeholder.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        None => BLANK.to_owned(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Format a recorded serving count: integers without decimals, fractions
/// trimmed of trailing zeros, missing values as the placeholder.
pub fn format_servings(value: Option<f64>) -> String {
    let Some(servings) = value else {
        return BLANK.to_owned();
    };
    if !servings.is_finite() {
        return BLANK.to_owned();
    }
    if servings.fract() == 0.0 {
        #[allow(clippy::cast_possible_truncation)]
        return format!("{}", servings as i64);
    }
    let rendered = format!("{servings:.2}");
    rendered.trim_end_matches('0').trim_end_matches('.').to_owned()
}

/// A non-empty value or the placeholder.
pub fn or_blank(value: &str) -> String {
    if value.is_empty() { BLANK.to_owned() } else { value.to_owned() }
}
