use crate::domain::models::Cell;
use chrono::NaiveDate;

/// Header of the appended month column.
pub const MONTH_HEADER: &str = "Month";

/// Derives the "Mon-YY" label from a date cell's text form. Anything that
/// does not match the two-digit-day, abbreviated-month, four-digit-year
/// pattern degrades silently to the empty string. Total by contract.
pub fn month_label(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%d %b %Y") {
        Ok(date) => date.format("%b-%y").to_string(),
        Err(_) => String::new(),
    }
}

/// Numeric form of a cell with thousands separators and embedded spaces
/// stripped; anything unparseable (including missing cells) is zero.
pub fn coerce_number(cell: &Cell) -> f64 {
    let cleaned: String = cell
        .as_text()
        .chars()
        .filter(|c| *c != ',' && *c != ' ')
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

/// Fiscal-calendar position of a month label's three-letter token: the
/// fiscal year runs April through March. Unrecognized tokens sort last.
pub fn fiscal_month_key(month_label: &str) -> u8 {
    let token = month_label.split('-').next().unwrap_or("");
    match token {
        "Apr" => 1,
        "May" => 2,
        "Jun" => 3,
        "Jul" => 4,
        "Aug" => 5,
        "Sep" => 6,
        "Oct" => 7,
        "Nov" => 8,
        "Dec" => 9,
        "Jan" => 10,
        "Feb" => 11,
        "Mar" => 12,
        _ => 99,
    }
}
