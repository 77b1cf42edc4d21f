use crate::error::{FundError, FundResult};

/// Trims a required text field. Blank input is a `BlankField` error naming
/// `field`.
pub fn required(field: &'static str, value: &str) -> FundResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FundError::BlankField(field));
    }
    Ok(trimmed.to_string())
}

/// Trims an optional string, returning None if blank.
pub fn trim_optional(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Coerces user-typed amount text into a non-negative number.
/// Unparseable input becomes 0 and negative values are clamped to 0.
pub fn parse_amount(value: &str) -> f64 {
    value
        .trim()
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map_or(0.0, |n| n.max(0.0))
}

/// Clamps an already-numeric amount to the non-negative range.
pub fn non_negative_amount(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Splits pasted text into trimmed, non-blank lines.
pub fn non_blank_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}
