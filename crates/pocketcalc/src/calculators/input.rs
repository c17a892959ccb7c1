//! Coercion of free-text form fields into numbers.
//!
//! Calculators never reject input. Anything that is empty or does not parse as a finite
//! decimal becomes the caller's fallback, so every model can run on a half-filled form and
//! produce a zero result instead of an error. `parse_required` is the strict variant for
//! callers that need to tell a missing field apart from a legitimate zero.

/// Error raised by strict parsing when a required field cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("{field} must be a number (got '{raw}')")]
    Invalid { field: &'static str, raw: String },
}

/// Parses `text` as a decimal, returning `fallback` for empty or malformed input.
pub fn parse_number(text: &str, fallback: f64) -> f64 {
    parse_finite(text).unwrap_or(fallback)
}

/// Strict parse used by form gates.
pub fn parse_required(field: &'static str, text: &str) -> Result<f64, InputError> {
    if text.trim().is_empty() {
        return Err(InputError::Missing { field });
    }

    parse_finite(text).ok_or_else(|| InputError::Invalid {
        field,
        raw: text.trim().to_string(),
    })
}

/// Parses a battery percentage, clamped into `0..=100`.
pub fn parse_percentage(text: &str, fallback: u8) -> u8 {
    match parse_finite(text) {
        Some(value) => value.round().clamp(0.0, 100.0) as u8,
        None => fallback,
    }
}

/// Returns `value` when it is strictly positive, otherwise zero.
pub fn positive_or_zero(value: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Percentage share of `part` in `whole`, zero when `whole` is not positive.
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// Division that yields zero instead of infinity/NaN when the divisor is not positive.
pub(crate) fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// clap-compatible value parser that never rejects a value.
pub fn lenient_number(raw: &str) -> Result<f64, String> {
    Ok(parse_number(raw, 0.0))
}

pub(crate) fn parse_finite(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_garbage_fall_back() {
        assert_eq!(parse_number("", 0.0), 0.0);
        assert_eq!(parse_number("   ", 7.5), 7.5);
        assert_eq!(parse_number("12abc", 0.0), 0.0);
        assert_eq!(parse_number("$40", 1.0), 1.0);
    }

    #[test]
    fn accepts_trimmed_decimals() {
        assert_eq!(parse_number(" 12.5 ", 0.0), 12.5);
        assert_eq!(parse_number("-3", 0.0), -3.0);
        assert_eq!(parse_number(".25", 0.0), 0.25);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert_eq!(parse_number("inf", 0.0), 0.0);
        assert_eq!(parse_number("NaN", 2.0), 2.0);
    }

    #[test]
    fn strict_parse_distinguishes_missing_from_invalid() {
        assert_eq!(
            parse_required("home price", ""),
            Err(InputError::Missing {
                field: "home price"
            })
        );
        match parse_required("home price", "abc") {
            Err(InputError::Invalid { field, raw }) => {
                assert_eq!(field, "home price");
                assert_eq!(raw, "abc");
            }
            other => panic!("expected invalid input, got {other:?}"),
        }
        assert_eq!(parse_required("home price", "0"), Ok(0.0));
    }

    #[test]
    fn percentages_clamp_into_range() {
        assert_eq!(parse_percentage("150", 0), 100);
        assert_eq!(parse_percentage("-5", 0), 0);
        assert_eq!(parse_percentage("49.6", 0), 50);
        assert_eq!(parse_percentage("", 20), 20);
    }

    #[test]
    fn ratio_guards_zero_divisor() {
        assert_eq!(ratio_or_zero(10.0, 0.0), 0.0);
        assert_eq!(ratio_or_zero(10.0, -1.0), 0.0);
        assert_eq!(ratio_or_zero(10.0, 4.0), 2.5);
        assert_eq!(percent_of(25.0, 0.0), 0.0);
        assert_eq!(percent_of(25.0, 100.0), 25.0);
    }
}
