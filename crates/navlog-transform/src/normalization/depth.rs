//! Depth sign correction.
//!
//! Depth is stored below-surface-negative: every value becomes `-|value|`.
//! The correction works on the text so the source's digits and precision are
//! kept exactly (`5.20` becomes `-5.20`, not `-5.2`). A zero magnitude is
//! written without a sign.

use crate::error::TransformError;

/// Returns `-|value|` for a numeric depth string.
///
/// Fails for non-numeric and non-finite input.
pub fn correct_depth(value: &str) -> Result<String, TransformError> {
    let invalid = || TransformError::Depth {
        value: value.to_string(),
    };
    let trimmed = value.trim();
    let magnitude = trimmed.strip_prefix(['-', '+']).unwrap_or(trimmed);
    if magnitude.starts_with(['-', '+']) {
        return Err(invalid());
    }
    let parsed: f64 = magnitude.parse().map_err(|_| invalid())?;
    if !parsed.is_finite() {
        return Err(invalid());
    }

    let magnitude = if magnitude.starts_with('.') {
        format!("0{magnitude}")
    } else {
        magnitude.to_string()
    };
    if parsed == 0.0 {
        Ok(magnitude)
    } else {
        Ok(format!("-{magnitude}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forces_non_positive() {
        assert_eq!(correct_depth("5.2").unwrap(), "-5.2");
        assert_eq!(correct_depth("-5.2").unwrap(), "-5.2");
        assert_eq!(correct_depth("+5.2").unwrap(), "-5.2");
        assert_eq!(correct_depth("0").unwrap(), "0");
        assert_eq!(correct_depth("-0.0").unwrap(), "0.0");
    }

    #[test]
    fn keeps_source_precision() {
        assert_eq!(correct_depth("5.0").unwrap(), "-5.0");
        assert_eq!(correct_depth(" 1204.250 ").unwrap(), "-1204.250");
        assert_eq!(correct_depth("1e3").unwrap(), "-1e3");
        assert_eq!(correct_depth(".5").unwrap(), "-0.5");
    }

    #[test]
    fn rejects_non_numeric() {
        for value in ["", "deep", "--5", "NaN", "inf", "5 m"] {
            assert!(correct_depth(value).is_err(), "{value} should fail");
        }
    }
}
