use crate::error::BrunnError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a numeric table cell.
///
/// Handles formats like:
/// - "7.2" -> Some(7.2)
/// - "7,2" -> Some(7.2) (decimal comma)
/// - "", "-", "n.a.", "N/A", "NaN" -> None (missing value markers)
pub fn parse_decimal_cell(s: &str) -> Result<Option<Decimal>, BrunnError> {
    let s = s.trim();

    if is_missing_marker(s) {
        return Ok(None);
    }

    let normalized = s.replace(',', ".");
    Decimal::from_str(&normalized)
        .map(Some)
        .map_err(|e| BrunnError::Parse(format!("invalid number '{}': {}", s, e)))
}

/// Parse a potability label cell: 1/0, true/false, yes/no. The dataset
/// encodes the label as 0/1 but some exports write "1.0"/"0.0".
pub fn parse_potability_cell(s: &str) -> Result<Option<bool>, BrunnError> {
    let s = s.trim();

    if is_missing_marker(s) {
        return Ok(None);
    }

    match s.to_lowercase().as_str() {
        "1" | "1.0" | "true" | "yes" => Ok(Some(true)),
        "0" | "0.0" | "false" | "no" => Ok(Some(false)),
        _ => Err(BrunnError::Parse(format!(
            "invalid potability label '{}' (expected 0/1 or true/false)",
            s
        ))),
    }
}

fn is_missing_marker(s: &str) -> bool {
    s.is_empty() || s == "-" || s.eq_ignore_ascii_case("n.a.") || s.eq_ignore_ascii_case("n/a")
        || s.eq_ignore_ascii_case("nan")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plain_decimal() {
        assert_eq!(parse_decimal_cell("7.2").unwrap(), Some(dec!(7.2)));
    }

    #[test]
    fn test_integer() {
        assert_eq!(parse_decimal_cell("300").unwrap(), Some(dec!(300)));
    }

    #[test]
    fn test_decimal_comma() {
        assert_eq!(parse_decimal_cell("7,2").unwrap(), Some(dec!(7.2)));
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(parse_decimal_cell("  7.2  ").unwrap(), Some(dec!(7.2)));
    }

    #[test]
    fn test_missing_markers() {
        for marker in ["", "-", "n.a.", "N/A", "NaN"] {
            assert_eq!(parse_decimal_cell(marker).unwrap(), None, "marker {marker:?}");
        }
    }

    #[test]
    fn test_garbage_is_error() {
        assert!(parse_decimal_cell("abc").is_err());
    }

    #[test]
    fn test_potability_labels() {
        assert_eq!(parse_potability_cell("1").unwrap(), Some(true));
        assert_eq!(parse_potability_cell("0").unwrap(), Some(false));
        assert_eq!(parse_potability_cell("1.0").unwrap(), Some(true));
        assert_eq!(parse_potability_cell("true").unwrap(), Some(true));
        assert_eq!(parse_potability_cell("No").unwrap(), Some(false));
        assert_eq!(parse_potability_cell("").unwrap(), None);
    }

    #[test]
    fn test_potability_garbage_is_error() {
        assert!(parse_potability_cell("maybe").is_err());
    }
}
