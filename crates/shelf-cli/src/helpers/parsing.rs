//! Parsing helpers for year input and the output format flag.

use shelf_core::{Result, ShelfError};

/// Parse a year value. Accepts any integer, including negative years.
pub fn parse_year(value: &str) -> Result<i32> {
    let trimmed = value.trim();
    trimmed.parse().map_err(|_| {
        ShelfError::InvalidInput(format!("year \"{}\" is not an integer", trimmed))
    })
}

/// Validate the `--format` flag.
pub fn validate_output_format(value: Option<&str>) -> anyhow::Result<()> {
    match value {
        None | Some("table") | Some("plain") => Ok(()),
        Some(other) => Err(anyhow::anyhow!(
            "Unsupported format: {} (use table or plain)",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year_accepts_integers() {
        assert_eq!(parse_year("1965").unwrap(), 1965);
        assert_eq!(parse_year(" 1965 ").unwrap(), 1965);
        assert_eq!(parse_year("-500").unwrap(), -500);
    }

    #[test]
    fn test_parse_year_rejects_non_numeric() {
        let err = parse_year("nineteen65").unwrap_err();
        assert!(err.to_string().contains("nineteen65"));

        assert!(parse_year("").is_err());
        assert!(parse_year("19.65").is_err());
    }

    #[test]
    fn test_validate_output_format() {
        assert!(validate_output_format(None).is_ok());
        assert!(validate_output_format(Some("table")).is_ok());
        assert!(validate_output_format(Some("plain")).is_ok());
        assert!(validate_output_format(Some("csv")).is_err());
    }
}
