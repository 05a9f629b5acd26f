//! Typed parsing of raw environment values.
//!
//! # Grammars
//! - Integer: signed 64-bit base-10 (optional `+`/`-`, ASCII digits)
//! - Boolean: `1 t T TRUE true True` / `0 f F FALSE false False`
//! - Duration: humantime expressions, one or more `<number><unit>` terms
//!   optionally separated by spaces (`30s`, `500ms`, `2m`, `1h30m`,
//!   `1h 30m`, `1.5s`). The number may carry a decimal fraction; a sign is
//!   never accepted. Units: `ns`, `us`, `ms`, `s`/`sec`/`second(s)`,
//!   `m`/`min`/`minute(s)`, `h`/`hr`/`hour(s)`, `d`/`day(s)`, `w`/`week(s)`,
//!   `M`/`month(s)`, `y`/`year(s)`. A bare `0` is zero; any other bare
//!   number is rejected.
//!
//! Values are never trimmed. A failure here is only ever reported, the
//! loader falls back to the field default.

use std::num::ParseIntError;
use std::time::Duration;

use thiserror::Error;

/// Why a raw value was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("invalid integer: {source}")]
    Integer {
        #[from]
        source: ParseIntError,
    },

    #[error("invalid boolean {0:?}")]
    Boolean(String),

    #[error("invalid duration: {source}")]
    Duration {
        #[from]
        source: humantime::DurationError,
    },
}

/// Parse a base-10 signed integer. No range checks beyond `i64`.
pub fn parse_int(raw: &str) -> Result<i64, ParseError> {
    Ok(raw.parse::<i64>()?)
}

/// Parse a boolean token.
pub fn parse_bool(raw: &str) -> Result<bool, ParseError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(ParseError::Boolean(other.to_string())),
    }
}

/// Parse a unit-suffixed duration expression.
pub fn parse_duration(raw: &str) -> Result<Duration, ParseError> {
    Ok(humantime::parse_duration(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("9999"), Ok(9999));
        assert_eq!(parse_int("+80"), Ok(80));
        assert_eq!(parse_int("0"), Ok(0));
        assert_eq!(parse_int("-1"), Ok(-1));
        assert_eq!(parse_int("70000"), Ok(70000));
        assert_eq!(parse_int("-9223372036854775808"), Ok(i64::MIN));

        assert!(matches!(parse_int("abc"), Err(ParseError::Integer { .. })));
        assert!(parse_int("9223372036854775808").is_err());
        assert!(parse_int(" 80").is_err());
        assert!(parse_int("0x50").is_err());
        assert!(parse_int("1.5").is_err());
    }

    #[test]
    fn test_parse_bool_accepted_tokens() {
        for token in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(token), Ok(true), "token {token}");
        }
        for token in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(token), Ok(false), "token {token}");
        }
    }

    #[test]
    fn test_parse_bool_rejects_others() {
        for token in ["maybe", "yes", "no", "on", "off", "tRUE", " true", "2"] {
            assert_eq!(
                parse_bool(token),
                Err(ParseError::Boolean(token.to_string())),
                "token {token}"
            );
        }
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("45s"), Ok(Duration::from_secs(45)));
        assert_eq!(parse_duration("500ms"), Ok(Duration::from_millis(500)));
        assert_eq!(parse_duration("2m"), Ok(Duration::from_secs(120)));
        assert_eq!(parse_duration("1h 30m"), Ok(Duration::from_secs(5400)));

        assert!(matches!(parse_duration("xyz"), Err(ParseError::Duration { .. })));
        assert!(parse_duration("").is_err());
    }

    #[test]
    fn test_parse_duration_edge_tokens() {
        assert_eq!(parse_duration("1.5s"), Ok(Duration::from_millis(1500)));
        assert_eq!(parse_duration("0"), Ok(Duration::ZERO));
        assert_eq!(parse_duration("1d"), Ok(Duration::from_secs(86_400)));
        assert_eq!(parse_duration("1h30m"), Ok(Duration::from_secs(5400)));

        assert!(parse_duration("-5s").is_err());
        assert!(parse_duration("+5s").is_err());
        assert!(parse_duration("30").is_err());
    }

    #[test]
    fn test_error_display() {
        let err = parse_bool("maybe").unwrap_err();
        assert_eq!(err.to_string(), "invalid boolean \"maybe\"");

        let err = parse_int("abc").unwrap_err();
        assert!(err.to_string().starts_with("invalid integer"));
    }
}
