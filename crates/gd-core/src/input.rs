//! Parsing raw text typed by a player.

use thiserror::Error;

use crate::table::NumberRange;

/// Why a typed number was refused. The player is asked again; no state
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// Nothing was typed.
    #[error("enter a number")]
    Empty,

    /// The text is not a whole non-negative number.
    #[error("'{0}' is not a number")]
    NotANumber(String),

    /// The number lies outside the level's range.
    #[error("{value} is outside the range {range}")]
    OutOfRange {
        /// The number typed.
        value: u32,
        /// The range it had to fall in.
        range: NumberRange,
    },
}

/// Parse a number and check it against `range`.
pub fn parse_guess(raw: &str, range: NumberRange) -> Result<u32, InvalidInput> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidInput::Empty);
    }
    let value: u32 = trimmed
        .parse()
        .map_err(|_| InvalidInput::NotANumber(trimmed.to_string()))?;
    check_range(value, range)
}

/// Check an already-parsed number against `range`.
pub fn check_range(value: u32, range: NumberRange) -> Result<u32, InvalidInput> {
    if range.contains(value) {
        Ok(value)
    } else {
        Err(InvalidInput::OutOfRange { value, range })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANGE: NumberRange = NumberRange { min: 1, max: 10 };

    #[test]
    fn accepts_numbers_in_range() {
        assert_eq!(parse_guess("7", RANGE), Ok(7));
        assert_eq!(parse_guess("  10\n", RANGE), Ok(10));
        assert_eq!(parse_guess("1", RANGE), Ok(1));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(parse_guess("   ", RANGE), Err(InvalidInput::Empty));
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(
            parse_guess("seven", RANGE),
            Err(InvalidInput::NotANumber("seven".to_string()))
        );
        assert!(matches!(
            parse_guess("-3", RANGE),
            Err(InvalidInput::NotANumber(_))
        ));
        assert!(matches!(
            parse_guess("4.5", RANGE),
            Err(InvalidInput::NotANumber(_))
        ));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            parse_guess("11", RANGE),
            Err(InvalidInput::OutOfRange {
                value: 11,
                range: RANGE
            })
        );
        assert!(parse_guess("0", RANGE).is_err());
    }

    #[test]
    fn messages() {
        assert_eq!(
            parse_guess("42", RANGE).unwrap_err().to_string(),
            "42 is outside the range 1-10"
        );
        assert_eq!(
            parse_guess("x", RANGE).unwrap_err().to_string(),
            "'x' is not a number"
        );
    }
}
