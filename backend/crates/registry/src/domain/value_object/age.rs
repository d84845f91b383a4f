//! Age Value Object

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Minimum accepted age
pub const MIN_AGE: i32 = 18;

/// Maximum accepted age
pub const MAX_AGE: i32 = 120;

/// Age within [18, 120]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Age(i32);

impl Age {
    pub fn new(value: i32) -> AppResult<Self> {
        if !(MIN_AGE..=MAX_AGE).contains(&value) {
            return Err(AppError::bad_request(
                "Idade deve estar entre 18 e 120 anos.",
            ));
        }
        Ok(Self(value))
    }

    /// Parse from form input. Non-numeric text is rejected distinctly
    /// from out-of-range values.
    pub fn parse(input: impl AsRef<str>) -> AppResult<Self> {
        let input = input.as_ref().trim();
        if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::bad_request("Idade deve conter apenas números."));
        }
        let value: i32 = input
            .parse()
            .map_err(|_| AppError::bad_request("Idade deve estar entre 18 e 120 anos."))?;
        Self::new(value)
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for Age {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_bounds() {
        assert!(Age::new(18).is_ok());
        assert!(Age::new(120).is_ok());
        assert!(Age::new(17).is_err());
        assert!(Age::new(121).is_err());
        assert!(Age::new(-5).is_err());
    }

    #[test]
    fn test_age_parse() {
        assert_eq!(Age::parse("35").unwrap().value(), 35);
        assert_eq!(Age::parse(" 18 ").unwrap().value(), 18);
    }

    #[test]
    fn test_age_parse_non_numeric() {
        let err = Age::parse("abc").unwrap_err();
        assert_eq!(err.message(), "Idade deve conter apenas números.");

        let err = Age::parse("3a").unwrap_err();
        assert_eq!(err.message(), "Idade deve conter apenas números.");

        assert!(Age::parse("").is_err());
        assert!(Age::parse("-20").is_err());
    }

    #[test]
    fn test_age_parse_out_of_range() {
        let err = Age::parse("130").unwrap_err();
        assert_eq!(err.message(), "Idade deve estar entre 18 e 120 anos.");

        // Overflows i32 but is still all-digits
        assert!(Age::parse("99999999999999999999").is_err());
    }
}
