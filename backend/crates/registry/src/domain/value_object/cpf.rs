//! CPF Value Object
//!
//! Brazilian individual taxpayer identifier: 11 digits, the last two of
//! which are check digits computed by a weighted sum mod 11.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Fixed placeholder used when a CPF must appear in a listing.
pub const CPF_MASK: &str = "***.***.***-**";

/// Validated CPF, stored as 11 bare digits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cpf(String);

impl Cpf {
    /// Create from raw input. Formatting characters are stripped before
    /// the checksum is verified.
    pub fn new(input: impl AsRef<str>) -> AppResult<Self> {
        let digits: String = input
            .as_ref()
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();

        if !has_valid_check_digits(&digits) {
            return Err(AppError::bad_request("CPF inválido."));
        }

        Ok(Self(digits))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(digits: impl Into<String>) -> Self {
        Self(digits.into())
    }

    /// The 11 bare digits
    pub fn as_digits(&self) -> &str {
        &self.0
    }

    /// `AAA.BBB.CCC-DD`
    pub fn formatted(&self) -> String {
        format!(
            "{}.{}.{}-{}",
            &self.0[0..3],
            &self.0[3..6],
            &self.0[6..9],
            &self.0[9..11]
        )
    }

    /// Fixed placeholder for listings
    pub fn masked(&self) -> &'static str {
        CPF_MASK
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

/// Verify the two CPF check digits.
///
/// Digit 9 is checked with weights 10 down to 2 over the first 9 digits;
/// digit 10 with weights 11 down to 2 over the first 10. In both cases
/// the check digit is `11 - (sum % 11)`, mapped to 0 when that is >= 10.
/// All-identical sequences pass the arithmetic but are rejected outright.
fn has_valid_check_digits(digits: &str) -> bool {
    if digits.len() != 11 {
        return false;
    }

    let d: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();

    if d.iter().all(|&x| x == d[0]) {
        return false;
    }

    for i in [9usize, 10] {
        let sum: u32 = (0..i).map(|j| d[j] * ((i as u32 + 1) - j as u32)).sum();
        let mut check = 11 - (sum % 11);
        if check > 9 {
            check = 0;
        }
        if check != d[i] {
            return false;
        }
    }

    true
}
