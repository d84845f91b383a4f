//! CNPJ Value Object
//!
//! Brazilian company taxpayer identifier: 14 digits, the last two of
//! which are check digits computed by a weighted sum mod 11 with weights
//! cycling through 2..=9.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Fixed placeholder used when a CNPJ must appear in a listing.
pub const CNPJ_MASK: &str = "**.***.***/****-**";

/// Validated CNPJ, stored as 14 bare digits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cnpj(String);

impl Cnpj {
    /// Create from raw input. Formatting characters are stripped before
    /// the checksum is verified.
    pub fn new(input: impl AsRef<str>) -> AppResult<Self> {
        let digits: String = input
            .as_ref()
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();

        if !has_valid_check_digits(&digits) {
            return Err(AppError::bad_request("CNPJ inválido."));
        }

        Ok(Self(digits))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(digits: impl Into<String>) -> Self {
        Self(digits.into())
    }

    /// The 14 bare digits
    pub fn as_digits(&self) -> &str {
        &self.0
    }

    /// `AA.BBB.CCC/DDDD-EE`
    pub fn formatted(&self) -> String {
        format!(
            "{}.{}.{}/{}-{}",
            &self.0[0..2],
            &self.0[2..5],
            &self.0[5..8],
            &self.0[8..12],
            &self.0[12..14]
        )
    }

    /// Fixed placeholder for listings
    pub fn masked(&self) -> &'static str {
        CNPJ_MASK
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

/// Verify the two CNPJ check digits.
///
/// For check position `i` (12, then 13), digits are traversed
/// right-to-left starting at `i - 1`; the weight starts at 2 and
/// increments up to 9, then resets to 2. The check digit is
/// `11 - (sum % 11)`, mapped to 0 when that is >= 10. All-identical
/// sequences are rejected outright.
fn has_valid_check_digits(digits: &str) -> bool {
    if digits.len() != 14 {
        return false;
    }

    let d: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();

    if d.iter().all(|&x| x == d[0]) {
        return false;
    }

    for i in [12usize, 13] {
        let mut weight = 2u32;
        let mut sum = 0u32;
        for j in (0..i).rev() {
            sum += d[j] * weight;
            weight = if weight < 9 { weight + 1 } else { 2 };
        }
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
