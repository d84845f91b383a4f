//! Client Password Value Object
//!
//! Domain wrapper over `platform::password`. Policy failures collapse to
//! the user-facing weak-password message; the plaintext side is zeroized
//! on drop and never stored.

use kernel::error::app_error::AppError;
use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};
use std::fmt;

use crate::error::{RegistryError, RegistryResult};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input, validated against the strength policy
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Validate: 8..=128 characters with at least one uppercase letter,
    /// one lowercase letter, one digit and one symbol.
    pub fn new(raw: String) -> RegistryResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::TooLong { max, .. } => RegistryError::Validation(
                AppError::bad_request(format!("Senha deve ter no máximo {} caracteres.", max)),
            ),
            _ => RegistryError::WeakPassword,
        })?;

        Ok(Self(clear_text))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Client Password (Hashed, for storage)
// ============================================================================

/// Hashed client password in Argon2id PHC string format
#[derive(Clone, PartialEq, Eq)]
pub struct ClientPassword(HashedPassword);

impl ClientPassword {
    /// Hash a validated raw password.
    ///
    /// ## Arguments
    /// * `pepper` - Optional application-wide secret
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> RegistryResult<Self> {
        let hashed = raw.inner().hash(pepper).map_err(|e| match e {
            PasswordHashError::HashingFailed(msg) => {
                RegistryError::Internal(format!("Password hashing failed: {}", msg))
            }
            PasswordHashError::InvalidHashFormat => {
                RegistryError::Internal("Unexpected error during password hashing".to_string())
            }
        })?;

        Ok(Self(hashed))
    }

    /// Create from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> RegistryResult<Self> {
        let hashed = HashedPassword::from_phc_string(phc_string)
            .map_err(|_| RegistryError::Internal("Invalid password hash in database".to_string()))?;

        Ok(Self(hashed))
    }

    /// Get PHC string for database storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash (constant-time).
    ///
    /// ## Arguments
    /// * `raw` - The raw password to verify
    /// * `pepper` - Must match the pepper used during hashing
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }
}

impl fmt::Debug for ClientPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
