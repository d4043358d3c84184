//! Password Handling
//!
//! - [`ClearTextPassword`]: user input, zeroized on drop, never printed
//! - [`PasswordDigest`]: the stored form, a blind keyed digest
//!   (`|digestHex|salt`) that never contains the password itself
//!
//! Password *policy* (length, character set) is a form-validation concern
//! and lives with the form validators, not here.

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{FIELD_SEPARATOR, HashCodec};

/// Password digest errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordDigestError {
    /// Stored value is not a packed digest
    #[error("Invalid password digest format")]
    InvalidFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Does not implement `Clone`; debug output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digest this password with a fresh random salt
    pub fn digest(&self, codec: &HashCodec) -> PasswordDigest {
        PasswordDigest {
            packed: codec.make_blind_digest(&self.0, None),
        }
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Password Digest (Safe to store)
// ============================================================================

/// Stored password digest
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    packed: String,
}

impl PasswordDigest {
    /// Restore from storage
    pub fn from_stored(s: impl Into<String>) -> Result<Self, PasswordDigestError> {
        let packed = s.into();
        if packed.matches(FIELD_SEPARATOR).count() < 2 {
            return Err(PasswordDigestError::InvalidFormat);
        }
        Ok(Self { packed })
    }

    /// Packed form for storage
    pub fn as_stored(&self) -> &str {
        &self.packed
    }

    /// Verify a candidate password (constant-time)
    pub fn verify(&self, password: &ClearTextPassword, codec: &HashCodec) -> bool {
        codec.verify(password.as_str(), &self.packed)
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordDigest")
            .field("packed", &"[DIGEST]")
            .finish()
    }
}
