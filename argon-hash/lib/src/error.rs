//! Error types for Argon2id hashing and verification.

use thiserror::Error;

/// Errors that can occur while creating, decoding, or verifying a hash.
///
/// A password that does not match its hash is **not** an error; verification
/// returns `Ok(false)` for that case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Argon2idError {
    /// The encoded hash does not follow the
    /// `$argon2id$v=..$m=..,t=..,p=..$salt$digest` grammar.
    #[error("malformed hash: {0}")]
    MalformedHash(String),

    /// The hash names an Argon2 variant other than `argon2id`.
    #[error("incompatible variant of argon2")]
    IncompatibleVariant,

    /// The hash carries a version other than the supported one.
    #[error("incompatible version of argon2: found v={found}")]
    IncompatibleVersion { found: u32 },

    /// The operating system's random source failed to produce a salt.
    #[error("secure random source failed: {0}")]
    Random(String),

    /// The underlying Argon2id primitive rejected its inputs.
    #[error("argon2id key derivation failed: {0}")]
    Kdf(String),

    /// A caller-supplied parameter set or buffer was rejected.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}

impl Argon2idError {
    /// Returns `true` when the error was raised while decoding a stored hash.
    ///
    /// Callers can use this to treat foreign or outdated hashes as a migration
    /// signal instead of a failure of the running system.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedHash(_) | Self::IncompatibleVariant | Self::IncompatibleVersion { .. }
        )
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedHash(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_errors_are_classified() {
        assert!(Argon2idError::IncompatibleVariant.is_decode_error());
        assert!(Argon2idError::IncompatibleVersion { found: 16 }.is_decode_error());
        assert!(Argon2idError::malformed("x").is_decode_error());
        assert!(!Argon2idError::Random("x".into()).is_decode_error());
        assert!(!Argon2idError::Kdf("x".into()).is_decode_error());
    }

    #[test]
    fn test_incompatible_variant_compares_by_value() {
        assert_eq!(
            Argon2idError::IncompatibleVariant,
            Argon2idError::IncompatibleVariant
        );
        assert_ne!(
            Argon2idError::IncompatibleVariant,
            Argon2idError::malformed("incompatible variant")
        );
    }

    #[test]
    fn test_display_includes_found_version() {
        let err = Argon2idError::IncompatibleVersion { found: 16 };
        assert_eq!(err.to_string(), "incompatible version of argon2: found v=16");
    }
}
