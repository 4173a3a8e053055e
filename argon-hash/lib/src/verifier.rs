//! Verification of passwords against encoded Argon2id hashes.

use subtle::ConstantTimeEq;

use crate::codec::decode_hash;
use crate::error::Argon2idError;
use crate::kdf;
use crate::params::ParameterSet;

/// Verifies a password against an encoded hash.
///
/// A wrong password is not an error: it yields `Ok(false)`.
///
/// ## Examples
///
/// ```rust
/// use argon_hash::compare_password_and_hash;
///
/// let hash = "$argon2id$v=19$m=65536,t=1,p=2$UDk0zEuIzbt0x3bwkf8Bgw$ihSfHWUJpTgDvNWiojrgcN4E0pJdUVmqCEdRZesx9tE";
/// assert!(compare_password_and_hash("bug", hash).unwrap());
/// assert!(!compare_password_and_hash("feature", hash).unwrap());
/// ```
///
/// ## Errors
///
/// Decode errors from [`decode_hash`](crate::decode_hash) are returned
/// unchanged; `Argon2idError::Kdf` if the stored parameters cannot be run.
pub fn compare_password_and_hash(password: &str, encoded: &str) -> Result<bool, Argon2idError> {
    check_hash(password, encoded).map(|(matched, _)| matched)
}

/// Verifies a password and also returns the parameters the hash was made with.
///
/// Comparing the returned set against the one currently used for new hashes
/// tells the caller whether the stored hash should be replaced.
///
/// ## Examples
///
/// ```rust
/// use argon_hash::{DEFAULT_PARAMS, check_hash};
///
/// let hash = "$argon2id$v=19$m=65536,t=1,p=2$UDk0zEuIzbt0x3bwkf8Bgw$ihSfHWUJpTgDvNWiojrgcN4E0pJdUVmqCEdRZesx9tE";
/// let (matched, params) = check_hash("bug", hash).unwrap();
/// assert!(matched);
/// assert_eq!(params, DEFAULT_PARAMS);
/// ```
///
/// ## Errors
///
/// Same as [`compare_password_and_hash`].
pub fn check_hash(
    password: &str,
    encoded: &str,
) -> Result<(bool, ParameterSet), Argon2idError> {
    let decoded = decode_hash(encoded)?;
    let computed = kdf::derive(password.as_bytes(), &decoded.salt, &decoded.params)?;
    let matched = digests_match(&computed, &decoded.digest);

    tracing::debug!(matched, "verified password against argon2id hash");

    Ok((matched, decoded.params))
}

/// Reports whether a stored hash was made with parameters other than `target`.
///
/// Only decodes; no key derivation is performed, so this is cheap enough to
/// call before deciding whether to re-hash after a successful login.
///
/// ## Errors
///
/// Decode errors from [`decode_hash`](crate::decode_hash) are returned unchanged.
pub fn needs_rehash(encoded: &str, target: &ParameterSet) -> Result<bool, Argon2idError> {
    let decoded = decode_hash(encoded)?;
    Ok(decoded.params != *target)
}

/// Constant-time digest equality. Buffers of different length never match.
pub(crate) fn digests_match(computed: &[u8], stored: &[u8]) -> bool {
    computed.ct_eq(stored).into()
}
