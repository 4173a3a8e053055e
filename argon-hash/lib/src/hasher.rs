//! Argon2id password hashing.
//!
//! [`create_hash`] draws a fresh salt from the operating system's CSPRNG,
//! derives a digest with Argon2id, and returns the self-describing encoded
//! string. The string carries its own parameters, so a hash created today
//! still verifies after the defaults change.
//!
//! ## When to Use
//!
//! Use these functions for password storage and verification. Do NOT use
//! them for content hashing or symmetric key derivation.
//!
//! ## Examples
//!
//! ```rust
//! use argon_hash::{DEFAULT_PARAMS, compare_password_and_hash, create_hash};
//!
//! let params = DEFAULT_PARAMS.with_memory_cost_kib(1024);
//! let hash = create_hash("my-secret-password", &params).unwrap();
//!
//! assert!(compare_password_and_hash("my-secret-password", &hash).unwrap());
//! assert!(!compare_password_and_hash("wrong-password", &hash).unwrap());
//! ```

use rand::RngCore;
use rand::rngs::OsRng;

use crate::codec::encode_hash;
use crate::error::Argon2idError;
use crate::kdf;
use crate::params::ParameterSet;

/// Hashes a password with a freshly generated salt.
///
/// Hashing the same password twice yields two different strings because
/// every call draws a new salt.
///
/// ## Examples
///
/// ```rust
/// use argon_hash::{DEFAULT_PARAMS, create_hash};
///
/// let params = DEFAULT_PARAMS.with_memory_cost_kib(1024);
/// let first = create_hash("password", &params).unwrap();
/// let second = create_hash("password", &params).unwrap();
///
/// assert!(first.starts_with("$argon2id$v=19$m=1024,t=1,p=2$"));
/// assert_ne!(first, second);
/// ```
///
/// ## Errors
///
/// - `Argon2idError::InvalidParams` if `params` fails [`ParameterSet::validate`]
/// - `Argon2idError::Random` if the OS random source fails
/// - `Argon2idError::Kdf` if the Argon2id primitive rejects the inputs
pub fn create_hash(password: &str, params: &ParameterSet) -> Result<String, Argon2idError> {
    params.validate()?;
    let salt = generate_salt(params.salt_length)?;

    tracing::debug!(
        memory_cost_kib = params.memory_cost_kib,
        iterations = params.iterations,
        parallelism = params.parallelism,
        salt_length = params.salt_length,
        digest_length = params.digest_length,
        "creating argon2id hash"
    );

    hash_with_salt(password, &salt, params)
}

/// Hashes a password with a caller-provided salt.
///
/// ## Warning
///
/// In production, prefer [`create_hash`], which generates a cryptographically
/// secure random salt. Only use this function when you specifically need
/// deterministic output (e.g., test vectors or migrating hashes from another
/// store). The encoded salt is `salt` as given, whatever
/// `params.salt_length` says.
///
/// ## Examples
///
/// ```rust
/// use argon_hash::{DEFAULT_PARAMS, hash_with_salt};
///
/// let params = DEFAULT_PARAMS.with_memory_cost_kib(1024);
/// let a = hash_with_salt("password", b"0123456789abcdef", &params).unwrap();
/// let b = hash_with_salt("password", b"0123456789abcdef", &params).unwrap();
/// assert_eq!(a, b);
/// ```
///
/// ## Errors
///
/// - `Argon2idError::Kdf` if the Argon2id primitive rejects the inputs
/// - `Argon2idError::InvalidParams` if `salt` is empty
pub fn hash_with_salt(
    password: &str,
    salt: &[u8],
    params: &ParameterSet,
) -> Result<String, Argon2idError> {
    let digest = kdf::derive(password.as_bytes(), salt, params)?;
    encode_hash(params, salt, &digest)
}

/// Fills a new buffer of `len` bytes from the OS random source.
///
/// ## Errors
///
/// Returns `Argon2idError::Random` if the OS source fails. There is no
/// fallback to a weaker generator and no retry.
pub fn generate_salt(len: u32) -> Result<Vec<u8>, Argon2idError> {
    let len = usize::try_from(len)
        .map_err(|_| Argon2idError::InvalidParams("salt length does not fit in memory".into()))?;
    let mut salt = vec![0u8; len];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| Argon2idError::Random(e.to_string()))?;
    Ok(salt)
}
