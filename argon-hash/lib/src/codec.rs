//! Encoding and decoding of the canonical Argon2id hash string.
//!
//! The format is the PHC string layout used by the reference implementation:
//!
//! ```text
//! $argon2id$v=19$m=<memory KiB>,t=<iterations>,p=<parallelism>$<salt>$<digest>
//! ```
//!
//! Salt and digest are standard base64 without padding. Decoding is strict:
//! the segments must appear in exactly this order, numbers are plain decimal
//! digits without leading zeros, and base64 must be canonical. Each failure
//! maps to one [`Argon2idError`] variant so callers can tell a corrupted
//! record apart from a hash made by a different Argon2 variant or version.

use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD_NO_PAD as B64;

use crate::error::Argon2idError;
use crate::params::ParameterSet;

/// Algorithm tag written into, and required from, every encoded hash.
pub const VARIANT: &str = "argon2id";

/// The single supported Argon2 version (0x13).
pub const ARGON2_VERSION: u32 = 19;

/// The parts recovered from an encoded hash.
///
/// `params.salt_length` and `params.digest_length` are the byte lengths of
/// the decoded `salt` and `digest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHash {
    pub params: ParameterSet,
    pub salt: Vec<u8>,
    pub digest: Vec<u8>,
}

impl DecodedHash {
    /// Re-encodes the parts into the canonical string.
    pub fn encode(&self) -> Result<String, Argon2idError> {
        encode_hash(&self.params, &self.salt, &self.digest)
    }
}

impl FromStr for DecodedHash {
    type Err = Argon2idError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_hash(s)
    }
}

/// Encodes parameters, salt, and digest into the canonical hash string.
///
/// Only the cost fields of `params` are written; the salt and digest lengths
/// are implied by the bytes themselves.
///
/// ## Examples
///
/// ```rust
/// use argon_hash::{DEFAULT_PARAMS, encode_hash};
///
/// let encoded = encode_hash(&DEFAULT_PARAMS, &[0u8; 16], &[1u8; 32]).unwrap();
/// assert!(encoded.starts_with("$argon2id$v=19$m=65536,t=1,p=2$"));
/// assert!(!encoded.ends_with('='));
/// ```
///
/// ## Errors
///
/// Returns `Argon2idError::InvalidParams` if `salt` or `digest` is empty.
pub fn encode_hash(
    params: &ParameterSet,
    salt: &[u8],
    digest: &[u8],
) -> Result<String, Argon2idError> {
    if salt.is_empty() {
        return Err(Argon2idError::InvalidParams("salt must not be empty".into()));
    }
    if digest.is_empty() {
        return Err(Argon2idError::InvalidParams(
            "digest must not be empty".into(),
        ));
    }

    Ok(format!(
        "${VARIANT}$v={ARGON2_VERSION}$m={},t={},p={}${}${}",
        params.memory_cost_kib,
        params.iterations,
        params.parallelism,
        B64.encode(salt),
        B64.encode(digest),
    ))
}

/// Decodes a canonical hash string into its parameters, salt, and digest.
///
/// ## Examples
///
/// ```rust
/// use argon_hash::{Argon2idError, decode_hash};
///
/// let decoded = decode_hash(
///     "$argon2id$v=19$m=65536,t=1,p=2$UDk0zEuIzbt0x3bwkf8Bgw$ihSfHWUJpTgDvNWiojrgcN4E0pJdUVmqCEdRZesx9tE",
/// )
/// .unwrap();
/// assert_eq!(decoded.params.parallelism, 2);
/// assert_eq!(decoded.digest.len(), 32);
///
/// assert_eq!(
///     decode_hash("$argon2i$v=19$m=65536,t=1,p=2$c2FsdHNhbHQ$ZGlnZXN0"),
///     Err(Argon2idError::IncompatibleVariant)
/// );
/// ```
///
/// ## Errors
///
/// - `Argon2idError::IncompatibleVariant` if the algorithm tag is not `argon2id`
/// - `Argon2idError::IncompatibleVersion` if the version is not 19
/// - `Argon2idError::MalformedHash` for any other deviation from the grammar
pub fn decode_hash(encoded: &str) -> Result<DecodedHash, Argon2idError> {
    parse(encoded).inspect_err(|err| {
        tracing::debug!(error = %err, "rejected encoded hash");
    })
}

fn parse(encoded: &str) -> Result<DecodedHash, Argon2idError> {
    let mut segments = encoded.split('$');

    if segments.next() != Some("") {
        return Err(Argon2idError::malformed("hash must start with '$'"));
    }

    match segments.next() {
        Some(VARIANT) => {}
        Some("") | None => return Err(Argon2idError::malformed("missing algorithm tag")),
        Some(_) => return Err(Argon2idError::IncompatibleVariant),
    }

    let version = next_part(&mut segments, "version segment")?;
    let costs = next_part(&mut segments, "parameter segment")?;
    let salt = next_part(&mut segments, "salt segment")?;
    let digest = next_part(&mut segments, "digest segment")?;

    if segments.next().is_some() {
        return Err(Argon2idError::malformed("unexpected segment after digest"));
    }

    let version = parse_field(version, "v")?;
    if version != ARGON2_VERSION {
        return Err(Argon2idError::IncompatibleVersion { found: version });
    }

    let (memory_cost_kib, iterations, parallelism) = parse_costs(costs)?;
    let salt = decode_b64(salt, "salt")?;
    let digest = decode_b64(digest, "digest")?;

    let params = ParameterSet::new(
        memory_cost_kib,
        iterations,
        parallelism,
        byte_len(&salt, "salt")?,
        byte_len(&digest, "digest")?,
    );

    Ok(DecodedHash {
        params,
        salt,
        digest,
    })
}

/// Parses `m=<u32>,t=<u32>,p=<u8>` in exactly that order.
fn parse_costs(segment: &str) -> Result<(u32, u32, u8), Argon2idError> {
    let mut fields = segment.split(',');
    let memory = parse_field(next_part(&mut fields, "'m' parameter")?, "m")?;
    let iterations = parse_field(next_part(&mut fields, "'t' parameter")?, "t")?;
    let parallelism = parse_field(next_part(&mut fields, "'p' parameter")?, "p")?;

    if fields.next().is_some() {
        return Err(Argon2idError::malformed("unexpected extra parameter"));
    }

    let parallelism = u8::try_from(parallelism)
        .map_err(|_| Argon2idError::malformed("parallelism out of range"))?;

    Ok((memory, iterations, parallelism))
}

fn next_part<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    name: &str,
) -> Result<&'a str, Argon2idError> {
    parts
        .next()
        .ok_or_else(|| Argon2idError::malformed(format!("missing {name}")))
}

/// Parses a `<key>=<decimal>` field.
fn parse_field(field: &str, key: &str) -> Result<u32, Argon2idError> {
    let value = field
        .strip_prefix(key)
        .and_then(|rest| rest.strip_prefix('='))
        .ok_or_else(|| Argon2idError::malformed(format!("expected '{key}=' field")))?;
    parse_decimal(value)
        .ok_or_else(|| Argon2idError::malformed(format!("'{key}' is not a canonical decimal")))
}

fn parse_decimal(value: &str) -> Option<u32> {
    let canonical = match value.as_bytes() {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        digits => digits.iter().all(u8::is_ascii_digit),
    };
    if !canonical {
        return None;
    }
    value.parse().ok()
}

fn decode_b64(segment: &str, name: &str) -> Result<Vec<u8>, Argon2idError> {
    if segment.is_empty() {
        return Err(Argon2idError::malformed(format!("empty {name}")));
    }
    B64.decode(segment)
        .map_err(|e| Argon2idError::malformed(format!("invalid {name} encoding: {e}")))
}

fn byte_len(bytes: &[u8], name: &str) -> Result<u32, Argon2idError> {
    u32::try_from(bytes.len()).map_err(|_| Argon2idError::malformed(format!("{name} too long")))
}
