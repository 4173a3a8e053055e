//! Argon2id password hashing with a strict, self-describing hash string.
//!
//! This crate creates and verifies password hashes in the canonical PHC
//! layout used by every standard Argon2id implementation:
//!
//! ```text
//! $argon2id$v=19$m=65536,t=1,p=2$<salt>$<digest>
//! ```
//!
//! ## Core Functions
//!
//! - [`create_hash`] - Hash a password with a fresh random salt
//! - [`compare_password_and_hash`] - Verify a password against a stored hash
//! - [`check_hash`] - Verify and return the stored [`ParameterSet`]
//! - [`needs_rehash`] - Compare a stored hash's parameters against a target
//!
//! ## Lower-Level Building Blocks
//!
//! - [`encode_hash`] / [`decode_hash`] - The hash string codec
//! - [`hash_with_salt`] - Deterministic hashing with a caller-supplied salt
//! - [`kdf::derive`] - The raw Argon2id key derivation
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | No | `Serialize`/`Deserialize` for [`ParameterSet`] |
//!
//! ## Examples
//!
//! ```rust
//! use argon_hash::{Argon2idError, DEFAULT_PARAMS, check_hash, create_hash};
//!
//! let params = DEFAULT_PARAMS.with_memory_cost_kib(1024);
//! let hash = create_hash("pa$$word", &params).unwrap();
//!
//! let (matched, stored) = check_hash("pa$$word", &hash).unwrap();
//! assert!(matched);
//! assert_eq!(stored, params);
//!
//! let foreign = "$argon2i$v=19$m=65536,t=1,p=2$mFe3kxhovyEByvwnUtr0ow$nU9AqnoPfzMOQhCHa9BDrQ+4bSfj69jgtvGu/2McCxU";
//! assert_eq!(check_hash("pa$$word", foreign), Err(Argon2idError::IncompatibleVariant));
//! ```

mod codec;
mod error;
mod hasher;
pub mod kdf;
mod params;
mod verifier;

pub use codec::{ARGON2_VERSION, DecodedHash, VARIANT, decode_hash, encode_hash};
pub use error::Argon2idError;
pub use hasher::{create_hash, generate_salt, hash_with_salt};
pub use params::{
    DEFAULT_DIGEST_LENGTH, DEFAULT_ITERATIONS, DEFAULT_MEMORY_COST_KIB, DEFAULT_PARALLELISM,
    DEFAULT_PARAMS, DEFAULT_SALT_LENGTH, MIN_DIGEST_LENGTH, MIN_SALT_LENGTH, ParameterSet,
};
pub use verifier::{check_hash, compare_password_and_hash, needs_rehash};
