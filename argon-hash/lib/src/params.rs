//! Cost and shape parameters for Argon2id hashing.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Argon2idError;

/// Default memory cost in KiB (64 MiB).
pub const DEFAULT_MEMORY_COST_KIB: u32 = 65536;

/// Default time cost (number of iterations).
pub const DEFAULT_ITERATIONS: u32 = 1;

/// Default parallelism (number of lanes).
pub const DEFAULT_PARALLELISM: u8 = 2;

/// Default salt length in bytes.
pub const DEFAULT_SALT_LENGTH: u32 = 16;

/// Default digest length in bytes.
pub const DEFAULT_DIGEST_LENGTH: u32 = 32;

/// Smallest salt [`ParameterSet::validate`] accepts, in bytes.
pub const MIN_SALT_LENGTH: u32 = 8;

/// Smallest digest [`ParameterSet::validate`] accepts, in bytes.
pub const MIN_DIGEST_LENGTH: u32 = 4;

/// The parameter set used when the caller has no opinion.
pub const DEFAULT_PARAMS: ParameterSet = ParameterSet::new(
    DEFAULT_MEMORY_COST_KIB,
    DEFAULT_ITERATIONS,
    DEFAULT_PARALLELISM,
    DEFAULT_SALT_LENGTH,
    DEFAULT_DIGEST_LENGTH,
);

/// Cost and shape configuration for a single Argon2id hash.
///
/// This is a plain value: two sets are equal when every field matches. A set
/// decoded from a stored hash carries the salt and digest lengths of that
/// hash, so comparing it against the set a caller hashes with today tells
/// whether the stored hash is outdated.
///
/// ## Examples
///
/// ```rust
/// use argon_hash::{DEFAULT_PARAMS, ParameterSet};
///
/// let stronger = DEFAULT_PARAMS.with_iterations(3);
/// assert_ne!(stronger, DEFAULT_PARAMS);
/// assert_eq!(ParameterSet::default(), DEFAULT_PARAMS);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ParameterSet {
    /// Memory cost in KiB.
    pub memory_cost_kib: u32,
    /// Number of passes over memory.
    pub iterations: u32,
    /// Degree of parallelism (lanes).
    pub parallelism: u8,
    /// Length of the random salt in bytes.
    pub salt_length: u32,
    /// Length of the derived digest in bytes.
    pub digest_length: u32,
}

impl Default for ParameterSet {
    fn default() -> Self {
        DEFAULT_PARAMS
    }
}

impl ParameterSet {
    /// Creates a parameter set from explicit values without validating them.
    pub const fn new(
        memory_cost_kib: u32,
        iterations: u32,
        parallelism: u8,
        salt_length: u32,
        digest_length: u32,
    ) -> Self {
        Self {
            memory_cost_kib,
            iterations,
            parallelism,
            salt_length,
            digest_length,
        }
    }

    /// Returns a copy with a different memory cost in KiB.
    pub const fn with_memory_cost_kib(mut self, memory_cost_kib: u32) -> Self {
        self.memory_cost_kib = memory_cost_kib;
        self
    }

    /// Returns a copy with a different number of iterations.
    pub const fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Returns a copy with a different degree of parallelism.
    pub const fn with_parallelism(mut self, parallelism: u8) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Returns a copy with a different salt length in bytes.
    pub const fn with_salt_length(mut self, salt_length: u32) -> Self {
        self.salt_length = salt_length;
        self
    }

    /// Returns a copy with a different digest length in bytes.
    pub const fn with_digest_length(mut self, digest_length: u32) -> Self {
        self.digest_length = digest_length;
        self
    }

    /// Checks that the set is usable for creating a new hash.
    ///
    /// Decoding never calls this: a stored hash is verified with whatever
    /// parameters it carries, and the KDF rejects anything it cannot run.
    ///
    /// ## Errors
    ///
    /// Returns `Argon2idError::InvalidParams` naming the first offending field.
    pub fn validate(&self) -> Result<(), Argon2idError> {
        if self.parallelism == 0 {
            return Err(Argon2idError::InvalidParams(
                "parallelism must be at least 1".into(),
            ));
        }
        if self.iterations == 0 {
            return Err(Argon2idError::InvalidParams(
                "iterations must be at least 1".into(),
            ));
        }
        let min_memory = 8 * u32::from(self.parallelism);
        if self.memory_cost_kib < min_memory {
            return Err(Argon2idError::InvalidParams(format!(
                "memory cost must be at least {min_memory} KiB for parallelism {}",
                self.parallelism
            )));
        }
        if self.salt_length < MIN_SALT_LENGTH {
            return Err(Argon2idError::InvalidParams(format!(
                "salt length must be at least {MIN_SALT_LENGTH} bytes"
            )));
        }
        if self.digest_length < MIN_DIGEST_LENGTH {
            return Err(Argon2idError::InvalidParams(format!(
                "digest length must be at least {MIN_DIGEST_LENGTH} bytes"
            )));
        }
        Ok(())
    }
}
