//! Adapter over the `argon2` crate's raw Argon2id primitive.

use argon2::{Algorithm, Argon2, Block, Params, Version};

use crate::error::Argon2idError;
use crate::params::ParameterSet;

/// Derives `params.digest_length` bytes from `password` and `salt`.
///
/// Deterministic for fixed inputs. Runs Argon2id version 0x13 with the
/// memory, iteration, and parallelism costs from `params`; `salt_length` is
/// ignored in favour of the salt actually passed in.
///
/// ## Errors
///
/// Returns `Argon2idError::Kdf` when the primitive rejects the inputs, for
/// example a salt shorter than 8 bytes or a memory cost below
/// `8 * parallelism` KiB, and when the working memory for the requested
/// memory cost cannot be allocated.
pub fn derive(
    password: &[u8],
    salt: &[u8],
    params: &ParameterSet,
) -> Result<Vec<u8>, Argon2idError> {
    let output_len = usize::try_from(params.digest_length)
        .map_err(|_| Argon2idError::Kdf("digest length does not fit in memory".into()))?;

    let argon_params = Params::new(
        params.memory_cost_kib,
        params.iterations,
        u32::from(params.parallelism),
        Some(output_len),
    )
    .map_err(|e| Argon2idError::Kdf(e.to_string()))?;

    // The memory cost comes from stored hashes, so the block buffer is
    // reserved fallibly instead of letting the allocator abort.
    let block_count = argon_params.block_count();
    let mut blocks: Vec<Block> = Vec::new();
    blocks.try_reserve_exact(block_count).map_err(|e| {
        Argon2idError::Kdf(format!(
            "cannot allocate {} KiB of working memory: {e}",
            params.memory_cost_kib
        ))
    })?;
    blocks.resize(block_count, Block::default());

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon_params);
    let mut digest = vec![0u8; output_len];
    argon2
        .hash_password_into_with_memory(password, salt, &mut digest, &mut blocks)
        .map_err(|e| Argon2idError::Kdf(e.to_string()))?;

    Ok(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAST: ParameterSet = ParameterSet::new(64, 1, 1, 16, 32);

    #[test]
    fn test_derive_is_deterministic() {
        let a = derive(b"password", b"saltsaltsalt", &FAST).unwrap();
        let b = derive(b"password", b"saltsaltsalt", &FAST).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn test_derive_honours_digest_length() {
        let digest = derive(b"password", b"saltsaltsalt", &FAST.with_digest_length(64)).unwrap();
        assert_eq!(digest.len(), 64);
    }

    #[test]
    fn test_derive_depends_on_every_input() {
        let base = derive(b"password", b"saltsaltsalt", &FAST).unwrap();
        assert_ne!(base, derive(b"Password", b"saltsaltsalt", &FAST).unwrap());
        assert_ne!(base, derive(b"password", b"saltsaltsalT", &FAST).unwrap());
        assert_ne!(base, derive(b"password", b"saltsaltsalt", &FAST.with_iterations(2)).unwrap());
    }

    #[test]
    fn test_derive_rejects_short_salt() {
        let result = derive(b"password", b"short", &FAST);
        assert!(matches!(result, Err(Argon2idError::Kdf(_))));
    }

    #[test]
    fn test_derive_unallocatable_memory_is_an_error() {
        let params = FAST.with_memory_cost_kib(u32::MAX);
        let result = derive(b"password", b"saltsaltsalt", &params);
        assert!(matches!(result, Err(Argon2idError::Kdf(_))));
    }

    #[test]
    fn test_derive_rejects_zero_parallelism() {
        let result = derive(b"password", b"saltsaltsalt", &FAST.with_parallelism(0));
        assert!(matches!(result, Err(Argon2idError::Kdf(_))));
    }
}
