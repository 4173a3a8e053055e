//! End-to-end behaviour with default parameters, fixed vectors, and hashes
//! exchanged with the `argon2` crate's own PHC implementation.

use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon_hash::{
    Argon2idError, DEFAULT_PARAMS, check_hash, compare_password_and_hash, create_hash,
    decode_hash,
};
use rand::rngs::OsRng;
use regex::Regex;

const BUG_HASH: &str = "$argon2id$v=19$m=65536,t=1,p=2$UDk0zEuIzbt0x3bwkf8Bgw$ihSfHWUJpTgDvNWiojrgcN4E0pJdUVmqCEdRZesx9tE";

#[test]
fn default_hash_matches_canonical_grammar() {
    let pattern = Regex::new(
        r"^\$argon2id\$v=19\$m=65536,t=1,p=[0-9]{1,4}\$[A-Za-z0-9+/]{22}\$[A-Za-z0-9+/]{43}$",
    )
    .unwrap();

    let hash1 = create_hash("pa$$word", &DEFAULT_PARAMS).unwrap();
    assert!(pattern.is_match(&hash1), "hash {hash1:?} not in correct format");

    let hash2 = create_hash("pa$$word", &DEFAULT_PARAMS).unwrap();
    assert_ne!(hash1, hash2, "hashes must be unique");
}

#[test]
fn default_hash_round_trips_through_check() {
    let hash = create_hash("pa$$word", &DEFAULT_PARAMS).unwrap();

    assert!(compare_password_and_hash("pa$$word", &hash).unwrap());
    assert!(!compare_password_and_hash("otherPa$$word", &hash).unwrap());

    let decoded = decode_hash(&hash).unwrap();
    assert_eq!(decoded.params, DEFAULT_PARAMS);

    let (matched, params) = check_hash("pa$$word", &hash).unwrap();
    assert!(matched);
    assert_eq!(params, DEFAULT_PARAMS);
}

#[test]
fn known_vector_verifies() {
    let (matched, params) = check_hash("bug", BUG_HASH).unwrap();
    assert!(matched);
    assert_eq!(params, DEFAULT_PARAMS);
}

#[test]
fn corrupted_last_character_is_rejected() {
    let corrupted = BUG_HASH.replacen("x9tE", "x9tF", 1);
    let result = check_hash("bug", &corrupted);
    assert!(matches!(result, Err(Argon2idError::MalformedHash(_))));
}

#[test]
fn corrupted_digest_byte_is_a_mismatch() {
    // Still canonical base64, but the digest differs in its first byte.
    let corrupted = BUG_HASH.replacen("$ihSf", "$jhSf", 1);
    assert_eq!(check_hash("bug", &corrupted).map(|(m, _)| m), Ok(false));
}

#[test]
fn wrong_variant_is_distinguished() {
    let result = check_hash(
        "pa$$word",
        "$argon2i$v=19$m=65536,t=1,p=2$mFe3kxhovyEByvwnUtr0ow$nU9AqnoPfzMOQhCHa9BDrQ+4bSfj69jgtvGu/2McCxU",
    );
    assert_eq!(result, Err(Argon2idError::IncompatibleVariant));
}

#[test]
fn our_hashes_verify_with_argon2_crate() {
    let params = DEFAULT_PARAMS.with_memory_cost_kib(4096);
    let hash = create_hash("interop", &params).unwrap();

    let parsed = PasswordHash::new(&hash).unwrap();
    assert!(Argon2::default().verify_password(b"interop", &parsed).is_ok());
    assert!(Argon2::default().verify_password(b"other", &parsed).is_err());
}

#[test]
fn argon2_crate_hashes_verify_with_ours() {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(b"interop", &salt)
        .unwrap()
        .to_string();

    assert!(compare_password_and_hash("interop", &hash).unwrap());
    assert!(!compare_password_and_hash("other", &hash).unwrap());
}
