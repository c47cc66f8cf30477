//! Admin password hashing.
//!
//! Hashes are Argon2id PHC strings (`$argon2id$v=19$...`) with a fresh
//! [`OsRng`] salt, so the stored value carries its own parameters.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Well-formed hash with default Argon2id parameters that matches no password.
///
/// Login verifies against it when the username is unknown, so that branch
/// costs the same Argon2 work as a wrong password.
pub const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$PooX9SYuSowrlkD8NEumDw$4uxUKLbJubqjnPsPYJOSyFy01b+Aggil1sa8d0IopPA";

/// Hash a plaintext password, returning the PHC string to store.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// Check a login attempt against a stored hash.
///
/// A mismatch is `Ok(false)`; a malformed stored hash is an error.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let stored = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &stored) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}
