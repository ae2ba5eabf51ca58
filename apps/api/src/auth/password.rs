use anyhow::{anyhow, Result};
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use uuid::Uuid;

/// Hashes `plain` with Argon2id (default parameters) and a fresh random salt.
/// The result is a PHC string such as `$argon2id$v=19$m=19456,t=2,p=1$...`.
///
/// CPU- and memory-heavy: call from `spawn_blocking`.
pub fn hash_password(plain: &str) -> Result<String> {
    let salt = SaltString::encode_b64(Uuid::new_v4().as_bytes())
        .map_err(|e| anyhow!("Could not encode password salt: {e}"))?;
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| anyhow!("Password hashing failed: {e}"))?;
    Ok(hash.to_string())
}

/// Checks `plain` against a stored PHC string. Values that do not parse as a
/// PHC string (plain text, legacy digests) never verify.
pub fn verify_password(plain: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed) => Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
