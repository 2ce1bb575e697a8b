//! Password hashing
//!
//! bcrypt with a random salt per hash. `verify_password` never errors: a
//! mismatch and an unreadable stored hash both come back as `false`.
//!
//! bcrypt ignores everything past 72 bytes, so longer passwords are refused
//! at hashing time and never match at verification time.

use crate::backend::auth::credentials::CredentialError;

/// Longest password bcrypt hashes without truncation
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Hash `password` at the given work factor
pub fn hash_password(password: &str, cost: u32) -> Result<String, CredentialError> {
    if password.is_empty() {
        return Err(CredentialError::EmptyPassword);
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(CredentialError::PasswordTooLong(password.len()));
    }
    Ok(bcrypt::hash(password, cost)?)
}

/// True iff `password` matches `hash`
pub fn verify_password(password: &str, hash: &str) -> bool {
    if password.len() > MAX_PASSWORD_BYTES {
        return false;
    }
    match bcrypt::verify(password, hash) {
        Ok(valid) => valid,
        Err(e) => {
            tracing::warn!("Unreadable password hash: {}", e);
            false
        }
    }
}
