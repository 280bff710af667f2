use bcrypt::{hash, verify, BcryptError};

/// bcrypt cost used for admin passwords.
const BCRYPT_COST: u32 = 8;

/// Hash a password using bcrypt
///
/// # Arguments
/// * `password` - The plaintext password to hash
///
/// # Example
/// ```
/// use site_cms_utils::hash::bcrypt_hash;
///
/// let hashed = bcrypt_hash("my_password").unwrap();
/// assert!(hashed.starts_with("$2"));
/// ```
pub fn bcrypt_hash(password: &str) -> Result<String, BcryptError> {
    hash(password.as_bytes(), BCRYPT_COST)
}

/// Compare a plaintext password against a hashed password
///
/// A malformed hash never matches.
///
/// # Example
/// ```
/// use site_cms_utils::hash::{bcrypt_hash, bcrypt_check};
///
/// let hash = bcrypt_hash("my_password").unwrap();
/// assert!(bcrypt_check("my_password", &hash));
/// assert!(!bcrypt_check("wrong_password", &hash));
/// ```
pub fn bcrypt_check(password: &str, hash: &str) -> bool {
    verify(password.as_bytes(), hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcrypt_hash_and_check() {
        let password = "test_password";
        let hash = bcrypt_hash(password).unwrap();

        assert!(bcrypt_check(password, &hash));
        assert!(!bcrypt_check("wrong_password", &hash));
    }

    #[test]
    fn test_bcrypt_check_rejects_garbage_hash() {
        assert!(!bcrypt_check("anything", "not-a-bcrypt-hash"));
    }
}
