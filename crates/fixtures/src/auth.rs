//! Password hashing for fixture credentials.
//!
//! Uses bcrypt so that hashes are accepted by the application's login path.

pub use bcrypt::BcryptError;

pub fn hash_password(password: &str, cost: u32) -> Result<String, BcryptError> {
    bcrypt::hash(password, cost)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(password, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verifies() {
        let hash = hash_password("TestBusiness123!", 4).unwrap();

        assert_ne!(hash, "TestBusiness123!");
        assert!(verify_password("TestBusiness123!", &hash).unwrap());
        assert!(!verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_hash_is_salted() {
        let a = hash_password("TestBusiness123!", 4).unwrap();
        let b = hash_password("TestBusiness123!", 4).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_cost_is_encoded() {
        let hash = hash_password("TestBusiness123!", 10).unwrap();
        assert!(hash.starts_with("$2b$10$"));
    }

    #[test]
    fn test_invalid_cost_rejected() {
        assert!(hash_password("TestBusiness123!", 99).is_err());
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        assert!(verify_password("TestBusiness123!", "not-a-hash").is_err());
    }
}
