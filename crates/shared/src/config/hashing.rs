use crate::{abstract_trait::HashingTrait, errors::ServiceError};
use async_trait::async_trait;
use bcrypt::{DEFAULT_COST, hash, verify};

#[derive(Clone)]
pub struct Hashing {
    cost: u32,
}

impl Hashing {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for Hashing {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

#[async_trait]
impl HashingTrait for Hashing {
    async fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
        let hashed = hash(password, self.cost).map_err(ServiceError::Bcrypt)?;
        Ok(hashed)
    }

    async fn compare_password(
        &self,
        hashed_password: &str,
        password: &str,
    ) -> Result<(), ServiceError> {
        verify(password, hashed_password)
            .map_err(ServiceError::Bcrypt)
            .and_then(|is_valid| {
                if is_valid {
                    Ok(())
                } else {
                    Err(ServiceError::InvalidCredentials)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_is_salted_and_verifiable() {
        let hashing = Hashing::new(4);

        let first = hashing.hash_password("correct horse").await.unwrap();
        let second = hashing.hash_password("correct horse").await.unwrap();

        assert_ne!(first, second);
        assert!(!first.contains("correct horse"));
        assert!(hashing.compare_password(&first, "correct horse").await.is_ok());
        assert!(hashing.compare_password(&second, "correct horse").await.is_ok());
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let hashing = Hashing::new(4);
        let digest = hashing.hash_password("correct horse").await.unwrap();

        let result = hashing.compare_password(&digest, "battery staple").await;
        assert!(matches!(result, Err(ServiceError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn work_factor_is_embedded_in_digest() {
        let digest = Hashing::new(5).hash_password("pw").await.unwrap();
        assert!(digest.starts_with("$2b$05$"));
    }
}
