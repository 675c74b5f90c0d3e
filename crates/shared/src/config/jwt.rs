use crate::{abstract_trait::JwtServiceTrait, errors::ServiceError};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(sub: &str, iat: i64, exp: i64) -> Self {
        Claims {
            sub: Some(sub.to_string()),
            exp,
            iat,
        }
    }
}

#[derive(Clone)]
pub struct JwtConfig {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl JwtConfig {
    pub fn new(jwt_secret: &str, ttl: Duration) -> Self {
        JwtConfig {
            encoding_key: EncodingKey::from_secret(jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn generate_token_at(
        &self,
        subject: &str,
        now: DateTime<Utc>,
    ) -> Result<String, ServiceError> {
        let claims = Claims::new(subject, now.timestamp(), (now + self.ttl).timestamp());
        self.encode_claims(&claims)
    }

    pub fn encode_claims(&self, claims: &Claims) -> Result<String, ServiceError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(ServiceError::Jwt)
    }

    /// Expiry is checked against `now` with zero leeway rather than by jsonwebtoken.
    pub fn verify_token_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, ServiceError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(ServiceError::Jwt)?;

        if token_data.claims.exp <= now.timestamp() {
            return Err(ServiceError::TokenExpired);
        }

        match token_data.claims.sub {
            Some(sub) if !sub.is_empty() => Ok(sub),
            _ => Err(ServiceError::InvalidToken),
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, subject: &str) -> Result<String, ServiceError> {
        self.generate_token_at(subject, Utc::now())
    }

    fn verify_token(&self, token: &str) -> Result<String, ServiceError> {
        self.verify_token_at(token, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> JwtConfig {
        JwtConfig::new("test-secret", Duration::minutes(60))
    }

    #[test]
    fn token_round_trips_subject() {
        let jwt = config();
        let token = jwt.generate_token("ana@example.com").unwrap();
        assert_eq!(jwt.verify_token(&token).unwrap(), "ana@example.com");
    }

    #[test]
    fn token_valid_before_expiry_and_rejected_after() {
        let jwt = config();
        let issued = Utc::now();
        let token = jwt.generate_token_at("ana@example.com", issued).unwrap();

        let at_59 = jwt.verify_token_at(&token, issued + Duration::minutes(59));
        assert_eq!(at_59.unwrap(), "ana@example.com");

        let at_61 = jwt.verify_token_at(&token, issued + Duration::minutes(61));
        assert!(matches!(at_61, Err(ServiceError::TokenExpired)));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = JwtConfig::new("other-secret", Duration::minutes(60))
            .generate_token("ana@example.com")
            .unwrap();

        assert!(matches!(
            config().verify_token(&token),
            Err(ServiceError::Jwt(_))
        ));
    }

    #[test]
    fn token_without_subject_is_rejected() {
        let jwt = config();
        let now = Utc::now();
        let claims = Claims {
            sub: None,
            iat: now.timestamp(),
            exp: (now + Duration::minutes(5)).timestamp(),
        };
        let token = jwt.encode_claims(&claims).unwrap();

        assert!(matches!(
            jwt.verify_token(&token),
            Err(ServiceError::InvalidToken)
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(config().verify_token("not-a-jwt").is_err());
    }
}
