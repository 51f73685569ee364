use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod password;

/// Identity payload carried inside the token: `{ "user": { "id": ... } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUser {
    pub id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user: TokenUser,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user_id: Uuid, expiry_hours: u64) -> Self {
        let now = Utc::now();
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            user: TokenUser { id: user_id },
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug)]
pub enum JwtError {
    TokenGeneration(String),
    InvalidToken,
    InvalidSecret,
}

impl std::fmt::Display for JwtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JwtError::TokenGeneration(msg) => write!(f, "JWT generation error: {}", msg),
            JwtError::InvalidToken => write!(f, "Invalid JWT token"),
            JwtError::InvalidSecret => write!(f, "Invalid JWT secret"),
        }
    }
}

impl std::error::Error for JwtError {}

/// Sign a token embedding the given user id.
pub fn generate_jwt(secret: &str, claims: Claims) -> Result<String, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let header = Header::default();

    encode(&header, &claims, &encoding_key)
        .map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

/// Verify a token's signature and decode its claims. All failure modes
/// (malformed, expired, bad signature) collapse into `InvalidToken`.
pub fn verify_jwt(secret: &str, token: &str) -> Result<Claims, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    let token_data =
        decode::<Claims>(token, &decoding_key, &validation).map_err(|_| JwtError::InvalidToken)?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn sign_and_verify_round_trip() {
        let user_id = Uuid::new_v4();
        let token = generate_jwt(SECRET, Claims::new(user_id, 24)).unwrap();

        let claims = verify_jwt(SECRET, &token).unwrap();
        assert_eq!(claims.user.id, user_id);
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let token = generate_jwt(SECRET, Claims::new(Uuid::new_v4(), 24)).unwrap();
        assert!(matches!(
            verify_jwt("other-secret", &token),
            Err(JwtError::InvalidToken)
        ));
    }

    #[test]
    fn verify_rejects_garbage() {
        assert!(matches!(
            verify_jwt(SECRET, "not.a.token"),
            Err(JwtError::InvalidToken)
        ));
    }

    #[test]
    fn empty_secret_refuses_to_sign() {
        assert!(matches!(
            generate_jwt("", Claims::new(Uuid::new_v4(), 24)),
            Err(JwtError::InvalidSecret)
        ));
    }
}
