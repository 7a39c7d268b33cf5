use chrono::{Duration, Utc};
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

const TOKEN_TYPE_ACCESS: &str = "access";
const TOKEN_TYPE_REFRESH: &str = "refresh";

/// Claims carried by both access and refresh tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
    /// Random per token, so two tokens minted in the same second still hash
    /// differently in `refresh_tokens`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    /// "access" or "refresh".
    #[serde(default)]
    pub typ: String,
}

/// SHA-256 of a raw token, hex encoded. Only this hash is stored.
pub fn hash_token(raw_token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw_token.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn secret_from(value: Option<String>) -> Result<String, JwtError> {
    match value {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ErrorKind::InvalidKeyFormat.into()),
    }
}

/// `JWT_SECRET`, or an error when it is unset or empty.
fn jwt_secret() -> Result<String, JwtError> {
    let secret = secret_from(std::env::var("JWT_SECRET").ok());
    if secret.is_err() {
        tracing::error!("JWT_SECRET is not set; tokens can be neither issued nor accepted");
    }
    secret
}

pub fn access_token_expiry_minutes() -> i64 {
    std::env::var("JWT_ACCESS_TOKEN_EXPIRY_MINUTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(15)
}

pub fn refresh_token_expiry_days() -> i64 {
    std::env::var("JWT_REFRESH_TOKEN_EXPIRY_DAYS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(7)
}

fn sign(claims: &Claims) -> Result<String, JwtError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(jwt_secret()?.as_bytes()),
    )
}

fn decode_claims(token: &str) -> Result<Claims, JwtError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret()?.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

pub fn create_access_token(user_id: i64, email: &str, role: &str) -> Result<String, JwtError> {
    let now = Utc::now();
    sign(&Claims {
        sub: user_id,
        email: email.to_string(),
        role: role.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::minutes(access_token_expiry_minutes())).timestamp(),
        jti: Some(uuid::Uuid::new_v4().to_string()),
        typ: TOKEN_TYPE_ACCESS.to_string(),
    })
}

/// Mint a refresh token and return it with its expiry, which is stored
/// next to the token hash.
pub fn create_refresh_token(
    user_id: i64,
    email: &str,
    role: &str,
) -> Result<(String, chrono::DateTime<Utc>), JwtError> {
    let now = Utc::now();
    let expires_at = now + Duration::days(refresh_token_expiry_days());
    let token = sign(&Claims {
        sub: user_id,
        email: email.to_string(),
        role: role.to_string(),
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
        jti: Some(uuid::Uuid::new_v4().to_string()),
        typ: TOKEN_TYPE_REFRESH.to_string(),
    })?;
    Ok((token, expires_at))
}

/// Accepts only tokens minted as access tokens.
pub fn validate_access_token(token: &str) -> Result<Claims, JwtError> {
    let claims = decode_claims(token)?;
    if claims.typ != TOKEN_TYPE_ACCESS {
        return Err(ErrorKind::InvalidToken.into());
    }
    Ok(claims)
}

/// Accepts only tokens minted as refresh tokens.
pub fn validate_refresh_token(token: &str) -> Result<Claims, JwtError> {
    let claims = decode_claims(token)?;
    if claims.typ != TOKEN_TYPE_REFRESH {
        return Err(ErrorKind::InvalidToken.into());
    }
    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_secret() {
        std::env::set_var("JWT_SECRET", "test-secret-key-for-jwt-unit-tests");
    }

    #[test]
    fn access_token_round_trips_claims() {
        setup_test_secret();
        let token = create_access_token(42, "amara@example.com", "student").unwrap();
        let claims = validate_access_token(&token).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.email, "amara@example.com");
        assert_eq!(claims.role, "student");
        assert_eq!(claims.typ, TOKEN_TYPE_ACCESS);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_rejected() {
        setup_test_secret();
        let now = Utc::now();
        let token = sign(&Claims {
            sub: 1,
            email: "old@example.com".to_string(),
            role: "student".to_string(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
            jti: None,
            typ: TOKEN_TYPE_ACCESS.to_string(),
        })
        .unwrap();

        assert!(validate_access_token(&token).is_err());
    }

    #[test]
    fn garbage_rejected() {
        setup_test_secret();
        assert!(validate_access_token("not.a.valid.jwt").is_err());
        assert!(validate_access_token("").is_err());
    }

    #[test]
    fn token_without_type_is_not_an_access_token() {
        setup_test_secret();
        let now = Utc::now();
        let token = sign(&Claims {
            sub: 1,
            email: "a@b.com".to_string(),
            role: "student".to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(5)).timestamp(),
            jti: None,
            typ: String::new(),
        })
        .unwrap();
        assert!(validate_access_token(&token).is_err());
    }

    #[test]
    fn refresh_outlives_access() {
        setup_test_secret();
        let access = create_access_token(1, "a@b.com", "student").unwrap();
        let (refresh, expires_at) = create_refresh_token(1, "a@b.com", "student").unwrap();

        let access_claims = validate_access_token(&access).unwrap();
        let refresh_claims = validate_refresh_token(&refresh).unwrap();

        assert!(refresh_claims.exp > access_claims.exp);
        assert_eq!(refresh_claims.exp, expires_at.timestamp());
    }

    #[test]
    fn token_types_are_not_interchangeable() {
        setup_test_secret();
        let access = create_access_token(1, "a@b.com", "student").unwrap();
        let (refresh, _) = create_refresh_token(1, "a@b.com", "student").unwrap();
        assert!(validate_access_token(&refresh).is_err());
        assert!(validate_refresh_token(&access).is_err());
    }

    #[test]
    fn missing_or_empty_secret_is_an_error() {
        assert!(secret_from(None).is_err());
        assert!(secret_from(Some(String::new())).is_err());
        assert_eq!(secret_from(Some("k".into())).unwrap(), "k");
    }

    #[test]
    fn hash_token_is_stable_hex() {
        let hash = hash_token("eyJhbGciOiJIUzI1NiJ9.payload.signature");
        assert_eq!(hash, hash_token("eyJhbGciOiJIUzI1NiJ9.payload.signature"));
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(hash, hash_token("other"));
    }
}
