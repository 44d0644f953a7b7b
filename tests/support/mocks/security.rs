// tests/support/mocks/security.rs
use async_trait::async_trait;
use bronews::application::{
    ApplicationResult,
    dto::{AuthTokenDto, TokenSubject, VerifiedToken},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use bronews::domain::user::UserId;
use chrono::Duration;

const TOKEN_PREFIX: &str = "user-";
const HASH_PREFIX: &str = "plain:";

/// Bearer token the dummy manager accepts for the given user id.
pub fn token_for(user_id: i64) -> String {
    format!("{TOKEN_PREFIX}{user_id}")
}

/* -------------------------------- TokenManager -------------------------------- */

/// Issues `user-{id}` tokens valid for one hour from the fixed clock.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = super::time::fixed_now();
        Ok(AuthTokenDto {
            token: token_for(subject.user_id.0),
            token_type: "Bearer".into(),
            issued_at,
            expires_at: issued_at + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn verify(&self, token: &str) -> ApplicationResult<VerifiedToken> {
        let user_id = token
            .strip_prefix(TOKEN_PREFIX)
            .and_then(|raw| raw.parse::<i64>().ok())
            .and_then(|raw| UserId::new(raw).ok())
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))?;
        let issued_at = super::time::fixed_now();
        Ok(VerifiedToken {
            subject: TokenSubject {
                user_id,
                username: String::new(),
            },
            issued_at,
            expires_at: issued_at + Duration::hours(1),
        })
    }
}

/* -------------------------------- PasswordHasher -------------------------------- */

/// Stores passwords with a visible prefix so tests can assert on them.
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("{HASH_PREFIX}{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        match expected_hash.strip_prefix(HASH_PREFIX) {
            Some(stored) if stored == password => Ok(()),
            _ => Err(ApplicationError::unauthorized("invalid credentials")),
        }
    }
}
