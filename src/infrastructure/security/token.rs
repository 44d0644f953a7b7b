// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, TokenSubject, VerifiedToken},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use crate::infrastructure::security::claims::parse_claims;
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::{DateTime, Utc};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

const TOKEN_CODE: &str = r"
    user({uid}, {uname});
    issued_at({issued});
    expires_at({exp});
    check if time($now), $now >= {issued};
    check if time($now), $now <= {exp};
";

/// Ed25519-signed biscuit bearer tokens carrying only the user identity and
/// a validity window.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenManager {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
        })
    }

    /// Fresh random root key, for development when no key is configured.
    pub fn ephemeral(ttl: Duration) -> Self {
        let keypair = KeyPair::new();
        let public = keypair.public();
        Self {
            root: Arc::new(keypair),
            public,
            ttl,
        }
    }

    fn build_params(
        subject: &TokenSubject,
        issued_at: SystemTime,
        expires_at: SystemTime,
    ) -> HashMap<String, Term> {
        HashMap::from([
            ("uid".to_string(), i64::from(subject.user_id).into()),
            ("uname".to_string(), subject.username.clone().into()),
            ("issued".to_string(), issued_at.into()),
            ("exp".to_string(), expires_at.into()),
        ])
    }
}

fn infra(err: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::infrastructure(err.to_string())
}

fn rejected(err: impl std::fmt::Display) -> ApplicationError {
    tracing::debug!(error = %err, "token rejected");
    ApplicationError::unauthorized("invalid or expired token")
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = SystemTime::now();
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;
        let params = Self::build_params(&subject, issued_at, expires_at);

        let token = Biscuit::builder()
            .code_with_params(TOKEN_CODE, params, HashMap::new())
            .map_err(infra)?
            .build(self.root.as_ref())
            .map_err(infra)?;
        let serialized = token.seal().map_err(infra)?.to_base64().map_err(infra)?;

        Ok(AuthTokenDto {
            token: serialized,
            token_type: "Bearer".to_string(),
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
            expires_in: i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX),
        })
    }

    async fn verify(&self, token: &str) -> ApplicationResult<VerifiedToken> {
        let biscuit = Biscuit::from_base64(token, self.public).map_err(rejected)?;

        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code("allow if user($id, $name);")
            .map_err(infra)?
            .build(&biscuit)
            .map_err(rejected)?;
        authorizer.authorize().map_err(rejected)?;

        let view = biscuit.authorizer().map_err(rejected)?;
        let (facts, _, _, _) = view.dump();
        parse_claims(facts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserId;

    fn subject() -> TokenSubject {
        TokenSubject {
            user_id: UserId(42),
            username: "jane".into(),
        }
    }

    #[tokio::test]
    async fn issued_token_verifies() {
        let manager = BiscuitTokenManager::ephemeral(Duration::from_secs(600));
        let token = manager.issue(subject()).await.unwrap();
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 600);

        let verified = manager.verify(&token.token).await.unwrap();
        assert_eq!(verified.subject, subject());
    }

    #[tokio::test]
    async fn foreign_or_garbage_tokens_are_rejected() {
        let issuer = BiscuitTokenManager::ephemeral(Duration::from_secs(600));
        let other = BiscuitTokenManager::ephemeral(Duration::from_secs(600));
        let token = issuer.issue(subject()).await.unwrap();

        assert!(matches!(
            other.verify(&token.token).await,
            Err(ApplicationError::Unauthorized(_))
        ));
        assert!(matches!(
            issuer.verify("not-a-token").await,
            Err(ApplicationError::Unauthorized(_))
        ));
    }
}
