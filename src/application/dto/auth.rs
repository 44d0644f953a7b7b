use crate::domain::{
    publisher::PublisherId,
    user::{Capability, Role, User, UserId},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthTokenDto {
    pub token: String,
    pub token_type: String,
    #[serde(with = "serde_time")]
    pub issued_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

/// Identity carried inside a signed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSubject {
    pub user_id: UserId,
    pub username: String,
}

#[derive(Debug, Clone)]
pub struct VerifiedToken {
    pub subject: TokenSubject,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// The acting user for one request, built from the current user row rather
/// than from token claims.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub role: Role,
    pub publisher_id: Option<PublisherId>,
    pub capabilities: HashSet<Capability>,
    pub expires_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    pub fn from_user(user: &User, expires_at: DateTime<Utc>) -> Self {
        let role = user.role();
        Self {
            id: user.id,
            username: user.username.to_string(),
            role,
            publisher_id: user.profile.publisher_id,
            capabilities: role.default_capabilities(),
            expires_at,
        }
    }

    pub fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches(resource, action))
    }

    pub fn is(&self, role: Role) -> bool {
        self.role == role
    }
}
