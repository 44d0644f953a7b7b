use crate::domain::user::{Role, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{publishers::PublisherSummaryDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub role: Role,
    pub publisher_id: Option<i64>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.to_string(),
            email: user.email.map(String::from),
            role: user.profile.role,
            publisher_id: user.profile.publisher_id.map(i64::from),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserSummaryDto {
    pub id: i64,
    pub username: String,
}

impl From<&User> for UserSummaryDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.to_string(),
        }
    }
}

/// The caller's own account with both subscription sets resolved.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub user: UserDto,
    pub subscribed_journalists: Vec<UserSummaryDto>,
    pub subscribed_publishers: Vec<PublisherSummaryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JournalistDetailDto {
    pub journalist: UserSummaryDto,
    pub email: Option<String>,
    pub publisher: Option<PublisherSummaryDto>,
    pub is_subscribed: bool,
}
