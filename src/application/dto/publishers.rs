use crate::domain::publisher::Publisher;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{content::ContentDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublisherDto {
    pub id: i64,
    pub name: String,
    pub admin_id: i64,
    pub content: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Publisher> for PublisherDto {
    fn from(publisher: Publisher) -> Self {
        Self {
            id: publisher.id.into(),
            name: publisher.name.into_inner(),
            admin_id: publisher.admin_id.into(),
            content: publisher.content,
            created_at: publisher.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PublisherSummaryDto {
    pub id: i64,
    pub name: String,
}

impl From<&Publisher> for PublisherSummaryDto {
    fn from(publisher: &Publisher) -> Self {
        Self {
            id: publisher.id.into(),
            name: publisher.name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublisherDetailDto {
    pub publisher: PublisherDto,
    pub articles: Vec<ContentDto>,
    pub newsletters: Vec<ContentDto>,
    pub is_subscribed: bool,
}
