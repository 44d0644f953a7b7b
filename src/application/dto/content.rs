use crate::domain::content::{Content, ContentKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{publishers::PublisherDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContentDto {
    pub id: i64,
    pub kind: ContentKind,
    pub title: String,
    pub content: Option<String>,
    pub author: i64,
    pub publisher: Option<i64>,
    pub is_approved: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Content> for ContentDto {
    fn from(content: Content) -> Self {
        Self {
            id: content.id.into(),
            kind: content.kind,
            title: content.title.into_inner(),
            content: content.body.into_inner(),
            author: content.author_id.into(),
            publisher: content.publisher_id.map(i64::from),
            is_approved: content.is_approved,
            created_at: content.created_at,
            updated_at: content.updated_at,
        }
    }
}

/// Wire shape of `GET /api/sub-articles/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FeedArticleDto {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub author: i64,
    pub publisher: Option<i64>,
    pub is_approved: bool,
}

impl From<Content> for FeedArticleDto {
    fn from(content: Content) -> Self {
        Self {
            id: content.id.into(),
            title: content.title.into_inner(),
            content: content.body.into_inner(),
            author: content.author_id.into(),
            publisher: content.publisher_id.map(i64::from),
            is_approved: content.is_approved,
        }
    }
}

/// Result of one notification channel after an approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sent,
    Skipped,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApprovalReportDto {
    pub content: ContentDto,
    /// False when the item had already been approved; nothing was sent then.
    pub newly_approved: bool,
    pub email: DeliveryStatus,
    pub social: DeliveryStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JournalistDashboardDto {
    pub articles: Vec<ContentDto>,
    pub newsletters: Vec<ContentDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EditorDashboardDto {
    pub pending_articles: Vec<ContentDto>,
    pub pending_newsletters: Vec<ContentDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminDashboardDto {
    pub publishers: Vec<PublisherDto>,
}
