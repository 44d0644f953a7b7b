use crate::domain::content::entity::{Content, ContentUpdate, NewContent};
use crate::domain::content::value_objects::{ContentId, ContentKind};
use crate::domain::errors::DomainResult;
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ContentWriteRepository: Send + Sync {
    async fn insert(&self, content: NewContent) -> DomainResult<Content>;
    async fn update(&self, update: ContentUpdate) -> DomainResult<Content>;
    /// Flip `is_approved` to true only if it is currently false. Returns the
    /// updated row when this call performed the transition, `None` otherwise
    /// (already approved or missing).
    async fn mark_approved(
        &self,
        kind: ContentKind,
        id: ContentId,
        at: DateTime<Utc>,
    ) -> DomainResult<Option<Content>>;
    async fn delete(&self, kind: ContentKind, id: ContentId) -> DomainResult<()>;
}

/// All list methods return rows in insertion (id) order.
#[async_trait]
pub trait ContentReadRepository: Send + Sync {
    async fn find_by_id(&self, kind: ContentKind, id: ContentId) -> DomainResult<Option<Content>>;
    async fn list(&self, kind: ContentKind) -> DomainResult<Vec<Content>>;
    async fn list_by_publisher(
        &self,
        kind: ContentKind,
        publisher_id: PublisherId,
    ) -> DomainResult<Vec<Content>>;
    async fn list_by_author(&self, kind: ContentKind, author_id: UserId)
    -> DomainResult<Vec<Content>>;
    async fn list_pending(&self, kind: ContentKind) -> DomainResult<Vec<Content>>;
    async fn list_approved_by_authors(
        &self,
        kind: ContentKind,
        authors: &[UserId],
    ) -> DomainResult<Vec<Content>>;
}
