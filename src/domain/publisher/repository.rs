use crate::domain::errors::DomainResult;
use crate::domain::publisher::{
    entity::{NewPublisher, Publisher},
    value_objects::PublisherId,
};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait PublisherRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the name is already taken.
    async fn insert(&self, publisher: NewPublisher) -> DomainResult<Publisher>;
    async fn find_by_id(&self, id: PublisherId) -> DomainResult<Option<Publisher>>;
    async fn find_by_ids(&self, ids: &[PublisherId]) -> DomainResult<Vec<Publisher>>;
    async fn list(&self) -> DomainResult<Vec<Publisher>>;
    async fn list_by_admin(&self, admin_id: UserId) -> DomainResult<Vec<Publisher>>;
}
