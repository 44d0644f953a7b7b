// src/domain/subscription/mod.rs
use crate::domain::errors::DomainResult;
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Something a reader can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscriptionTarget {
    Journalist(UserId),
    Publisher(PublisherId),
}

impl SubscriptionTarget {
    pub fn kind(&self) -> SubscriptionKind {
        match self {
            SubscriptionTarget::Journalist(_) => SubscriptionKind::Journalist,
            SubscriptionTarget::Publisher(_) => SubscriptionKind::Publisher,
        }
    }

    pub fn raw_id(&self) -> i64 {
        match self {
            SubscriptionTarget::Journalist(id) => id.0,
            SubscriptionTarget::Publisher(id) => id.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionKind {
    Journalist,
    Publisher,
}

/// Join-table access for reader subscriptions, independent of the storage
/// engine. Adding an existing pair and removing a missing one are no-ops.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn add_subscription(&self, reader: UserId, target: SubscriptionTarget)
    -> DomainResult<()>;

    async fn remove_subscription(
        &self,
        reader: UserId,
        target: SubscriptionTarget,
    ) -> DomainResult<()>;

    async fn is_subscribed(&self, reader: UserId, target: SubscriptionTarget) -> DomainResult<bool>;

    /// Targets of the given kind the reader follows, in subscription order.
    async fn list_subscriptions(
        &self,
        reader: UserId,
        kind: SubscriptionKind,
    ) -> DomainResult<Vec<SubscriptionTarget>>;

    /// Readers following the target.
    async fn list_subscribers(&self, target: SubscriptionTarget) -> DomainResult<Vec<UserId>>;

    /// Drop every subscription of the reader, of both kinds.
    async fn clear_subscriptions(&self, reader: UserId) -> DomainResult<()>;
}
