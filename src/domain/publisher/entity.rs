// src/domain/publisher/entity.rs
use crate::domain::publisher::value_objects::{PublisherId, PublisherName};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Publisher {
    pub id: PublisherId,
    pub name: PublisherName,
    pub admin_id: UserId,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPublisher {
    pub name: PublisherName,
    pub admin_id: UserId,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}
