// src/application/ports/notification.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// One outgoing message addressed to many readers at once. Recipients are
/// delivered as blind copies so subscribers never see each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub subject: String,
    pub body: String,
    pub from: String,
    pub bcc: Vec<String>,
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> ApplicationResult<()>;
}

#[async_trait]
pub trait SocialPoster: Send + Sync {
    async fn post(&self, text: &str) -> ApplicationResult<()>;
}
