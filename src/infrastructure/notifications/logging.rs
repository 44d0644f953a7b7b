// src/infrastructure/notifications/logging.rs
use async_trait::async_trait;

use crate::application::{
    error::ApplicationResult,
    ports::notification::{EmailMessage, EmailSender, SocialPoster},
};

/// Stand-in used when no SMTP relay is configured.
#[derive(Default, Clone, Copy)]
pub struct LoggingEmailSender;

#[async_trait]
impl EmailSender for LoggingEmailSender {
    async fn send(&self, message: &EmailMessage) -> ApplicationResult<()> {
        tracing::info!(
            from = %message.from,
            recipients = message.bcc.len(),
            subject = %message.subject,
            body = %message.body,
            "smtp not configured, email logged only"
        );
        Ok(())
    }
}

/// Stand-in used when no social endpoint credentials are configured.
#[derive(Default, Clone, Copy)]
pub struct LoggingSocialPoster;

#[async_trait]
impl SocialPoster for LoggingSocialPoster {
    async fn post(&self, text: &str) -> ApplicationResult<()> {
        tracing::info!(text, "social posting not configured, post logged only");
        Ok(())
    }
}
