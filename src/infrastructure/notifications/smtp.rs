// src/infrastructure/notifications/smtp.rs
use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::notification::{EmailMessage, EmailSender},
};

const SMTP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Sends through one pooled STARTTLS relay connection.
pub struct SmtpEmailSender {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailSender {
    pub fn new(settings: &SmtpSettings) -> ApplicationResult<Self> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
            .map_err(|err| {
                ApplicationError::infrastructure(format!("failed to create SMTP transport: {err}"))
            })?
            .port(settings.port)
            .timeout(Some(SMTP_TIMEOUT));

        if let (Some(username), Some(password)) = (&settings.username, &settings.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            mailer: builder.build(),
        })
    }
}

fn mailbox(address: &str) -> ApplicationResult<Mailbox> {
    address
        .parse()
        .map_err(|err| ApplicationError::validation(format!("invalid address {address}: {err}")))
}

/// The sender is also the visible recipient; subscribers only appear as Bcc.
pub(super) fn build_message(message: &EmailMessage) -> ApplicationResult<Message> {
    let from = mailbox(&message.from)?;
    let mut builder = Message::builder()
        .from(from.clone())
        .to(from)
        .subject(message.subject.clone())
        .header(ContentType::TEXT_PLAIN);

    for recipient in &message.bcc {
        match mailbox(recipient) {
            Ok(mb) => builder = builder.bcc(mb),
            Err(err) => tracing::warn!(error = %err, "skipping undeliverable subscriber address"),
        }
    }

    builder
        .body(message.body.clone())
        .map_err(|err| ApplicationError::infrastructure(format!("failed to build email: {err}")))
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, message: &EmailMessage) -> ApplicationResult<()> {
        let email = build_message(message)?;
        self.mailer
            .send(email)
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("failed to send email: {err}")))?;
        tracing::info!(recipients = message.bcc.len(), subject = %message.subject, "email sent");
        Ok(())
    }
}
