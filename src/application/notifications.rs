// src/application/notifications.rs
use std::{future::Future, sync::Arc, time::Duration};

use tracing::{info, warn};

use crate::application::{
    dto::DeliveryStatus,
    error::ApplicationResult,
    ports::notification::{EmailMessage, EmailSender, SocialPoster},
};

/// Bounded retry for outbound notifications. The wait before attempt `n + 1`
/// is `backoff * n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_millis(250),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationOutcome {
    pub email: DeliveryStatus,
    pub social: DeliveryStatus,
}

impl NotificationOutcome {
    pub fn skipped() -> Self {
        Self {
            email: DeliveryStatus::Skipped,
            social: DeliveryStatus::Skipped,
        }
    }

    pub fn failed() -> Self {
        Self {
            email: DeliveryStatus::Failed,
            social: DeliveryStatus::Failed,
        }
    }
}

pub fn approval_subject(title: &str) -> String {
    format!("This article has been approved: {title}")
}

pub fn announcement_text(title: &str, author: &str) -> String {
    format!("Check out: {title} - Written by {author}")
}

/// Fans an approved article out to the author's subscribers and to the
/// social account. Every channel is fail-soft: errors are retried, logged and
/// reported, never returned.
pub struct ApprovalNotifier {
    email_sender: Arc<dyn EmailSender>,
    social_poster: Arc<dyn SocialPoster>,
    from_address: String,
    retry: RetryPolicy,
}

impl ApprovalNotifier {
    pub fn new(
        email_sender: Arc<dyn EmailSender>,
        social_poster: Arc<dyn SocialPoster>,
        from_address: impl Into<String>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            email_sender,
            social_poster,
            from_address: from_address.into(),
            retry,
        }
    }

    /// One batch email when `recipients` is non-empty, then one social post
    /// whatever the email outcome was.
    pub async fn article_approved(
        &self,
        title: &str,
        author: &str,
        recipients: Vec<String>,
    ) -> NotificationOutcome {
        let text = announcement_text(title, author);

        let email = if recipients.is_empty() {
            DeliveryStatus::Skipped
        } else {
            let message = EmailMessage {
                subject: approval_subject(title),
                body: text.clone(),
                from: self.from_address.clone(),
                bcc: recipients,
            };
            self.deliver("email", || self.email_sender.send(&message))
                .await
        };

        let social = self.post_announcement(&text).await;

        NotificationOutcome { email, social }
    }

    /// Only the social post, for when the subscriber list is unavailable.
    pub async fn announce(&self, title: &str, author: &str) -> DeliveryStatus {
        self.post_announcement(&announcement_text(title, author)).await
    }

    async fn post_announcement(&self, text: &str) -> DeliveryStatus {
        self.deliver("social", || self.social_poster.post(text)).await
    }

    async fn deliver<F, Fut>(&self, channel: &'static str, mut attempt_once: F) -> DeliveryStatus
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ApplicationResult<()>>,
    {
        let max_attempts = self.retry.max_attempts.max(1);
        for attempt in 1..=max_attempts {
            match attempt_once().await {
                Ok(()) => {
                    info!(channel, attempt, "approval notification delivered");
                    return DeliveryStatus::Sent;
                }
                Err(err) if attempt < max_attempts => {
                    warn!(channel, attempt, error = %err, "approval notification failed, retrying");
                    if !self.retry.backoff.is_zero() {
                        tokio::time::sleep(self.retry.backoff * attempt).await;
                    }
                }
                Err(err) => {
                    warn!(channel, attempt, error = %err, "approval notification failed, giving up");
                }
            }
        }
        DeliveryStatus::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ApplicationError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FlakyEmail {
        failures_left: Mutex<u32>,
        sent: Mutex<Vec<EmailMessage>>,
    }

    #[async_trait]
    impl EmailSender for FlakyEmail {
        async fn send(&self, message: &EmailMessage) -> ApplicationResult<()> {
            let mut left = self.failures_left.lock().unwrap();
            if *left > 0 {
                *left -= 1;
                return Err(ApplicationError::infrastructure("smtp down"));
            }
            self.sent.lock().unwrap().push(message.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct BrokenSocial {
        calls: Mutex<u32>,
    }

    #[async_trait]
    impl SocialPoster for BrokenSocial {
        async fn post(&self, _text: &str) -> ApplicationResult<()> {
            *self.calls.lock().unwrap() += 1;
            Err(ApplicationError::infrastructure("api rejected"))
        }
    }

    fn policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            backoff: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn retries_email_then_reports_each_channel() {
        let email = Arc::new(FlakyEmail {
            failures_left: Mutex::new(1),
            ..FlakyEmail::default()
        });
        let social = Arc::new(BrokenSocial::default());
        let notifier = ApprovalNotifier::new(
            email.clone(),
            social.clone(),
            "news@example.com",
            policy(3),
        );

        let outcome = notifier
            .article_approved("A1", "j", vec!["r@example.com".into()])
            .await;

        assert_eq!(outcome.email, DeliveryStatus::Sent);
        assert_eq!(outcome.social, DeliveryStatus::Failed);
        assert_eq!(*social.calls.lock().unwrap(), 3);

        let sent = email.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "This article has been approved: A1");
        assert_eq!(sent[0].body, "Check out: A1 - Written by j");
        assert_eq!(sent[0].from, "news@example.com");
        assert_eq!(sent[0].bcc, vec!["r@example.com".to_string()]);
    }

    #[tokio::test]
    async fn no_recipients_skips_email_but_still_posts() {
        let email = Arc::new(FlakyEmail::default());
        let social = Arc::new(BrokenSocial::default());
        let notifier = ApprovalNotifier::new(email.clone(), social.clone(), "x@y.z", policy(1));

        let outcome = notifier.article_approved("A1", "j", Vec::new()).await;

        assert_eq!(outcome.email, DeliveryStatus::Skipped);
        assert_eq!(outcome.social, DeliveryStatus::Failed);
        assert!(email.sent.lock().unwrap().is_empty());
        assert_eq!(*social.calls.lock().unwrap(), 1);
    }
}
