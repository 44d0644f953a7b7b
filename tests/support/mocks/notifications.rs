// tests/support/mocks/notifications.rs
use async_trait::async_trait;
use bronews::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::notification::{EmailMessage, EmailSender, SocialPoster},
};
use std::sync::Mutex;

/// Captures every delivered email. With `failing` set each attempt errors
/// and is only counted.
#[derive(Default)]
pub struct RecordingEmailSender {
    failing: bool,
    attempts: Mutex<u32>,
    sent: Mutex<Vec<EmailMessage>>,
}

impl RecordingEmailSender {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().expect("email mutex poisoned").clone()
    }

    pub fn attempts(&self) -> u32 {
        *self.attempts.lock().expect("email mutex poisoned")
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send(&self, message: &EmailMessage) -> ApplicationResult<()> {
        *self.attempts.lock().expect("email mutex poisoned") += 1;
        if self.failing {
            return Err(ApplicationError::infrastructure("smtp unavailable"));
        }
        self.sent
            .lock()
            .expect("email mutex poisoned")
            .push(message.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingSocialPoster {
    failing: bool,
    attempts: Mutex<u32>,
    posts: Mutex<Vec<String>>,
}

impl RecordingSocialPoster {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn posts(&self) -> Vec<String> {
        self.posts.lock().expect("social mutex poisoned").clone()
    }

    pub fn attempts(&self) -> u32 {
        *self.attempts.lock().expect("social mutex poisoned")
    }
}

#[async_trait]
impl SocialPoster for RecordingSocialPoster {
    async fn post(&self, text: &str) -> ApplicationResult<()> {
        *self.attempts.lock().expect("social mutex poisoned") += 1;
        if self.failing {
            return Err(ApplicationError::infrastructure("social api rejected the post"));
        }
        self.posts
            .lock()
            .expect("social mutex poisoned")
            .push(text.to_string());
        Ok(())
    }
}
