// src/infrastructure/notifications/social.rs
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::notification::SocialPoster,
};

/// Posts `{"text": ...}` with a bearer token, the shape of the X/Twitter v2
/// create-post endpoint.
pub struct HttpSocialPoster {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl HttpSocialPoster {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> ApplicationResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
        })
    }
}

#[async_trait]
impl SocialPoster for HttpSocialPoster {
    async fn post(&self, text: &str) -> ApplicationResult<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&json!({ "text": text }))
            .send()
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("social post failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ApplicationError::infrastructure(format!(
                "social post rejected with {status}: {detail}"
            )));
        }

        tracing::info!(%status, "social post published");
        Ok(())
    }
}
