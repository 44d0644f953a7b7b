// src/presentation/http/flash.rs
//! One-shot status messages carried across a redirect in a cookie.
//!
//! A handler that redirects stores a [`FlashMessage`] with [`redirect`]; the
//! next page that renders through [`Flash::render`] shows it once and clears
//! the cookie.

use std::convert::Infallible;

use axum::{
    Json,
    extract::FromRequestParts,
    http::{HeaderValue, header::SET_COOKIE, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use headers::{Cookie, HeaderMapExt};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::views::PageView;

pub const FLASH_COOKIE: &str = "bronews_flash";

const CLEAR_FLASH: &str = "bronews_flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub message: String,
}

impl FlashMessage {
    pub fn new(level: FlashLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Error, message)
    }

    fn encode(&self) -> Option<String> {
        serde_urlencoded::to_string(self).ok()
    }

    fn decode(raw: &str) -> Option<Self> {
        serde_urlencoded::from_str(raw).ok()
    }

    fn set_cookie(&self) -> Option<HeaderValue> {
        let value = self.encode()?;
        HeaderValue::from_str(&format!(
            "{FLASH_COOKIE}={value}; Path=/; HttpOnly; SameSite=Lax"
        ))
        .ok()
    }
}

/// `303 See Other` to `location`, leaving `message` for the next page.
pub fn redirect(location: &str, message: FlashMessage) -> Response {
    let mut response = Redirect::to(location).into_response();
    match message.set_cookie() {
        Some(cookie) => {
            response.headers_mut().append(SET_COOKIE, cookie);
        }
        None => tracing::warn!(message = %message.message, "flash message could not be encoded"),
    }
    response
}

/// The message left by the previous redirect, if any.
#[derive(Debug, Clone, Default)]
pub struct Flash {
    message: Option<FlashMessage>,
    present: bool,
}

impl Flash {
    pub fn message(&self) -> Option<&FlashMessage> {
        self.message.as_ref()
    }

    /// Render `data` as the page body together with the pending message and
    /// consume the cookie.
    pub fn render<T: Serialize>(self, data: T) -> Response {
        let view = PageView {
            data,
            messages: self.message.into_iter().collect(),
        };
        let mut response = Json(view).into_response();
        if self.present {
            response
                .headers_mut()
                .append(SET_COOKIE, HeaderValue::from_static(CLEAR_FLASH));
        }
        response
    }
}

impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .typed_get::<Cookie>()
            .and_then(|cookie| cookie.get(FLASH_COOKIE).map(str::to_owned));

        Ok(match raw {
            Some(raw) => Self {
                message: FlashMessage::decode(&raw),
                present: true,
            },
            None => Self::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode, header::LOCATION};

    #[test]
    fn redirect_sets_see_other_and_cookie() {
        let response = redirect(
            "/articles/1/",
            FlashMessage::success("Article 'Rust; 2024' has been approved!"),
        );
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/articles/1/");

        let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("bronews_flash=level=success&message="));
        // separators inside the message must not break the cookie
        assert!(!cookie.split("; ").next().unwrap().contains(';'));
    }

    #[tokio::test]
    async fn extractor_reads_back_the_message() {
        let message = FlashMessage::error("You must be logged in to create an article.");
        let request = Request::builder()
            .header("cookie", format!("other=1; {FLASH_COOKIE}={}", message.encode().unwrap()))
            .body(())
            .unwrap();
        let (mut parts, ()) = request.into_parts();

        let flash = Flash::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(flash.message(), Some(&message));

        let response = flash.render(serde_json::json!({ "page": "home" }));
        assert_eq!(response.headers()[SET_COOKIE], CLEAR_FLASH);
    }

    #[tokio::test]
    async fn no_cookie_means_no_message() {
        let (mut parts, ()) = Request::builder().body(()).unwrap().into_parts();
        let flash = Flash::from_request_parts(&mut parts, &()).await.unwrap();
        assert!(flash.message().is_none());
        assert!(flash.render(serde_json::json!({})).headers().get(SET_COOKIE).is_none());
    }
}
