// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, Cookie, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Cookie set by the login view; carries the same token as the bearer header.
pub const SESSION_COOKIE: &str = "bronews_token";

/// The caller, if any.
///
/// Credentials that no longer verify (expired, forged, account removed) are
/// treated as anonymous, whether they come from the bearer header or the
/// session cookie. Each view then answers an anonymous caller its own way:
/// the feed with `403`, pages with a redirect to the login view.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

impl MaybeAuthenticated {
    pub fn user(&self) -> Option<&AuthenticatedUser> {
        self.0.as_ref()
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let (token, source) =
            if let Some(header) = parts.headers.typed_get::<Authorization<Bearer>>() {
                (header.token().to_owned(), "bearer")
            } else if let Some(token) = parts
                .headers
                .typed_get::<Cookie>()
                .and_then(|cookie| cookie.get(SESSION_COOKIE).map(str::to_owned))
            {
                (token, "cookie")
            } else {
                return Ok(Self(None));
            };

        match app_state.services.authenticate(&token).await {
            Ok(user) => Ok(Self(Some(user))),
            Err(err) => {
                tracing::debug!(error = %err, source, "ignoring credentials that no longer verify");
                Ok(Self(None))
            }
        }
    }
}
