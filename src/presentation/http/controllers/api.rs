// src/presentation/http/controllers/api.rs
use crate::application::{dto::FeedArticleDto, error::ApplicationError};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::MaybeAuthenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

/// Approved articles by the journalists the calling reader follows.
///
/// Anonymous callers get `403` like everyone else who is not a reader.
#[utoipa::path(
    get,
    path = "/api/sub-articles/",
    responses(
        (status = 200, description = "Approved articles from subscribed journalists, in insertion order.", body = [FeedArticleDto]),
        (status = 403, description = "Caller is not an authenticated reader.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = []), ("sessionCookie" = [])),
    tag = "Feed"
)]
pub async fn subscribed_articles(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
) -> HttpResult<Json<Vec<FeedArticleDto>>> {
    state
        .services
        .content_queries
        .subscribed_articles(actor.user())
        .await
        .map_err(|err| match err {
            ApplicationError::Unauthorized(msg) => ApplicationError::Forbidden(msg),
            other => other,
        })
        .into_http()
        .map(Json)
}
