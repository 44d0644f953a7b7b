// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};

use super::extractors::SESSION_COOKIE;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::accounts::register,
        crate::presentation::http::controllers::accounts::login,
        crate::presentation::http::controllers::accounts::logout,
        crate::presentation::http::controllers::accounts::profile,
        crate::presentation::http::controllers::api::subscribed_articles,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::error::FormErrors,
            crate::presentation::http::flash::FlashMessage,
            crate::presentation::http::flash::FlashLevel,
            crate::presentation::http::controllers::accounts::RegisterForm,
            crate::presentation::http::controllers::accounts::LoginForm,
            crate::presentation::http::controllers::accounts::LoginResponse,
            crate::presentation::http::controllers::accounts::ProfileForm,
            crate::presentation::http::controllers::content::ContentForm,
            crate::presentation::http::controllers::publishers::PublisherForm,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::UserDto,
            crate::application::dto::ProfileDto,
            crate::application::dto::ContentDto,
            crate::application::dto::FeedArticleDto,
            crate::application::dto::PublisherDto,
            crate::application::dto::PublisherDetailDto,
            crate::application::dto::JournalistDetailDto,
            crate::application::dto::SubscriptionToggleDto
        )
    ),
    tags(
        (name = "Accounts", description = "Registration, login and profile"),
        (name = "Feed", description = "Read API over subscriptions"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "bronews API",
        description = "News publishing with editorial approval and reader subscriptions",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
        components.add_security_scheme(
            "sessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE))),
        );
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let redoc = Redoc::with_url("/redoc", ApiDoc::openapi());
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(redoc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_the_feed_and_security_schemes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/sub-articles/"));
        assert!(doc.paths.paths.contains_key("/accounts/login/"));

        let schemes = &doc.components.as_ref().unwrap().security_schemes;
        assert!(schemes.contains_key("bearerAuth"));
        assert!(schemes.contains_key("sessionCookie"));
    }
}
