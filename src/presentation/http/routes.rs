// src/presentation/http/routes.rs
use crate::domain::content::ContentKind;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{accounts, api, content, dashboards, home, journalists, publishers},
    middleware::rate_limit,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Knobs the binary sets from configuration and tests leave at the default.
#[derive(Debug, Clone, Default)]
pub struct RouterSettings {
    pub allowed_origins: Vec<String>,
    /// Per-client rate limiting on the credential endpoints. Needs the peer
    /// address, so the server must be started with connect info.
    pub rate_limit: bool,
}

pub fn build_router(state: HttpState, settings: &RouterSettings) -> Router {
    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let credentials = Router::new()
        .route(
            "/accounts/register/",
            get(accounts::register_form).post(accounts::register),
        )
        .route(
            "/accounts/login/",
            get(accounts::login_form).post(accounts::login),
        )
        .route("/accounts/logout/", post(accounts::logout));
    let credentials = if settings.rate_limit {
        credentials.layer(rate_limit::accounts_rate_limit_layer())
    } else {
        credentials
    };

    let router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/", get(home::index))
        .merge(credentials)
        .route(
            "/accounts/profile/",
            get(accounts::profile).post(accounts::update_profile),
        )
        .route(
            "/create-publisher/",
            get(publishers::create_form).post(publishers::create),
        )
        .route("/publisher-list/", get(publishers::list))
        .route("/publisher-details/{id}/", get(publishers::detail))
        .route(
            "/publisher/{id}/subscribe/",
            get(publishers::subscribe_form).post(publishers::subscribe),
        )
        .route("/journalist/{id}/", get(journalists::detail))
        .route(
            "/journalist/{id}/subscribe/",
            get(journalists::subscribe_form).post(journalists::subscribe),
        )
        .route("/journalist-dashboard/", get(dashboards::journalist))
        .route("/editor-dashboard/", get(dashboards::editor))
        .route("/admin-dashboard/", get(dashboards::admin))
        .route("/api/sub-articles/", get(api::subscribed_articles));

    ContentKind::ALL
        .into_iter()
        .fold(router, |router, kind| router.merge(content::content_routes(kind)))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
