// src/presentation/http/controllers/dashboards.rs
use crate::presentation::http::error::{IntoPageResult, PageResult};
use crate::presentation::http::extractors::MaybeAuthenticated;
use crate::presentation::http::flash::Flash;
use crate::presentation::http::state::HttpState;
use axum::Extension;

pub async fn journalist(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    flash: Flash,
) -> PageResult {
    let dashboard = state
        .services
        .content_queries
        .journalist_dashboard(actor.user())
        .await
        .or_redirect("/")?;
    Ok(flash.render(dashboard))
}

pub async fn editor(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    flash: Flash,
) -> PageResult {
    let dashboard = state
        .services
        .content_queries
        .editor_dashboard(actor.user())
        .await
        .or_redirect("/")?;
    Ok(flash.render(dashboard))
}

pub async fn admin(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    flash: Flash,
) -> PageResult {
    let dashboard = state
        .services
        .publisher_queries
        .admin_dashboard(actor.user())
        .await
        .or_redirect("/")?;
    Ok(flash.render(dashboard))
}
