// src/presentation/http/controllers/journalists.rs
use crate::application::error::ApplicationError;
use crate::domain::user::Role;
use crate::presentation::http::error::{IntoPageResult, PageError, PageResult};
use crate::presentation::http::extractors::MaybeAuthenticated;
use crate::presentation::http::flash::{self, Flash, FlashMessage};
use crate::presentation::http::state::HttpState;
use axum::{Extension, extract::Path};

pub fn detail_path(id: i64) -> String {
    format!("/journalist/{id}/")
}

/// Non-journalists are not shown here; the caller is sent home instead.
pub async fn detail(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    flash: Flash,
    Path(id): Path<i64>,
) -> PageResult {
    let journalist = state
        .services
        .user_queries
        .get_journalist(actor.user(), id)
        .await
        .or_redirect("/")?;
    Ok(flash.render(journalist))
}

pub async fn subscribe_form(actor: MaybeAuthenticated, Path(id): Path<i64>) -> PageResult {
    let detail = detail_path(id);
    if actor.user().is_none() {
        return Err(PageError::new(
            ApplicationError::unauthorized("You must be logged in to subscribe."),
            detail,
        ));
    }
    Ok(flash::redirect(
        &detail,
        FlashMessage::error("Invalid request method."),
    ))
}

pub async fn subscribe(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> PageResult {
    let detail = detail_path(id);
    // A reader passes the role check, so a refusal can only mean the
    // target is not a journalist; that page does not exist, go home.
    let fallback = match actor.user() {
        Some(user) if user.is(Role::Reader) => "/".to_string(),
        _ => detail.clone(),
    };

    let toggled = state
        .services
        .subscription_commands
        .toggle_journalist(actor.user(), id)
        .await
        .or_redirect(&fallback)?;

    Ok(flash::redirect(
        &detail,
        FlashMessage::success(toggled.message()),
    ))
}
