// src/presentation/http/controllers/publishers.rs
use crate::application::{
    authorization::{Action, authorize},
    commands::publishers::CreatePublisherCommand,
    dto::PublisherDto,
    error::ApplicationError,
};
use crate::presentation::http::error::{IntoPageResult, PageError, PageResult};
use crate::presentation::http::extractors::MaybeAuthenticated;
use crate::presentation::http::flash::{self, Flash, FlashMessage};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views::{FormView, PublisherListView};
use axum::{Extension, Form, extract::Path};
use serde::Deserialize;
use utoipa::ToSchema;

use super::non_blank;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PublisherForm {
    pub name: String,
    #[serde(default)]
    pub content: Option<String>,
}

pub fn detail_path(id: i64) -> String {
    format!("/publisher-details/{id}/")
}

pub async fn create_form(actor: MaybeAuthenticated, flash: Flash) -> PageResult {
    authorize(actor.user(), Action::CreatePublisher).or_redirect("/")?;
    Ok(flash.render(FormView::<PublisherDto>::blank(
        "publisher",
        "Create Publisher",
    )))
}

pub async fn create(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Form(form): Form<PublisherForm>,
) -> PageResult {
    let command = CreatePublisherCommand {
        name: form.name,
        content: non_blank(form.content),
    };

    state
        .services
        .publisher_commands
        .create_publisher(actor.user(), command)
        .await
        .for_form("publisher", "/")?;

    Ok(flash::redirect(
        "/",
        FlashMessage::success("Publisher created successfully!"),
    ))
}

pub async fn list(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    flash: Flash,
) -> PageResult {
    let publishers = state
        .services
        .publisher_queries
        .list_publishers(actor.user())
        .await
        .or_redirect("/")?;
    Ok(flash.render(PublisherListView { publishers }))
}

pub async fn detail(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    flash: Flash,
    Path(id): Path<i64>,
) -> PageResult {
    let publisher = state
        .services
        .publisher_queries
        .get_publisher(actor.user(), id)
        .await
        .or_redirect("/")?;
    Ok(flash.render(publisher))
}

/// Subscribing only happens on POST.
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
    let toggled = state
        .services
        .subscription_commands
        .toggle_publisher(actor.user(), id)
        .await
        .or_redirect(&detail)?;

    Ok(flash::redirect(
        &detail,
        FlashMessage::success(toggled.message()),
    ))
}
