// src/presentation/http/controllers/content.rs
//! Article and newsletter views. Both kinds share the handlers; the router
//! for each kind carries its [`ContentKind`] as an extension.
use crate::application::{
    authorization::{Action, authorize},
    commands::content::{CreateContentCommand, UpdateContentCommand},
    dto::ContentDto,
};
use crate::domain::content::ContentKind;
use crate::presentation::http::error::{IntoPageResult, PageResult};
use crate::presentation::http::extractors::MaybeAuthenticated;
use crate::presentation::http::flash::{self, Flash, FlashMessage};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views::{ConfirmDeleteView, ContentListView, FormView};
use axum::{
    Extension, Form, Router,
    extract::Path,
    routing::get,
};
use serde::Deserialize;
use utoipa::ToSchema;

use super::{non_blank, parse_optional_id};

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContentForm {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    /// Publisher id; blank for an independent piece.
    #[serde(default)]
    pub publisher: Option<String>,
}

pub fn content_routes(kind: ContentKind) -> Router {
    let base = format!("/{}", kind.resource());
    Router::new()
        .route(&format!("{base}/"), get(list))
        .route(&format!("{base}/create/"), get(create_form).post(create))
        .route(&format!("{base}/{{id}}/"), get(detail))
        .route(&format!("{base}/{{id}}/update/"), get(update_form).post(update))
        .route(&format!("{base}/{{id}}/delete/"), get(delete_form).post(delete))
        .route(&format!("{base}/{{id}}/approve/"), get(approve_form).post(approve))
        .layer(Extension(kind))
}

pub fn list_path(kind: ContentKind) -> String {
    format!("/{}/", kind.resource())
}

pub fn detail_path(kind: ContentKind, id: i64) -> String {
    format!("/{}/{id}/", kind.resource())
}

pub async fn list(
    Extension(state): Extension<HttpState>,
    Extension(kind): Extension<ContentKind>,
    actor: MaybeAuthenticated,
    flash: Flash,
) -> PageResult {
    let items = state
        .services
        .content_queries
        .list(actor.user(), kind)
        .await
        .or_redirect("/")?;
    Ok(flash.render(ContentListView { kind, items }))
}

pub async fn detail(
    Extension(state): Extension<HttpState>,
    Extension(kind): Extension<ContentKind>,
    actor: MaybeAuthenticated,
    flash: Flash,
    Path(id): Path<i64>,
) -> PageResult {
    let item = state
        .services
        .content_queries
        .get(actor.user(), kind, id)
        .await
        .or_redirect(&list_path(kind))?;
    Ok(flash.render(item))
}

pub async fn create_form(
    Extension(kind): Extension<ContentKind>,
    actor: MaybeAuthenticated,
    flash: Flash,
) -> PageResult {
    authorize(actor.user(), Action::CreateContent(kind)).or_redirect("/")?;
    Ok(flash.render(FormView::<ContentDto>::blank(
        kind.noun(),
        format!("Create {}", kind.label()),
    )))
}

pub async fn create(
    Extension(state): Extension<HttpState>,
    Extension(kind): Extension<ContentKind>,
    actor: MaybeAuthenticated,
    Form(form): Form<ContentForm>,
) -> PageResult {
    let publisher_id =
        parse_optional_id(form.publisher.as_deref(), "publisher").for_form(kind.noun(), "/")?;
    let command = CreateContentCommand {
        title: form.title,
        content: non_blank(form.content),
        publisher_id,
    };

    state
        .services
        .content_commands
        .create(actor.user(), kind, command)
        .await
        .for_form(kind.noun(), "/")?;

    Ok(flash::redirect(
        &list_path(kind),
        FlashMessage::success(format!("{} created successfully!", kind.label())),
    ))
}

pub async fn update_form(
    Extension(state): Extension<HttpState>,
    Extension(kind): Extension<ContentKind>,
    actor: MaybeAuthenticated,
    flash: Flash,
    Path(id): Path<i64>,
) -> PageResult {
    let current = state
        .services
        .content_commands
        .prepare_update(actor.user(), kind, id)
        .await
        .or_redirect(&detail_path(kind, id))?;
    Ok(flash.render(FormView::editing(
        kind.noun(),
        format!("Update {}", kind.label()),
        current,
    )))
}

pub async fn update(
    Extension(state): Extension<HttpState>,
    Extension(kind): Extension<ContentKind>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
    Form(form): Form<ContentForm>,
) -> PageResult {
    let detail = detail_path(kind, id);
    let publisher_id =
        parse_optional_id(form.publisher.as_deref(), "publisher").for_form(kind.noun(), &detail)?;
    let command = UpdateContentCommand {
        title: form.title,
        content: non_blank(form.content),
        publisher_id,
    };

    state
        .services
        .content_commands
        .update(actor.user(), kind, id, command)
        .await
        .for_form(kind.noun(), &detail)?;

    Ok(flash::redirect(
        &detail,
        FlashMessage::success(format!("{} updated successfully!", kind.label())),
    ))
}

pub async fn delete_form(
    Extension(state): Extension<HttpState>,
    Extension(kind): Extension<ContentKind>,
    actor: MaybeAuthenticated,
    flash: Flash,
    Path(id): Path<i64>,
) -> PageResult {
    let confirm = state
        .services
        .content_commands
        .prepare_delete(actor.user(), kind, id)
        .await
        .or_redirect(&detail_path(kind, id))?;
    Ok(flash.render(ConfirmDeleteView { confirm }))
}

pub async fn delete(
    Extension(state): Extension<HttpState>,
    Extension(kind): Extension<ContentKind>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> PageResult {
    state
        .services
        .content_commands
        .delete(actor.user(), kind, id)
        .await
        .or_redirect(&detail_path(kind, id))?;

    Ok(flash::redirect(
        &list_path(kind),
        FlashMessage::success(format!("{} deleted successfully!", kind.label())),
    ))
}

/// Approval only happens on POST. A GET runs the same checks and then bounces
/// back to the detail view with a warning.
pub async fn approve_form(
    Extension(state): Extension<HttpState>,
    Extension(kind): Extension<ContentKind>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> PageResult {
    let detail = detail_path(kind, id);
    state
        .services
        .content_commands
        .prepare_approve(actor.user(), kind, id)
        .await
        .or_redirect(&detail)?;

    Ok(flash::redirect(
        &detail,
        FlashMessage::warning("Invalid request method for approval."),
    ))
}

pub async fn approve(
    Extension(state): Extension<HttpState>,
    Extension(kind): Extension<ContentKind>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> PageResult {
    let detail = detail_path(kind, id);
    let report = state
        .services
        .content_commands
        .approve(actor.user(), kind, id)
        .await
        .or_redirect(&detail)?;

    tracing::debug!(
        id,
        newly_approved = report.newly_approved,
        email = ?report.email,
        social = ?report.social,
        "approval handled"
    );

    Ok(flash::redirect(
        &detail,
        FlashMessage::success(format!(
            "{} '{}' has been approved!",
            kind.label(),
            report.content.title
        )),
    ))
}
