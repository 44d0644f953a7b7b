// src/presentation/http/controllers/home.rs
use crate::presentation::http::extractors::MaybeAuthenticated;
use crate::presentation::http::flash::Flash;
use crate::presentation::http::views::HomeView;
use axum::response::Response;

pub async fn index(actor: MaybeAuthenticated, flash: Flash) -> Response {
    let user = actor.0.map(|user| (user.username, user.role));
    flash.render(HomeView::new(user))
}
