// src/presentation/http/views.rs
//! JSON payloads for the page surface.
use serde::Serialize;

use crate::application::dto::{ContentDto, PublisherDto};
use crate::domain::content::ContentKind;
use crate::domain::user::Role;

use super::flash::FlashMessage;

/// Every rendered page: the view data plus the messages left by the last
/// redirect.
#[derive(Debug, Serialize)]
pub struct PageView<T> {
    #[serde(flatten)]
    pub data: T,
    pub messages: Vec<FlashMessage>,
}

/// Payload of a GET on a form route: which form, its submit label and the
/// current values when editing.
#[derive(Debug, Serialize)]
pub struct FormView<T> {
    pub form: &'static str,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial: Option<T>,
}

impl<T> FormView<T> {
    pub fn blank(form: &'static str, action: impl Into<String>) -> Self {
        Self {
            form,
            action: action.into(),
            initial: None,
        }
    }

    pub fn editing(form: &'static str, action: impl Into<String>, initial: T) -> Self {
        Self {
            form,
            action: action.into(),
            initial: Some(initial),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ConfirmDeleteView {
    pub confirm: ContentDto,
}

#[derive(Debug, Serialize)]
pub struct ContentListView {
    pub kind: ContentKind,
    pub items: Vec<ContentDto>,
}

#[derive(Debug, Serialize)]
pub struct PublisherListView {
    pub publishers: Vec<PublisherDto>,
}

#[derive(Debug, Serialize)]
pub struct HomeView {
    pub service: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    pub links: Vec<&'static str>,
}

impl HomeView {
    pub fn new(user: Option<(String, Role)>) -> Self {
        let links = match user.as_ref().map(|(_, role)| *role) {
            None => vec!["/accounts/login/", "/accounts/register/", "/articles/", "/newsletters/"],
            Some(Role::Reader) => vec![
                "/articles/",
                "/newsletters/",
                "/publisher-list/",
                "/api/sub-articles/",
                "/accounts/profile/",
            ],
            Some(Role::Journalist) => vec![
                "/articles/create/",
                "/newsletters/create/",
                "/journalist-dashboard/",
                "/accounts/profile/",
            ],
            Some(Role::Editor) => vec!["/editor-dashboard/", "/articles/", "/accounts/profile/"],
            Some(Role::Admin) => vec![
                "/admin-dashboard/",
                "/create-publisher/",
                "/publisher-list/",
                "/accounts/profile/",
            ],
        };
        let (username, role) = user.map_or((None, None), |(name, role)| (Some(name), Some(role)));
        Self {
            service: "bronews",
            username,
            role,
            links,
        }
    }
}
