// tests/support/helpers.rs
use super::mocks::{
    DummyPasswordHasher, DummyTokenManager, FixedClock, InMemoryStore, RecordingEmailSender,
    RecordingSocialPoster, fixed_now, token_for,
};
use axum::{
    Router,
    body::{self, Body},
    http::{
        Request, Response, StatusCode,
        header::{AUTHORIZATION, CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
    },
};
use bronews::application::{
    notifications::{ApprovalNotifier, RetryPolicy},
    services::ApplicationServices,
};
use bronews::domain::{
    content::{ContentBody, ContentKind, ContentTitle, ContentWriteRepository, NewContent},
    publisher::{NewPublisher, PublisherName, PublisherRepository},
    subscription::{SubscriptionRepository, SubscriptionTarget},
    user::{EmailAddress, NewUser, PasswordHash, Role, UserId, UserRepository, Username},
};
use bronews::presentation::http::{
    flash::{FLASH_COOKIE, FlashMessage},
    routes::{RouterSettings, build_router},
    state::HttpState,
};
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tower::ServiceExt;

pub const PASSWORD: &str = "correct horse";

/// The whole HTTP surface over in-memory storage, plus handles on the
/// storage and the notification channels for assertions.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryStore>,
    pub email: Arc<RecordingEmailSender>,
    pub social: Arc<RecordingSocialPoster>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_notifiers(RecordingEmailSender::default(), RecordingSocialPoster::default())
    }

    pub fn with_notifiers(email: RecordingEmailSender, social: RecordingSocialPoster) -> Self {
        let store = Arc::new(InMemoryStore::default());
        let email = Arc::new(email);
        let social = Arc::new(social);

        let notifier = Arc::new(ApprovalNotifier::new(
            email.clone(),
            social.clone(),
            "webmaster@localhost",
            RetryPolicy {
                max_attempts: 2,
                backoff: Duration::ZERO,
            },
        ));

        let services = Arc::new(ApplicationServices::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            Arc::new(DummyPasswordHasher),
            Arc::new(DummyTokenManager),
            notifier,
            Arc::new(FixedClock),
        ));

        let router = build_router(HttpState { services }, &RouterSettings::default());

        Self {
            router,
            store,
            email,
            social,
        }
    }

    /* ------------------------------ seeding ------------------------------ */

    /// Insert an account whose password is [`PASSWORD`]; returns its id.
    pub async fn user(&self, username: &str, role: Role, email: Option<&str>) -> i64 {
        let new_user = NewUser::new(
            Username::new(username).expect("valid username"),
            email.map(|e| EmailAddress::new(e).expect("valid email")),
            PasswordHash::new(format!("plain:{PASSWORD}")).expect("valid hash"),
            role,
            fixed_now(),
        );
        UserRepository::insert(&*self.store, new_user)
            .await
            .expect("insert user")
            .id
            .0
    }

    pub async fn publisher(&self, admin: i64, name: &str) -> i64 {
        let publisher = NewPublisher {
            name: PublisherName::new(name).expect("valid name"),
            admin_id: UserId::new(admin).expect("valid id"),
            content: None,
            created_at: fixed_now(),
        };
        PublisherRepository::insert(&*self.store, publisher)
            .await
            .expect("insert publisher")
            .id
            .0
    }

    pub async fn content(&self, kind: ContentKind, author: i64, title: &str, approved: bool) -> i64 {
        let content = NewContent {
            kind,
            title: ContentTitle::new(title).expect("valid title"),
            body: ContentBody::new(Some(format!("{title} body"))),
            author_id: UserId::new(author).expect("valid id"),
            publisher_id: None,
            created_at: fixed_now(),
        };
        let id = ContentWriteRepository::insert(&*self.store, content)
            .await
            .expect("insert content")
            .id
            .0;
        if approved {
            self.store.force_approve(kind, id);
        }
        id
    }

    pub async fn article(&self, author: i64, title: &str, approved: bool) -> i64 {
        self.content(ContentKind::Article, author, title, approved)
            .await
    }

    pub async fn follow_journalist(&self, reader: i64, journalist: i64) {
        self.store
            .add_subscription(
                UserId::new(reader).expect("valid id"),
                SubscriptionTarget::Journalist(UserId::new(journalist).expect("valid id")),
            )
            .await
            .expect("add subscription");
    }

    /* ------------------------------ requests ------------------------------ */

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    pub async fn get(&self, path: &str, as_user: Option<i64>) -> Response<Body> {
        let request = authorized(Request::get(path), as_user)
            .body(Body::empty())
            .expect("request");
        self.send(request).await
    }

    pub async fn post_form(&self, path: &str, as_user: Option<i64>, form: &str) -> Response<Body> {
        let request = authorized(Request::post(path), as_user)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .expect("request");
        self.send(request).await
    }

    /// GET carrying the browser session cookie instead of a bearer header.
    pub async fn get_with_session(&self, path: &str, token: &str) -> Response<Body> {
        let request = Request::get(path)
            .header(COOKIE, format!("bronews_token={token}"))
            .body(Body::empty())
            .expect("request");
        self.send(request).await
    }
}

fn authorized(builder: axum::http::request::Builder, as_user: Option<i64>) -> axum::http::request::Builder {
    match as_user {
        Some(id) => builder.header(AUTHORIZATION, format!("Bearer {}", token_for(id))),
        None => builder,
    }
}

/* ------------------------------ responses ------------------------------ */

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("location header")
}

/// The flash message a redirect left behind, if any.
pub fn flash_of(response: &Response<Body>) -> Option<FlashMessage> {
    let prefix = format!("{FLASH_COOKIE}=");
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|cookie| cookie.strip_prefix(prefix.as_str()))
        .filter_map(|rest| rest.split(';').next())
        .find(|value| !value.is_empty())
        .and_then(|value| serde_urlencoded::from_str(value).ok())
}

/// Assert a `303` to `path` and hand back its flash message text.
pub fn assert_redirect(response: &Response<Body>, path: &str) -> String {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(response), path);
    flash_of(response)
        .map(|flash| flash.message)
        .unwrap_or_default()
}

pub fn set_cookie_values(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok().map(str::to_owned))
        .collect()
}
