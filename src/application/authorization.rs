// src/application/authorization.rs
//! The single gate every mutating operation passes through.
//!
//! [`authorize`] distinguishes "who are you?" ([`ApplicationError::Unauthorized`])
//! from "you may not" ([`ApplicationError::Forbidden`]) so the page layer can
//! send the first to the login view and the second to a safe fallback.

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::{
            Content, ContentKind,
            specifications::{CanDeleteContentSpec, CanModifyContentSpec, ContentSpecification},
        },
        subscription::SubscriptionKind,
        user::Role,
    },
};

#[derive(Debug, Clone, Copy)]
pub enum Action<'a> {
    CreateContent(ContentKind),
    UpdateContent(&'a Content),
    DeleteContent(&'a Content),
    ApproveContent(ContentKind),
    CreatePublisher,
    Subscribe(SubscriptionKind),
    ReadFeed,
    ViewDashboard(Role),
}

impl Action<'_> {
    fn permits(&self, actor: &AuthenticatedUser) -> bool {
        match self {
            Action::CreateContent(kind) => actor.has_capability(kind.resource(), "create"),
            Action::UpdateContent(content) => {
                CanModifyContentSpec::new(&actor.capabilities, content, actor.id).is_satisfied()
            }
            Action::DeleteContent(content) => {
                CanDeleteContentSpec::new(&actor.capabilities, content, actor.id).is_satisfied()
            }
            Action::ApproveContent(kind) => actor.has_capability(kind.resource(), "approve"),
            Action::CreatePublisher => true,
            Action::Subscribe(_) => actor.has_capability("subscriptions", "manage"),
            Action::ReadFeed => actor.has_capability("feeds", "read"),
            Action::ViewDashboard(role) => actor.has_capability("dashboards", role.as_str()),
        }
    }

    fn login_message(&self) -> String {
        match self {
            Action::CreateContent(kind) => {
                format!("You must be logged in to create {}.", with_article(*kind))
            }
            Action::UpdateContent(content) => {
                format!("You must be logged in to edit this {}.", content.kind.noun())
            }
            Action::DeleteContent(content) => {
                format!("You must be logged in to delete this {}.", content.kind.noun())
            }
            Action::ApproveContent(kind) => {
                format!("You must be logged in to approve this {}.", kind.noun())
            }
            Action::CreatePublisher => "You must be logged in to create a publisher.".into(),
            Action::Subscribe(_) => "You must be logged in to subscribe.".into(),
            Action::ReadFeed => "Authentication credentials were not provided.".into(),
            Action::ViewDashboard(_) => "You must be logged in to view this dashboard.".into(),
        }
    }

    fn denial_message(&self) -> String {
        match self {
            Action::CreateContent(kind) => {
                format!("You must be a journalist to create {}.", kind.resource())
            }
            Action::UpdateContent(content) => {
                format!("You are not authorized to edit this {}.", content.kind.noun())
            }
            Action::DeleteContent(content) => {
                format!("You are not authorized to delete this {}.", content.kind.noun())
            }
            Action::ApproveContent(kind) => {
                format!("You must be an editor to approve {}.", kind.resource())
            }
            Action::CreatePublisher => "You are not allowed to create publishers.".into(),
            Action::Subscribe(SubscriptionKind::Publisher) => {
                "Only readers can subscribe to publishers.".into()
            }
            Action::Subscribe(SubscriptionKind::Journalist) => {
                "Only readers can subscribe to journalists.".into()
            }
            Action::ReadFeed => "Access denied. Only authenticated readers can retrieve \
                                 subscribed articles via this API."
                .into(),
            Action::ViewDashboard(role) => {
                format!("You must be {} to view this dashboard.", with_role_article(*role))
            }
        }
    }
}

fn with_article(kind: ContentKind) -> String {
    match kind {
        ContentKind::Article => "an article".into(),
        ContentKind::Newsletter => "a newsletter".into(),
    }
}

fn with_role_article(role: Role) -> String {
    match role {
        Role::Editor | Role::Admin => format!("an {}", role.as_str()),
        Role::Reader | Role::Journalist => format!("a {}", role.as_str()),
    }
}

/// Check `actor` against `action`. Returns the actor back so call sites can
/// write `let actor = authorize(actor, ...)?;`.
pub fn authorize<'u>(
    actor: Option<&'u AuthenticatedUser>,
    action: Action<'_>,
) -> ApplicationResult<&'u AuthenticatedUser> {
    let Some(actor) = actor else {
        return Err(ApplicationError::unauthorized(action.login_message()));
    };

    if action.permits(actor) {
        Ok(actor)
    } else {
        tracing::debug!(user_id = %actor.id, role = %actor.role, ?action, "authorization denied");
        Err(ApplicationError::forbidden(action.denial_message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        content::{ContentBody, ContentId, ContentTitle},
        user::UserId,
    };
    use chrono::Utc;

    fn actor(id: i64, role: Role) -> AuthenticatedUser {
        AuthenticatedUser {
            id: UserId(id),
            username: format!("user{id}"),
            role,
            publisher_id: None,
            capabilities: role.default_capabilities(),
            expires_at: Utc::now(),
        }
    }

    fn article_by(author: i64) -> Content {
        Content {
            id: ContentId(10),
            kind: ContentKind::Article,
            title: ContentTitle::new("A1").unwrap(),
            body: ContentBody::default(),
            author_id: UserId(author),
            publisher_id: None,
            is_approved: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn anonymous_is_unauthorized_with_login_message() {
        let err = authorize(None, Action::CreateContent(ContentKind::Article)).unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
        assert_eq!(err.detail(), "You must be logged in to create an article.");
    }

    #[test]
    fn only_journalists_create() {
        let journalist = actor(1, Role::Journalist);
        let reader = actor(2, Role::Reader);
        assert!(authorize(Some(&journalist), Action::CreateContent(ContentKind::Newsletter)).is_ok());

        let err = authorize(Some(&reader), Action::CreateContent(ContentKind::Article)).unwrap_err();
        assert!(matches!(err, ApplicationError::Forbidden(_)));
        assert_eq!(err.detail(), "You must be a journalist to create articles.");
    }

    #[test]
    fn update_and_delete_need_authorship_or_editor() {
        let article = article_by(1);
        let author = actor(1, Role::Journalist);
        let other = actor(2, Role::Journalist);
        let editor = actor(3, Role::Editor);

        assert!(authorize(Some(&author), Action::UpdateContent(&article)).is_ok());
        assert!(authorize(Some(&editor), Action::DeleteContent(&article)).is_ok());

        let err = authorize(Some(&other), Action::UpdateContent(&article)).unwrap_err();
        assert_eq!(err.detail(), "You are not authorized to edit this article.");
        let err = authorize(Some(&other), Action::DeleteContent(&article)).unwrap_err();
        assert_eq!(err.detail(), "You are not authorized to delete this article.");
    }

    #[test]
    fn approve_requires_editor() {
        let journalist = actor(1, Role::Journalist);
        let err = authorize(Some(&journalist), Action::ApproveContent(ContentKind::Article))
            .unwrap_err();
        assert_eq!(err.detail(), "You must be an editor to approve articles.");
        assert!(
            authorize(Some(&actor(2, Role::Editor)), Action::ApproveContent(ContentKind::Newsletter))
                .is_ok()
        );
    }

    #[test]
    fn subscribing_and_feed_are_reader_only() {
        let reader = actor(1, Role::Reader);
        let editor = actor(2, Role::Editor);
        assert!(authorize(Some(&reader), Action::Subscribe(SubscriptionKind::Publisher)).is_ok());
        assert!(authorize(Some(&reader), Action::ReadFeed).is_ok());

        let err = authorize(Some(&editor), Action::Subscribe(SubscriptionKind::Publisher))
            .unwrap_err();
        assert_eq!(err.detail(), "Only readers can subscribe to publishers.");
        assert!(matches!(
            authorize(Some(&editor), Action::ReadFeed),
            Err(ApplicationError::Forbidden(_))
        ));
    }

    #[test]
    fn dashboards_follow_role() {
        let admin = actor(1, Role::Admin);
        assert!(authorize(Some(&admin), Action::ViewDashboard(Role::Admin)).is_ok());
        let err = authorize(Some(&admin), Action::ViewDashboard(Role::Editor)).unwrap_err();
        assert_eq!(err.detail(), "You must be an editor to view this dashboard.");
    }

    #[test]
    fn anyone_logged_in_may_create_a_publisher() {
        for role in [Role::Reader, Role::Journalist, Role::Editor, Role::Admin] {
            assert!(authorize(Some(&actor(1, role)), Action::CreatePublisher).is_ok());
        }
    }
}
