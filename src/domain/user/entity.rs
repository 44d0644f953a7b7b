// src/domain/user/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publisher::PublisherId;
use crate::domain::user::value_objects::{EmailAddress, PasswordHash, Role, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: Option<EmailAddress>,
    pub password_hash: PasswordHash,
    pub profile: Profile,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn role(&self) -> Role {
        self.profile.role
    }

    pub fn is_journalist(&self) -> bool {
        self.profile.role == Role::Journalist
    }
}

/// Per-user extension record. Subscription sets live in join tables and are
/// reached through the subscription repository, not through this struct.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Profile {
    pub role: Role,
    pub publisher_id: Option<PublisherId>,
}

/// What a role change requires outside the profile row itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleChange {
    pub changed: bool,
    pub clear_subscriptions: bool,
}

impl Profile {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            publisher_id: None,
        }
    }

    /// Switch to `new_role`, dropping affiliation data the new role cannot
    /// hold. Subscriptions are stored elsewhere, so the caller is told whether
    /// to clear them.
    pub fn change_role(&mut self, new_role: Role) -> RoleChange {
        if new_role == self.role {
            return RoleChange::default();
        }

        self.role = new_role;
        match new_role {
            Role::Journalist => RoleChange {
                changed: true,
                clear_subscriptions: true,
            },
            Role::Editor | Role::Admin => {
                self.publisher_id = None;
                RoleChange {
                    changed: true,
                    clear_subscriptions: true,
                }
            }
            Role::Reader => {
                self.publisher_id = None;
                RoleChange {
                    changed: true,
                    clear_subscriptions: false,
                }
            }
        }
    }

    pub fn affiliate(&mut self, publisher_id: Option<PublisherId>) -> DomainResult<()> {
        if publisher_id.is_some() && self.role != Role::Journalist {
            return Err(DomainError::Validation(
                "only journalists can be affiliated with a publisher".into(),
            ));
        }
        self.publisher_id = publisher_id;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: Option<EmailAddress>,
    pub password_hash: PasswordHash,
    pub profile: Profile,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        username: Username,
        email: Option<EmailAddress>,
        password_hash: PasswordHash,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            email,
            password_hash,
            profile: Profile::new(role),
            created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub username: Option<Username>,
    pub email: Option<Option<EmailAddress>>,
    pub profile: Option<Profile>,
    /// Drop the user's subscriptions in the same write as the profile change.
    pub clear_subscriptions: bool,
}

impl UserUpdate {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            username: None,
            email: None,
            profile: None,
            clear_subscriptions: false,
        }
    }

    pub fn with_username(mut self, username: Username) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_email(mut self, email: Option<EmailAddress>) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn clearing_subscriptions(mut self) -> Self {
        self.clear_subscriptions = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.profile.is_none()
            && !self.clear_subscriptions
    }
}
