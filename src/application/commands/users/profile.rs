use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        publisher::PublisherId,
        user::{EmailAddress, Role, UserUpdate, Username},
    },
};

/// Every field is optional; `None` leaves the current value alone.
/// `email: Some(String::new())` clears the address and
/// `publisher_id: Some(None)` clears the affiliation.
#[derive(Debug, Default)]
pub struct UpdateProfileCommand {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub publisher_id: Option<Option<i64>>,
}

impl UserCommandService {
    /// Edit the caller's own account. A role change drops whatever the new
    /// role cannot hold: subscriptions for non-readers, the publisher
    /// affiliation for readers, editors and admins.
    pub async fn update_profile(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<UserDto> {
        let actor = actor.ok_or_else(|| {
            ApplicationError::unauthorized("You must be logged in to edit your profile.")
        })?;

        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let mut update = UserUpdate::new(user.id);

        if let Some(raw) = command.username {
            let username = Username::new(raw)?;
            if username != user.username {
                if self.user_repo.find_by_username(&username).await?.is_some() {
                    return Err(ApplicationError::conflict("username already exists"));
                }
                update = update.with_username(username);
            }
        }

        if let Some(raw) = command.email {
            update = update.with_email(EmailAddress::parse_optional(Some(raw))?);
        }

        let mut profile = user.profile.clone();
        let change = command
            .role
            .map(|role| profile.change_role(role))
            .unwrap_or_default();

        if let Some(publisher) = command.publisher_id {
            let publisher_id = publisher.map(PublisherId::new).transpose()?;
            if let Some(id) = publisher_id {
                if self.publisher_repo.find_by_id(id).await?.is_none() {
                    return Err(ApplicationError::validation("publisher does not exist"));
                }
            }
            profile.affiliate(publisher_id)?;
        }

        if profile != user.profile {
            update = update.with_profile(profile);
        }
        if change.clear_subscriptions {
            update = update.clearing_subscriptions();
        }

        let updated = if update.is_empty() {
            user
        } else {
            self.user_repo.update(update).await?
        };

        if change.changed {
            tracing::info!(
                user_id = %updated.id,
                role = %updated.role(),
                cleared_subscriptions = change.clear_subscriptions,
                "role changed"
            );
        }

        Ok(updated.into())
    }
}
