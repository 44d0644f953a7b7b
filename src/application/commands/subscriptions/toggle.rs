use super::SubscriptionCommandService;
use crate::{
    application::{
        authorization::{Action, authorize},
        dto::{AuthenticatedUser, SubscriptionToggleDto, SubscriptionToggleState},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        publisher::PublisherId,
        subscription::{SubscriptionKind, SubscriptionTarget},
        user::UserId,
    },
};

impl SubscriptionCommandService {
    /// Subscribe the reader to the publisher, or unsubscribe if they already
    /// follow it.
    pub async fn toggle_publisher(
        &self,
        actor: Option<&AuthenticatedUser>,
        publisher_id: i64,
    ) -> ApplicationResult<SubscriptionToggleDto> {
        let reader = authorize(actor, Action::Subscribe(SubscriptionKind::Publisher))?;

        let not_found = || ApplicationError::not_found("publisher not found");
        let publisher_id = PublisherId::new(publisher_id).map_err(|_| not_found())?;
        let publisher = self
            .publisher_repo
            .find_by_id(publisher_id)
            .await?
            .ok_or_else(not_found)?;

        let target = SubscriptionTarget::Publisher(publisher.id);
        self.toggle(reader, target, publisher.name.to_string()).await
    }

    /// Same as [`Self::toggle_publisher`] for a journalist. The target must
    /// currently hold the Journalist role.
    pub async fn toggle_journalist(
        &self,
        actor: Option<&AuthenticatedUser>,
        journalist_id: i64,
    ) -> ApplicationResult<SubscriptionToggleDto> {
        let reader = authorize(actor, Action::Subscribe(SubscriptionKind::Journalist))?;

        let not_found = || ApplicationError::not_found("user not found");
        let journalist_id = UserId::new(journalist_id).map_err(|_| not_found())?;
        let journalist = self
            .user_repo
            .find_by_id(journalist_id)
            .await?
            .ok_or_else(not_found)?;

        if !journalist.is_journalist() {
            return Err(ApplicationError::forbidden(format!(
                "{} is not a journalist.",
                journalist.username
            )));
        }

        let target = SubscriptionTarget::Journalist(journalist.id);
        self.toggle(reader, target, journalist.username.to_string()).await
    }

    async fn toggle(
        &self,
        reader: &AuthenticatedUser,
        target: SubscriptionTarget,
        target_name: String,
    ) -> ApplicationResult<SubscriptionToggleDto> {
        let state = if self.subscription_repo.is_subscribed(reader.id, target).await? {
            self.subscription_repo
                .remove_subscription(reader.id, target)
                .await?;
            SubscriptionToggleState::Unsubscribed
        } else {
            self.subscription_repo.add_subscription(reader.id, target).await?;
            SubscriptionToggleState::Subscribed
        };

        tracing::info!(
            reader_id = %reader.id,
            target_kind = ?target.kind(),
            target_id = target.raw_id(),
            ?state,
            "subscription toggled"
        );

        Ok(SubscriptionToggleDto {
            target_kind: target.kind(),
            target_id: target.raw_id(),
            target_name,
            state,
        })
    }
}
