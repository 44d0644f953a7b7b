use super::UserQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ProfileDto, PublisherSummaryDto, UserSummaryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        publisher::PublisherId,
        subscription::{SubscriptionKind, SubscriptionTarget},
        user::UserId,
    },
};

impl UserQueryService {
    pub async fn get_profile(
        &self,
        actor: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<ProfileDto> {
        let actor = actor.ok_or_else(|| {
            ApplicationError::unauthorized("You must be logged in to view your profile.")
        })?;

        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let journalist_ids: Vec<UserId> = self
            .subscription_repo
            .list_subscriptions(user.id, SubscriptionKind::Journalist)
            .await?
            .into_iter()
            .filter_map(|target| match target {
                SubscriptionTarget::Journalist(id) => Some(id),
                SubscriptionTarget::Publisher(_) => None,
            })
            .collect();
        let publisher_ids: Vec<PublisherId> = self
            .subscription_repo
            .list_subscriptions(user.id, SubscriptionKind::Publisher)
            .await?
            .into_iter()
            .filter_map(|target| match target {
                SubscriptionTarget::Publisher(id) => Some(id),
                SubscriptionTarget::Journalist(_) => None,
            })
            .collect();

        let subscribed_journalists = self
            .user_repo
            .find_by_ids(&journalist_ids)
            .await?
            .iter()
            .map(UserSummaryDto::from)
            .collect();
        let subscribed_publishers = self
            .publisher_repo
            .find_by_ids(&publisher_ids)
            .await?
            .iter()
            .map(PublisherSummaryDto::from)
            .collect();

        Ok(ProfileDto {
            user: user.into(),
            subscribed_journalists,
            subscribed_publishers,
        })
    }
}
