use super::UserQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, JournalistDetailDto, PublisherSummaryDto, UserSummaryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        subscription::SubscriptionTarget,
        user::{Role, UserId},
    },
};

impl UserQueryService {
    /// Public journalist page. `is_subscribed` is only ever true for a
    /// reader caller.
    pub async fn get_journalist(
        &self,
        actor: Option<&AuthenticatedUser>,
        user_id: i64,
    ) -> ApplicationResult<JournalistDetailDto> {
        let not_found = || ApplicationError::not_found("user not found");
        let user_id = UserId::new(user_id).map_err(|_| not_found())?;
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(not_found)?;

        if !user.is_journalist() {
            return Err(ApplicationError::forbidden("User is not a journalist."));
        }

        let is_subscribed = match actor {
            Some(reader) if reader.is(Role::Reader) => {
                self.subscription_repo
                    .is_subscribed(reader.id, SubscriptionTarget::Journalist(user.id))
                    .await?
            }
            _ => false,
        };

        let publisher = match user.profile.publisher_id {
            Some(id) => self
                .publisher_repo
                .find_by_id(id)
                .await?
                .as_ref()
                .map(PublisherSummaryDto::from),
            None => None,
        };

        Ok(JournalistDetailDto {
            journalist: UserSummaryDto::from(&user),
            email: user.email.map(String::from),
            publisher,
            is_subscribed,
        })
    }
}
