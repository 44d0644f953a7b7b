use super::PublisherQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ContentDto, PublisherDetailDto},
        error::{ApplicationError, ApplicationResult},
        queries::content::visible_to,
    },
    domain::{
        content::ContentKind,
        publisher::PublisherId,
        subscription::SubscriptionTarget,
        user::Role,
    },
};

impl PublisherQueryService {
    pub async fn get_publisher(
        &self,
        actor: Option<&AuthenticatedUser>,
        publisher_id: i64,
    ) -> ApplicationResult<PublisherDetailDto> {
        let not_found = || ApplicationError::not_found("publisher not found");
        let publisher_id = PublisherId::new(publisher_id).map_err(|_| not_found())?;
        let publisher = self
            .publisher_repo
            .find_by_id(publisher_id)
            .await?
            .ok_or_else(not_found)?;

        let articles = self
            .visible_items(actor, ContentKind::Article, publisher.id)
            .await?;
        let newsletters = self
            .visible_items(actor, ContentKind::Newsletter, publisher.id)
            .await?;

        let is_subscribed = match actor {
            Some(reader) if reader.is(Role::Reader) => {
                self.subscription_repo
                    .is_subscribed(reader.id, SubscriptionTarget::Publisher(publisher.id))
                    .await?
            }
            _ => false,
        };

        Ok(PublisherDetailDto {
            publisher: publisher.into(),
            articles,
            newsletters,
            is_subscribed,
        })
    }

    async fn visible_items(
        &self,
        actor: Option<&AuthenticatedUser>,
        kind: ContentKind,
        publisher_id: PublisherId,
    ) -> ApplicationResult<Vec<ContentDto>> {
        let items = self
            .content_repo
            .list_by_publisher(kind, publisher_id)
            .await?;
        Ok(items
            .into_iter()
            .filter(|content| visible_to(actor, content))
            .map(ContentDto::from)
            .collect())
    }
}
