use super::ContentQueryService;
use crate::{
    application::{
        authorization::{Action, authorize},
        dto::{AuthenticatedUser, FeedArticleDto},
        error::ApplicationResult,
    },
    domain::{
        content::ContentKind,
        subscription::{SubscriptionKind, SubscriptionTarget},
        user::UserId,
    },
};

impl ContentQueryService {
    /// Approved articles written by journalists the reader follows, in
    /// insertion order. Evaluated fresh on every call.
    pub async fn subscribed_articles(
        &self,
        actor: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<Vec<FeedArticleDto>> {
        let reader = authorize(actor, Action::ReadFeed)?;

        let authors: Vec<UserId> = self
            .subscription_repo
            .list_subscriptions(reader.id, SubscriptionKind::Journalist)
            .await?
            .into_iter()
            .filter_map(|target| match target {
                SubscriptionTarget::Journalist(id) => Some(id),
                SubscriptionTarget::Publisher(_) => None,
            })
            .collect();

        if authors.is_empty() {
            return Ok(Vec::new());
        }

        let articles = self
            .read_repo
            .list_approved_by_authors(ContentKind::Article, &authors)
            .await?;
        Ok(articles.into_iter().map(FeedArticleDto::from).collect())
    }
}
