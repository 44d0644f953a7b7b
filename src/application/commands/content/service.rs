use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        notifications::ApprovalNotifier,
        ports::time::Clock,
    },
    domain::{
        content::{Content, ContentId, ContentKind, ContentReadRepository, ContentWriteRepository},
        publisher::{PublisherId, PublisherRepository},
        subscription::SubscriptionRepository,
        user::UserRepository,
    },
};

pub struct ContentCommandService {
    pub(super) write_repo: Arc<dyn ContentWriteRepository>,
    pub(super) read_repo: Arc<dyn ContentReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) publisher_repo: Arc<dyn PublisherRepository>,
    pub(super) subscription_repo: Arc<dyn SubscriptionRepository>,
    pub(super) notifier: Arc<ApprovalNotifier>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ContentCommandService {
    pub fn new(
        write_repo: Arc<dyn ContentWriteRepository>,
        read_repo: Arc<dyn ContentReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        publisher_repo: Arc<dyn PublisherRepository>,
        subscription_repo: Arc<dyn SubscriptionRepository>,
        notifier: Arc<ApprovalNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            user_repo,
            publisher_repo,
            subscription_repo,
            notifier,
            clock,
        }
    }

    pub(super) async fn load(&self, kind: ContentKind, id: i64) -> ApplicationResult<Content> {
        let not_found = || ApplicationError::not_found(format!("{} not found", kind.noun()));
        // Ids are positive, so anything else names nothing.
        let id = ContentId::new(id).map_err(|_| not_found())?;
        self.read_repo
            .find_by_id(kind, id)
            .await?
            .ok_or_else(not_found)
    }

    /// Validate an optional publisher link coming from a form.
    pub(super) async fn resolve_publisher(
        &self,
        publisher_id: Option<i64>,
    ) -> ApplicationResult<Option<PublisherId>> {
        let Some(raw) = publisher_id else {
            return Ok(None);
        };
        let id = PublisherId::new(raw)?;
        if self.publisher_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::validation("publisher does not exist"));
        }
        Ok(Some(id))
    }
}
