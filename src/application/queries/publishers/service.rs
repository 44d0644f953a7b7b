use std::sync::Arc;

use crate::domain::{
    content::ContentReadRepository, publisher::PublisherRepository,
    subscription::SubscriptionRepository,
};

pub struct PublisherQueryService {
    pub(super) publisher_repo: Arc<dyn PublisherRepository>,
    pub(super) content_repo: Arc<dyn ContentReadRepository>,
    pub(super) subscription_repo: Arc<dyn SubscriptionRepository>,
}

impl PublisherQueryService {
    pub fn new(
        publisher_repo: Arc<dyn PublisherRepository>,
        content_repo: Arc<dyn ContentReadRepository>,
        subscription_repo: Arc<dyn SubscriptionRepository>,
    ) -> Self {
        Self {
            publisher_repo,
            content_repo,
            subscription_repo,
        }
    }
}
