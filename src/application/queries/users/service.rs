use std::sync::Arc;

use crate::domain::{
    publisher::PublisherRepository, subscription::SubscriptionRepository, user::UserRepository,
};

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) publisher_repo: Arc<dyn PublisherRepository>,
    pub(super) subscription_repo: Arc<dyn SubscriptionRepository>,
}

impl UserQueryService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        publisher_repo: Arc<dyn PublisherRepository>,
        subscription_repo: Arc<dyn SubscriptionRepository>,
    ) -> Self {
        Self {
            user_repo,
            publisher_repo,
            subscription_repo,
        }
    }
}
