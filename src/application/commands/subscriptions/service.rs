use std::sync::Arc;

use crate::domain::{
    publisher::PublisherRepository, subscription::SubscriptionRepository, user::UserRepository,
};

pub struct SubscriptionCommandService {
    pub(super) subscription_repo: Arc<dyn SubscriptionRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) publisher_repo: Arc<dyn PublisherRepository>,
}

impl SubscriptionCommandService {
    pub fn new(
        subscription_repo: Arc<dyn SubscriptionRepository>,
        user_repo: Arc<dyn UserRepository>,
        publisher_repo: Arc<dyn PublisherRepository>,
    ) -> Self {
        Self {
            subscription_repo,
            user_repo,
            publisher_repo,
        }
    }
}
