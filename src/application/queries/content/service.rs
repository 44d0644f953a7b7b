use std::sync::Arc;

use crate::{
    application::dto::AuthenticatedUser,
    domain::{
        content::{
            Content, ContentReadRepository,
            specifications::{CanViewContentSpec, ContentSpecification},
        },
        subscription::SubscriptionRepository,
    },
};

pub struct ContentQueryService {
    pub(super) read_repo: Arc<dyn ContentReadRepository>,
    pub(super) subscription_repo: Arc<dyn SubscriptionRepository>,
}

impl ContentQueryService {
    pub fn new(
        read_repo: Arc<dyn ContentReadRepository>,
        subscription_repo: Arc<dyn SubscriptionRepository>,
    ) -> Self {
        Self {
            read_repo,
            subscription_repo,
        }
    }
}

pub(crate) fn visible_to(actor: Option<&AuthenticatedUser>, content: &Content) -> bool {
    CanViewContentSpec::new(
        actor.map(|a| &a.capabilities),
        content,
        actor.map(|a| a.id),
    )
    .is_satisfied()
}
