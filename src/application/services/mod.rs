// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            content::ContentCommandService, publishers::PublisherCommandService,
            subscriptions::SubscriptionCommandService, users::UserCommandService,
        },
        dto::AuthenticatedUser,
        error::ApplicationError,
        notifications::ApprovalNotifier,
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        queries::{
            content::ContentQueryService, publishers::PublisherQueryService,
            users::UserQueryService,
        },
    },
    domain::{
        content::{ContentReadRepository, ContentWriteRepository},
        publisher::PublisherRepository,
        subscription::SubscriptionRepository,
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub publisher_commands: Arc<PublisherCommandService>,
    pub publisher_queries: Arc<PublisherQueryService>,
    pub content_commands: Arc<ContentCommandService>,
    pub content_queries: Arc<ContentQueryService>,
    pub subscription_commands: Arc<SubscriptionCommandService>,
    user_repo: Arc<dyn UserRepository>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        publisher_repo: Arc<dyn PublisherRepository>,
        content_write_repo: Arc<dyn ContentWriteRepository>,
        content_read_repo: Arc<dyn ContentReadRepository>,
        subscription_repo: Arc<dyn SubscriptionRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        notifier: Arc<ApprovalNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&publisher_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&user_repo),
            Arc::clone(&publisher_repo),
            Arc::clone(&subscription_repo),
        ));

        let publisher_commands = Arc::new(PublisherCommandService::new(
            Arc::clone(&publisher_repo),
            Arc::clone(&clock),
        ));
        let publisher_queries = Arc::new(PublisherQueryService::new(
            Arc::clone(&publisher_repo),
            Arc::clone(&content_read_repo),
            Arc::clone(&subscription_repo),
        ));

        let content_commands = Arc::new(ContentCommandService::new(
            Arc::clone(&content_write_repo),
            Arc::clone(&content_read_repo),
            Arc::clone(&user_repo),
            Arc::clone(&publisher_repo),
            Arc::clone(&subscription_repo),
            notifier,
            Arc::clone(&clock),
        ));
        let content_queries = Arc::new(ContentQueryService::new(
            Arc::clone(&content_read_repo),
            Arc::clone(&subscription_repo),
        ));

        let subscription_commands = Arc::new(SubscriptionCommandService::new(
            Arc::clone(&subscription_repo),
            Arc::clone(&user_repo),
            Arc::clone(&publisher_repo),
        ));

        Self {
            user_commands,
            user_queries,
            publisher_commands,
            publisher_queries,
            content_commands,
            content_queries,
            subscription_commands,
            user_repo,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    /// Resolve a raw bearer token into the acting user.
    ///
    /// The role and affiliation come from the user row as it is now, not from
    /// the token, so role changes apply to tokens issued before them.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let verified = self.token_manager.verify(token).await?;
        let user = self
            .user_repo
            .find_by_id(verified.subject.user_id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("account no longer exists"))?;

        Ok(AuthenticatedUser::from_user(&user, verified.expires_at))
    }
}
