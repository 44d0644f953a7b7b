use super::ContentCommandService;
use crate::{
    application::{
        authorization::{Action, authorize},
        dto::{ApprovalReportDto, AuthenticatedUser, ContentDto, DeliveryStatus},
        error::ApplicationResult,
        notifications::NotificationOutcome,
    },
    domain::{
        content::{Content, ContentKind},
        errors::DomainResult,
        subscription::SubscriptionTarget,
        user::User,
    },
};

impl ContentCommandService {
    /// Run the approval checks without approving anything.
    pub async fn prepare_approve(
        &self,
        actor: Option<&AuthenticatedUser>,
        kind: ContentKind,
        id: i64,
    ) -> ApplicationResult<ContentDto> {
        let content = self.load(kind, id).await?;
        authorize(actor, Action::ApproveContent(kind))?;
        Ok(content.into())
    }

    /// Move a piece from unapproved to approved.
    ///
    /// The flag flips through a conditional write, so of several approvals
    /// of the same piece only one sees `newly_approved` and only that one
    /// notifies. Notification problems are reported in the result and never
    /// turn into an error.
    pub async fn approve(
        &self,
        actor: Option<&AuthenticatedUser>,
        kind: ContentKind,
        id: i64,
    ) -> ApplicationResult<ApprovalReportDto> {
        let content = self.load(kind, id).await?;
        let actor = authorize(actor, Action::ApproveContent(kind))?;

        let Some(approved) = self
            .write_repo
            .mark_approved(kind, content.id, self.clock.now())
            .await?
        else {
            tracing::debug!(kind = %kind, id, "already approved, nothing to notify");
            let current = self.load(kind, id).await?;
            return Ok(report(current, false, NotificationOutcome::skipped()));
        };

        tracing::info!(kind = %kind, id, editor_id = %actor.id, "content approved");

        let outcome = if kind.notifies_subscribers() {
            self.notify_subscribers(&approved).await
        } else {
            NotificationOutcome::skipped()
        };

        Ok(report(approved, true, outcome))
    }

    async fn notify_subscribers(&self, article: &Content) -> NotificationOutcome {
        let author = match self.user_repo.find_by_id(article.author_id).await {
            Ok(Some(author)) => author,
            Ok(None) => {
                tracing::warn!(author_id = %article.author_id, "approved article has no author row");
                return NotificationOutcome::failed();
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not load author for approval notice");
                return NotificationOutcome::failed();
            }
        };

        let recipients = match self.subscriber_emails(&author).await {
            Ok(recipients) => Some(recipients),
            Err(err) => {
                tracing::warn!(error = %err, author_id = %author.id, "could not collect subscriber emails");
                None
            }
        };

        let title = article.title.as_str();
        let author_name = author.username.as_str();
        match recipients {
            Some(recipients) => {
                self.notifier
                    .article_approved(title, author_name, recipients)
                    .await
            }
            None => NotificationOutcome {
                email: DeliveryStatus::Failed,
                social: self.notifier.announce(title, author_name).await,
            },
        }
    }

    async fn subscriber_emails(&self, author: &User) -> DomainResult<Vec<String>> {
        let subscriber_ids = self
            .subscription_repo
            .list_subscribers(SubscriptionTarget::Journalist(author.id))
            .await?;
        Ok(self
            .user_repo
            .find_by_ids(&subscriber_ids)
            .await?
            .into_iter()
            .filter_map(|user| user.email.map(String::from))
            .collect())
    }
}

fn report(content: Content, newly_approved: bool, outcome: NotificationOutcome) -> ApprovalReportDto {
    ApprovalReportDto {
        content: content.into(),
        newly_approved,
        email: outcome.email,
        social: outcome.social,
    }
}
