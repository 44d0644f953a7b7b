use super::ContentCommandService;
use crate::{
    application::{
        authorization::{Action, authorize},
        dto::{AuthenticatedUser, ContentDto},
        error::ApplicationResult,
    },
    domain::content::{ContentBody, ContentKind, ContentTitle, NewContent},
};

pub struct CreateContentCommand {
    pub title: String,
    pub content: Option<String>,
    pub publisher_id: Option<i64>,
}

impl ContentCommandService {
    /// New pieces always start unapproved and belong to the caller.
    pub async fn create(
        &self,
        actor: Option<&AuthenticatedUser>,
        kind: ContentKind,
        command: CreateContentCommand,
    ) -> ApplicationResult<ContentDto> {
        let actor = authorize(actor, Action::CreateContent(kind))?;

        let title = ContentTitle::new(command.title)?;
        let body = ContentBody::new(command.content);
        let publisher_id = self.resolve_publisher(command.publisher_id).await?;

        let new_content = NewContent {
            kind,
            title,
            body,
            author_id: actor.id,
            publisher_id,
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_content).await?;
        tracing::info!(kind = %kind, id = created.id.0, author_id = %actor.id, "content created");
        Ok(created.into())
    }
}
