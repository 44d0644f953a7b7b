use super::ContentCommandService;
use crate::{
    application::{
        authorization::{Action, authorize},
        dto::{AuthenticatedUser, ContentDto},
        error::ApplicationResult,
    },
    domain::content::{ContentBody, ContentKind, ContentTitle, ContentUpdate},
};

/// Full replacement of the editable fields, the way the edit form submits
/// them. Approval state is not editable here.
pub struct UpdateContentCommand {
    pub title: String,
    pub content: Option<String>,
    pub publisher_id: Option<i64>,
}

impl ContentCommandService {
    /// Load a piece for its edit form, applying the same checks as the
    /// submission.
    pub async fn prepare_update(
        &self,
        actor: Option<&AuthenticatedUser>,
        kind: ContentKind,
        id: i64,
    ) -> ApplicationResult<ContentDto> {
        let content = self.load(kind, id).await?;
        authorize(actor, Action::UpdateContent(&content))?;
        Ok(content.into())
    }

    pub async fn update(
        &self,
        actor: Option<&AuthenticatedUser>,
        kind: ContentKind,
        id: i64,
        command: UpdateContentCommand,
    ) -> ApplicationResult<ContentDto> {
        let mut content = self.load(kind, id).await?;
        let actor = authorize(actor, Action::UpdateContent(&content))?;

        let title = ContentTitle::new(command.title)?;
        let body = ContentBody::new(command.content);
        let publisher_id = self.resolve_publisher(command.publisher_id).await?;

        content.set_content(title, body, publisher_id, self.clock.now());
        let updated = self
            .write_repo
            .update(ContentUpdate::from_content(&content))
            .await?;

        tracing::info!(kind = %kind, id, editor_id = %actor.id, "content updated");
        Ok(updated.into())
    }
}
