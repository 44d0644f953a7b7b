use super::ContentCommandService;
use crate::{
    application::{
        authorization::{Action, authorize},
        dto::{AuthenticatedUser, ContentDto},
        error::ApplicationResult,
    },
    domain::content::ContentKind,
};

impl ContentCommandService {
    /// Load a piece for the delete confirmation.
    pub async fn prepare_delete(
        &self,
        actor: Option<&AuthenticatedUser>,
        kind: ContentKind,
        id: i64,
    ) -> ApplicationResult<ContentDto> {
        let content = self.load(kind, id).await?;
        authorize(actor, Action::DeleteContent(&content))?;
        Ok(content.into())
    }

    pub async fn delete(
        &self,
        actor: Option<&AuthenticatedUser>,
        kind: ContentKind,
        id: i64,
    ) -> ApplicationResult<()> {
        let content = self.load(kind, id).await?;
        let actor = authorize(actor, Action::DeleteContent(&content))?;

        self.write_repo.delete(kind, content.id).await?;
        tracing::info!(kind = %kind, id, user_id = %actor.id, "content deleted");
        Ok(())
    }
}
