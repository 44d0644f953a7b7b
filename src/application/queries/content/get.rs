use super::{ContentQueryService, service::visible_to};
use crate::{
    application::{
        dto::{AuthenticatedUser, ContentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::content::{ContentId, ContentKind},
};

impl ContentQueryService {
    /// Drafts the caller may not see are reported as missing.
    pub async fn get(
        &self,
        actor: Option<&AuthenticatedUser>,
        kind: ContentKind,
        id: i64,
    ) -> ApplicationResult<ContentDto> {
        let not_found = || ApplicationError::not_found(format!("{} not found", kind.noun()));

        let id = ContentId::new(id).map_err(|_| not_found())?;
        let content = self
            .read_repo
            .find_by_id(kind, id)
            .await?
            .ok_or_else(not_found)?;

        if !visible_to(actor, &content) {
            return Err(not_found());
        }
        Ok(content.into())
    }
}
