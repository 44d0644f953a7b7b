use super::{ContentQueryService, service::visible_to};
use crate::{
    application::{
        dto::{AuthenticatedUser, ContentDto},
        error::ApplicationResult,
    },
    domain::content::ContentKind,
};

impl ContentQueryService {
    /// Every piece of `kind` the caller may see, oldest first.
    pub async fn list(
        &self,
        actor: Option<&AuthenticatedUser>,
        kind: ContentKind,
    ) -> ApplicationResult<Vec<ContentDto>> {
        let items = self.read_repo.list(kind).await?;
        Ok(items
            .into_iter()
            .filter(|content| visible_to(actor, content))
            .map(ContentDto::from)
            .collect())
    }
}
