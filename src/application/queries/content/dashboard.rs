use super::ContentQueryService;
use crate::{
    application::{
        authorization::{Action, authorize},
        dto::{AuthenticatedUser, ContentDto, EditorDashboardDto, JournalistDashboardDto},
        error::ApplicationResult,
    },
    domain::{content::ContentKind, user::Role},
};

impl ContentQueryService {
    /// The caller's own articles and newsletters, approved or not.
    pub async fn journalist_dashboard(
        &self,
        actor: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<JournalistDashboardDto> {
        let journalist = authorize(actor, Action::ViewDashboard(Role::Journalist))?;

        let articles = self
            .read_repo
            .list_by_author(ContentKind::Article, journalist.id)
            .await?;
        let newsletters = self
            .read_repo
            .list_by_author(ContentKind::Newsletter, journalist.id)
            .await?;

        Ok(JournalistDashboardDto {
            articles: articles.into_iter().map(ContentDto::from).collect(),
            newsletters: newsletters.into_iter().map(ContentDto::from).collect(),
        })
    }

    /// Everything still waiting for approval.
    pub async fn editor_dashboard(
        &self,
        actor: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<EditorDashboardDto> {
        authorize(actor, Action::ViewDashboard(Role::Editor))?;

        let pending_articles = self.read_repo.list_pending(ContentKind::Article).await?;
        let pending_newsletters = self.read_repo.list_pending(ContentKind::Newsletter).await?;

        Ok(EditorDashboardDto {
            pending_articles: pending_articles.into_iter().map(ContentDto::from).collect(),
            pending_newsletters: pending_newsletters
                .into_iter()
                .map(ContentDto::from)
                .collect(),
        })
    }
}
