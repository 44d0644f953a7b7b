use super::PublisherQueryService;
use crate::{
    application::{
        authorization::{Action, authorize},
        dto::{AdminDashboardDto, AuthenticatedUser, PublisherDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Role,
};

impl PublisherQueryService {
    pub async fn list_publishers(
        &self,
        actor: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<Vec<PublisherDto>> {
        if actor.is_none() {
            return Err(ApplicationError::unauthorized(
                "You must be logged in to view publishers.",
            ));
        }
        let publishers = self.publisher_repo.list().await?;
        Ok(publishers.into_iter().map(PublisherDto::from).collect())
    }

    /// Publishers the caller administers.
    pub async fn admin_dashboard(
        &self,
        actor: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<AdminDashboardDto> {
        let admin = authorize(actor, Action::ViewDashboard(Role::Admin))?;
        let publishers = self.publisher_repo.list_by_admin(admin.id).await?;
        Ok(AdminDashboardDto {
            publishers: publishers.into_iter().map(PublisherDto::from).collect(),
        })
    }
}
