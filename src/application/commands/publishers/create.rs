use super::PublisherCommandService;
use crate::{
    application::{
        authorization::{Action, authorize},
        dto::{AuthenticatedUser, PublisherDto},
        error::ApplicationResult,
    },
    domain::publisher::{NewPublisher, PublisherName},
};

pub struct CreatePublisherCommand {
    pub name: String,
    pub content: Option<String>,
}

impl PublisherCommandService {
    /// The creator becomes the publisher's admin.
    pub async fn create_publisher(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: CreatePublisherCommand,
    ) -> ApplicationResult<PublisherDto> {
        let actor = authorize(actor, Action::CreatePublisher)?;

        let new_publisher = NewPublisher {
            name: PublisherName::new(command.name)?,
            admin_id: actor.id,
            content: command.content.filter(|text| !text.trim().is_empty()),
            created_at: self.clock.now(),
        };

        let publisher = self.publisher_repo.insert(new_publisher).await?;
        tracing::info!(publisher_id = %publisher.id.0, admin_id = %actor.id, "publisher created");
        Ok(publisher.into())
    }
}
