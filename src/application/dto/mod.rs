pub mod auth;
pub mod content;
pub mod publishers;
pub mod serde_time;
pub mod subscriptions;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject, VerifiedToken};
pub use content::{
    AdminDashboardDto, ApprovalReportDto, ContentDto, DeliveryStatus, EditorDashboardDto,
    FeedArticleDto, JournalistDashboardDto,
};
pub use publishers::{PublisherDetailDto, PublisherDto, PublisherSummaryDto};
pub use subscriptions::{SubscriptionToggleDto, SubscriptionToggleState};
pub use users::{JournalistDetailDto, ProfileDto, UserDto, UserSummaryDto};
