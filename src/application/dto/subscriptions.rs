use crate::domain::subscription::SubscriptionKind;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionToggleState {
    Subscribed,
    Unsubscribed,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionToggleDto {
    pub target_kind: SubscriptionKind,
    pub target_id: i64,
    pub target_name: String,
    pub state: SubscriptionToggleState,
}

impl SubscriptionToggleDto {
    pub fn message(&self) -> String {
        match self.state {
            SubscriptionToggleState::Subscribed => {
                format!("You have subscribed to {}.", self.target_name)
            }
            SubscriptionToggleState::Unsubscribed => {
                format!("You have unsubscribed from {}.", self.target_name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_differ_by_direction() {
        let mut dto = SubscriptionToggleDto {
            target_kind: SubscriptionKind::Publisher,
            target_id: 1,
            target_name: "Daily Planet".into(),
            state: SubscriptionToggleState::Subscribed,
        };
        assert_eq!(dto.message(), "You have subscribed to Daily Planet.");
        dto.state = SubscriptionToggleState::Unsubscribed;
        assert_eq!(dto.message(), "You have unsubscribed from Daily Planet.");
    }
}
