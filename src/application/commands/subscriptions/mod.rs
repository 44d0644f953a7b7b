mod service;
mod toggle;

pub use service::SubscriptionCommandService;
