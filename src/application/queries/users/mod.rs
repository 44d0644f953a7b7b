mod journalist;
mod profile;
mod service;

pub use service::UserQueryService;
