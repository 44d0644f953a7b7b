mod dashboard;
mod feed;
mod get;
mod list;
mod service;

pub use service::ContentQueryService;
pub(crate) use service::visible_to;
