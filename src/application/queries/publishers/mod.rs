mod detail;
mod list;
mod service;

pub use service::PublisherQueryService;
