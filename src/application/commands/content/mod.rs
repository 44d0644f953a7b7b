mod approve;
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateContentCommand;
pub use service::ContentCommandService;
pub use update::UpdateContentCommand;
