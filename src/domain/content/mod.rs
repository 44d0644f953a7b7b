pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{Content, ContentUpdate, NewContent};
pub use repository::{ContentReadRepository, ContentWriteRepository};
pub use value_objects::{ContentBody, ContentId, ContentKind, ContentTitle};
