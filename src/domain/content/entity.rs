// src/domain/content/entity.rs
use crate::domain::content::value_objects::{ContentBody, ContentId, ContentKind, ContentTitle};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// An article or a newsletter.
#[derive(Debug, Clone)]
pub struct Content {
    pub id: ContentId,
    pub kind: ContentKind,
    pub title: ContentTitle,
    pub body: ContentBody,
    pub author_id: UserId,
    pub publisher_id: Option<PublisherId>,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Content {
    /// Returns `false` when the content was already approved; approval never
    /// goes back.
    pub fn approve(&mut self, now: DateTime<Utc>) -> bool {
        if self.is_approved {
            return false;
        }
        self.is_approved = true;
        self.updated_at = now;
        true
    }

    pub fn set_content(
        &mut self,
        title: ContentTitle,
        body: ContentBody,
        publisher_id: Option<PublisherId>,
        now: DateTime<Utc>,
    ) {
        self.title = title;
        self.body = body;
        self.publisher_id = publisher_id;
        self.updated_at = now;
    }

    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct NewContent {
    pub kind: ContentKind,
    pub title: ContentTitle,
    pub body: ContentBody,
    pub author_id: UserId,
    pub publisher_id: Option<PublisherId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ContentUpdate {
    pub kind: ContentKind,
    pub id: ContentId,
    pub title: ContentTitle,
    pub body: ContentBody,
    pub publisher_id: Option<PublisherId>,
    pub updated_at: DateTime<Utc>,
}

impl ContentUpdate {
    pub fn from_content(content: &Content) -> Self {
        Self {
            kind: content.kind,
            id: content.id,
            title: content.title.clone(),
            body: content.body.clone(),
            publisher_id: content.publisher_id,
            updated_at: content.updated_at,
        }
    }
}
