// src/domain/content/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

pub const TITLE_MAX_LEN: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentId(pub i64);

impl ContentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("content id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ContentId> for i64 {
    fn from(value: ContentId) -> Self {
        value.0
    }
}

/// Articles and newsletters share one shape and one lifecycle; the kind
/// selects the table, the capability resource and the approval side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Article,
    Newsletter,
}

impl ContentKind {
    pub const ALL: [ContentKind; 2] = [ContentKind::Article, ContentKind::Newsletter];

    /// Capability resource name, also the URL segment and table name.
    pub fn resource(&self) -> &'static str {
        match self {
            ContentKind::Article => "articles",
            ContentKind::Newsletter => "newsletters",
        }
    }

    pub fn noun(&self) -> &'static str {
        match self {
            ContentKind::Article => "article",
            ContentKind::Newsletter => "newsletter",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Article => "Article",
            ContentKind::Newsletter => "Newsletter",
        }
    }

    /// Only article approval fans out to subscribers and social media.
    pub fn notifies_subscribers(&self) -> bool {
        matches!(self, ContentKind::Article)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTitle(String);

impl ContentTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if value.chars().count() > TITLE_MAX_LEN {
            return Err(DomainError::Validation(format!(
                "title must be at most {TITLE_MAX_LEN} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContentTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Optional free text. Blank input is stored as absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentBody(Option<String>);

impl ContentBody {
    pub fn new(value: Option<String>) -> Self {
        Self(value.filter(|text| !text.trim().is_empty()))
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn into_inner(self) -> Option<String> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_rejects_blank_and_overlong() {
        assert!(ContentTitle::new("  ").is_err());
        assert!(ContentTitle::new("a".repeat(TITLE_MAX_LEN + 1)).is_err());
        assert_eq!(ContentTitle::new("Budget day").unwrap().as_str(), "Budget day");
    }

    #[test]
    fn blank_body_is_absent() {
        assert_eq!(ContentBody::new(Some(" \n".into())).as_deref(), None);
        assert_eq!(ContentBody::new(Some("text".into())).as_deref(), Some("text"));
    }

    #[test]
    fn only_articles_notify() {
        assert!(ContentKind::Article.notifies_subscribers());
        assert!(!ContentKind::Newsletter.notifies_subscribers());
    }
}
