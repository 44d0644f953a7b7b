// src/domain/publisher/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const PUBLISHER_NAME_MAX_LEN: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PublisherId(pub i64);

impl PublisherId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "publisher id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PublisherId> for i64 {
    fn from(value: PublisherId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherName(String);

impl PublisherName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "publisher name cannot be empty".into(),
            ));
        }
        if value.chars().count() > PUBLISHER_NAME_MAX_LEN {
            return Err(DomainError::Validation(format!(
                "publisher name must be at most {PUBLISHER_NAME_MAX_LEN} characters"
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

impl fmt::Display for PublisherName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed_and_bounded() {
        assert_eq!(PublisherName::new("  Daily Bro ").unwrap().as_str(), "Daily Bro");
        assert!(PublisherName::new("   ").is_err());
        assert!(PublisherName::new("x".repeat(PUBLISHER_NAME_MAX_LEN)).is_ok());
        assert!(PublisherName::new("x".repeat(PUBLISHER_NAME_MAX_LEN + 1)).is_err());
    }
}
