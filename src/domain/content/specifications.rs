use std::collections::HashSet;

use crate::domain::content::entity::Content;
use crate::domain::user::value_objects::{Capability, UserId};

pub trait ContentSpecification {
    fn is_satisfied(&self) -> bool;
}

fn has_capability(capabilities: &HashSet<Capability>, resource: &str, action: &str) -> bool {
    capabilities
        .iter()
        .any(|cap| cap.matches(resource, action))
}

/// The author may always edit their own piece; anyone holding
/// `<kind>:update:any` may edit every piece of that kind.
pub struct CanModifyContentSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    content: &'a Content,
    user_id: UserId,
}

impl<'a> CanModifyContentSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        content: &'a Content,
        user_id: UserId,
    ) -> Self {
        Self {
            capabilities,
            content,
            user_id,
        }
    }
}

impl ContentSpecification for CanModifyContentSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.content.is_authored_by(self.user_id)
            || has_capability(self.capabilities, self.content.kind.resource(), "update:any")
    }
}

pub struct CanDeleteContentSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    content: &'a Content,
    user_id: UserId,
}

impl<'a> CanDeleteContentSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        content: &'a Content,
        user_id: UserId,
    ) -> Self {
        Self {
            capabilities,
            content,
            user_id,
        }
    }
}

impl ContentSpecification for CanDeleteContentSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.content.is_authored_by(self.user_id)
            || has_capability(self.capabilities, self.content.kind.resource(), "delete:any")
    }
}

/// Approved content is public. Drafts are visible to the author and to
/// whoever may approve them.
pub struct CanViewContentSpec<'a> {
    capabilities: Option<&'a HashSet<Capability>>,
    content: &'a Content,
    user_id: Option<UserId>,
}

impl<'a> CanViewContentSpec<'a> {
    pub fn new(
        capabilities: Option<&'a HashSet<Capability>>,
        content: &'a Content,
        user_id: Option<UserId>,
    ) -> Self {
        Self {
            capabilities,
            content,
            user_id,
        }
    }
}

impl ContentSpecification for CanViewContentSpec<'_> {
    fn is_satisfied(&self) -> bool {
        if self.content.is_approved {
            return true;
        }
        if self.user_id.is_some_and(|id| self.content.is_authored_by(id)) {
            return true;
        }
        self.capabilities
            .is_some_and(|caps| has_capability(caps, self.content.kind.resource(), "approve"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::value_objects::{ContentBody, ContentId, ContentKind, ContentTitle};
    use crate::domain::user::Role;
    use chrono::Utc;

    fn draft_by(author: i64) -> Content {
        Content {
            id: ContentId::new(1).unwrap(),
            kind: ContentKind::Article,
            title: ContentTitle::new("draft").unwrap(),
            body: ContentBody::default(),
            author_id: UserId::new(author).unwrap(),
            publisher_id: None,
            is_approved: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn author_or_editor_may_modify() {
        let content = draft_by(1);
        let journalist = Role::Journalist.default_capabilities();
        let editor = Role::Editor.default_capabilities();

        assert!(CanModifyContentSpec::new(&journalist, &content, UserId(1)).is_satisfied());
        assert!(!CanModifyContentSpec::new(&journalist, &content, UserId(2)).is_satisfied());
        assert!(CanModifyContentSpec::new(&editor, &content, UserId(2)).is_satisfied());
        assert!(CanDeleteContentSpec::new(&editor, &content, UserId(2)).is_satisfied());
        assert!(!CanDeleteContentSpec::new(&journalist, &content, UserId(2)).is_satisfied());
    }

    #[test]
    fn drafts_are_hidden_from_the_public() {
        let mut content = draft_by(1);
        let reader = Role::Reader.default_capabilities();
        let editor = Role::Editor.default_capabilities();

        assert!(!CanViewContentSpec::new(None, &content, None).is_satisfied());
        assert!(!CanViewContentSpec::new(Some(&reader), &content, Some(UserId(5))).is_satisfied());
        assert!(CanViewContentSpec::new(Some(&reader), &content, Some(UserId(1))).is_satisfied());
        assert!(CanViewContentSpec::new(Some(&editor), &content, Some(UserId(5))).is_satisfied());

        content.is_approved = true;
        assert!(CanViewContentSpec::new(None, &content, None).is_satisfied());
    }
}
