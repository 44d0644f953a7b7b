// tests/support/mocks/store.rs
//! One in-memory database behind every repository port.
use async_trait::async_trait;
use bronews::domain::{
    content::{
        Content, ContentId, ContentKind, ContentReadRepository, ContentUpdate,
        ContentWriteRepository, NewContent,
    },
    errors::{DomainError, DomainResult},
    publisher::{NewPublisher, Publisher, PublisherId, PublisherRepository},
    subscription::{SubscriptionKind, SubscriptionRepository, SubscriptionTarget},
    user::{NewUser, User, UserId, UserRepository, UserUpdate, Username},
};
use chrono::{DateTime, Utc};
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    publishers: Vec<Publisher>,
    content: Vec<Content>,
    /// (reader, target) in subscription order.
    subscriptions: Vec<(UserId, SubscriptionTarget)>,
    next_user: i64,
    next_publisher: i64,
    next_content: i64,
    /// Make the subscription half of a role change fail.
    fail_subscription_clear: bool,
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().expect("store mutex poisoned")
    }

    pub fn user(&self, id: i64) -> Option<User> {
        self.tables().users.iter().find(|u| u.id.0 == id).cloned()
    }

    pub fn content(&self, kind: ContentKind, id: i64) -> Option<Content> {
        self.tables()
            .content
            .iter()
            .find(|c| c.kind == kind && c.id.0 == id)
            .cloned()
    }

    pub fn subscriptions_of(&self, reader: i64) -> Vec<SubscriptionTarget> {
        self.tables()
            .subscriptions
            .iter()
            .filter(|(r, _)| r.0 == reader)
            .map(|(_, target)| *target)
            .collect()
    }

    /// Every later write that clears subscriptions fails with a persistence
    /// error and leaves the store untouched.
    pub fn fail_subscription_clears(&self) {
        self.tables().fail_subscription_clear = true;
    }

    /// Approve directly, bypassing the service and its notifications.
    pub fn force_approve(&self, kind: ContentKind, id: i64) {
        let mut tables = self.tables();
        if let Some(row) = tables
            .content
            .iter_mut()
            .find(|c| c.kind == kind && c.id.0 == id)
        {
            row.is_approved = true;
        }
    }
}

fn sorted_by_id<T: Clone, K: Ord>(rows: impl Iterator<Item = T>, key: impl Fn(&T) -> K) -> Vec<T> {
    let mut rows: Vec<T> = rows.collect();
    rows.sort_by_key(key);
    rows
}

/* -------------------------------- users -------------------------------- */

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut tables = self.tables();
        if tables.users.iter().any(|u| u.username == new_user.username) {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        tables.next_user += 1;
        let user = User {
            id: UserId::new(tables.next_user)?,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            profile: new_user.profile,
            created_at: new_user.created_at,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut tables = self.tables();
        if let Some(username) = &update.username {
            if tables
                .users
                .iter()
                .any(|u| &u.username == username && u.id != update.id)
            {
                return Err(DomainError::Conflict("username already exists".into()));
            }
        }
        let index = tables
            .users
            .iter()
            .position(|u| u.id == update.id)
            .ok_or_else(|| DomainError::not_found("user"))?;
        if update.clear_subscriptions {
            if tables.fail_subscription_clear {
                return Err(DomainError::Persistence("subscription tables unavailable".into()));
            }
            tables.subscriptions.retain(|(reader, _)| *reader != update.id);
        }
        let user = &mut tables.users[index];
        if let Some(username) = update.username {
            user.username = username;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(profile) = update.profile {
            user.profile = profile;
        }
        Ok(user.clone())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .tables()
            .users
            .iter()
            .find(|u| &u.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.tables().users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>> {
        let tables = self.tables();
        Ok(sorted_by_id(
            tables.users.iter().filter(|u| ids.contains(&u.id)).cloned(),
            |u| u.id,
        ))
    }
}

/* -------------------------------- publishers -------------------------------- */

#[async_trait]
impl PublisherRepository for InMemoryStore {
    async fn insert(&self, publisher: NewPublisher) -> DomainResult<Publisher> {
        let mut tables = self.tables();
        if tables.publishers.iter().any(|p| p.name == publisher.name) {
            return Err(DomainError::Conflict(format!(
                "publisher '{}' already exists",
                publisher.name
            )));
        }
        tables.next_publisher += 1;
        let row = Publisher {
            id: PublisherId::new(tables.next_publisher)?,
            name: publisher.name,
            admin_id: publisher.admin_id,
            content: publisher.content,
            created_at: publisher.created_at,
        };
        tables.publishers.push(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: PublisherId) -> DomainResult<Option<Publisher>> {
        Ok(self.tables().publishers.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[PublisherId]) -> DomainResult<Vec<Publisher>> {
        let tables = self.tables();
        Ok(sorted_by_id(
            tables
                .publishers
                .iter()
                .filter(|p| ids.contains(&p.id))
                .cloned(),
            |p| p.id,
        ))
    }

    async fn list(&self) -> DomainResult<Vec<Publisher>> {
        Ok(self.tables().publishers.clone())
    }

    async fn list_by_admin(&self, admin_id: UserId) -> DomainResult<Vec<Publisher>> {
        Ok(self
            .tables()
            .publishers
            .iter()
            .filter(|p| p.admin_id == admin_id)
            .cloned()
            .collect())
    }
}

/* -------------------------------- content -------------------------------- */

#[async_trait]
impl ContentWriteRepository for InMemoryStore {
    async fn insert(&self, content: NewContent) -> DomainResult<Content> {
        let mut tables = self.tables();
        tables.next_content += 1;
        let row = Content {
            id: ContentId::new(tables.next_content)?,
            kind: content.kind,
            title: content.title,
            body: content.body,
            author_id: content.author_id,
            publisher_id: content.publisher_id,
            is_approved: false,
            created_at: content.created_at,
            updated_at: content.created_at,
        };
        tables.content.push(row.clone());
        Ok(row)
    }

    async fn update(&self, update: ContentUpdate) -> DomainResult<Content> {
        let mut tables = self.tables();
        let row = tables
            .content
            .iter_mut()
            .find(|c| c.kind == update.kind && c.id == update.id)
            .ok_or_else(|| DomainError::not_found(update.kind))?;
        row.set_content(
            update.title,
            update.body,
            update.publisher_id,
            update.updated_at,
        );
        Ok(row.clone())
    }

    async fn mark_approved(
        &self,
        kind: ContentKind,
        id: ContentId,
        at: DateTime<Utc>,
    ) -> DomainResult<Option<Content>> {
        let mut tables = self.tables();
        Ok(tables
            .content
            .iter_mut()
            .find(|c| c.kind == kind && c.id == id)
            .and_then(|row| row.approve(at).then(|| row.clone())))
    }

    async fn delete(&self, kind: ContentKind, id: ContentId) -> DomainResult<()> {
        self.tables()
            .content
            .retain(|c| !(c.kind == kind && c.id == id));
        Ok(())
    }
}

impl InMemoryStore {
    fn select(&self, kind: ContentKind, keep: impl Fn(&Content) -> bool) -> Vec<Content> {
        self.tables()
            .content
            .iter()
            .filter(|c| c.kind == kind && keep(c))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ContentReadRepository for InMemoryStore {
    async fn find_by_id(&self, kind: ContentKind, id: ContentId) -> DomainResult<Option<Content>> {
        Ok(self.select(kind, |c| c.id == id).into_iter().next())
    }

    async fn list(&self, kind: ContentKind) -> DomainResult<Vec<Content>> {
        Ok(self.select(kind, |_| true))
    }

    async fn list_by_publisher(
        &self,
        kind: ContentKind,
        publisher_id: PublisherId,
    ) -> DomainResult<Vec<Content>> {
        Ok(self.select(kind, |c| c.publisher_id == Some(publisher_id)))
    }

    async fn list_by_author(
        &self,
        kind: ContentKind,
        author_id: UserId,
    ) -> DomainResult<Vec<Content>> {
        Ok(self.select(kind, |c| c.author_id == author_id))
    }

    async fn list_pending(&self, kind: ContentKind) -> DomainResult<Vec<Content>> {
        Ok(self.select(kind, |c| !c.is_approved))
    }

    async fn list_approved_by_authors(
        &self,
        kind: ContentKind,
        authors: &[UserId],
    ) -> DomainResult<Vec<Content>> {
        Ok(self.select(kind, |c| c.is_approved && authors.contains(&c.author_id)))
    }
}

/* -------------------------------- subscriptions -------------------------------- */

#[async_trait]
impl SubscriptionRepository for InMemoryStore {
    async fn add_subscription(
        &self,
        reader: UserId,
        target: SubscriptionTarget,
    ) -> DomainResult<()> {
        let mut tables = self.tables();
        if !tables.subscriptions.contains(&(reader, target)) {
            tables.subscriptions.push((reader, target));
        }
        Ok(())
    }

    async fn remove_subscription(
        &self,
        reader: UserId,
        target: SubscriptionTarget,
    ) -> DomainResult<()> {
        self.tables()
            .subscriptions
            .retain(|pair| *pair != (reader, target));
        Ok(())
    }

    async fn is_subscribed(&self, reader: UserId, target: SubscriptionTarget) -> DomainResult<bool> {
        Ok(self.tables().subscriptions.contains(&(reader, target)))
    }

    async fn list_subscriptions(
        &self,
        reader: UserId,
        kind: SubscriptionKind,
    ) -> DomainResult<Vec<SubscriptionTarget>> {
        Ok(self
            .tables()
            .subscriptions
            .iter()
            .filter(|(r, target)| *r == reader && target.kind() == kind)
            .map(|(_, target)| *target)
            .collect())
    }

    async fn list_subscribers(&self, target: SubscriptionTarget) -> DomainResult<Vec<UserId>> {
        Ok(self
            .tables()
            .subscriptions
            .iter()
            .filter(|(_, t)| *t == target)
            .map(|(reader, _)| *reader)
            .collect())
    }

    async fn clear_subscriptions(&self, reader: UserId) -> DomainResult<()> {
        self.tables().subscriptions.retain(|(r, _)| *r != reader);
        Ok(())
    }
}
