// src/infrastructure/repositories/postgres_publisher.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publisher::{
    NewPublisher, Publisher, PublisherId, PublisherName, PublisherRepository,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const PUBLISHER_COLUMNS: &str = "id, name, admin_id, content, created_at";

#[derive(Clone)]
pub struct PostgresPublisherRepository {
    pool: PgPool,
}

impl PostgresPublisherRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_all(&self, sql: &str, bind: Option<i64>) -> DomainResult<Vec<Publisher>> {
        let mut query = sqlx::query_as::<_, PublisherRow>(sql);
        if let Some(value) = bind {
            query = query.bind(value);
        }
        let rows = query.fetch_all(&self.pool).await.map_err(map_sqlx)?;
        rows.into_iter().map(Publisher::try_from).collect()
    }
}

#[derive(Debug, FromRow)]
struct PublisherRow {
    id: i64,
    name: String,
    admin_id: i64,
    content: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<PublisherRow> for Publisher {
    type Error = DomainError;

    fn try_from(row: PublisherRow) -> Result<Self, Self::Error> {
        Ok(Publisher {
            id: PublisherId::new(row.id)?,
            name: PublisherName::new(row.name)?,
            admin_id: UserId::new(row.admin_id)?,
            content: row.content,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl PublisherRepository for PostgresPublisherRepository {
    async fn insert(&self, publisher: NewPublisher) -> DomainResult<Publisher> {
        let NewPublisher {
            name,
            admin_id,
            content,
            created_at,
        } = publisher;

        let row = sqlx::query_as::<_, PublisherRow>(&format!(
            "INSERT INTO publishers (name, admin_id, content, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {PUBLISHER_COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(i64::from(admin_id))
        .bind(content)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Publisher::try_from(row)
    }

    async fn find_by_id(&self, id: PublisherId) -> DomainResult<Option<Publisher>> {
        let row = sqlx::query_as::<_, PublisherRow>(&format!(
            "SELECT {PUBLISHER_COLUMNS} FROM publishers WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Publisher::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[PublisherId]) -> DomainResult<Vec<Publisher>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();

        let rows = sqlx::query_as::<_, PublisherRow>(&format!(
            "SELECT {PUBLISHER_COLUMNS} FROM publishers WHERE id = ANY($1) ORDER BY id"
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Publisher::try_from).collect()
    }

    async fn list(&self) -> DomainResult<Vec<Publisher>> {
        self.fetch_all(
            &format!("SELECT {PUBLISHER_COLUMNS} FROM publishers ORDER BY id"),
            None,
        )
        .await
    }

    async fn list_by_admin(&self, admin_id: UserId) -> DomainResult<Vec<Publisher>> {
        self.fetch_all(
            &format!("SELECT {PUBLISHER_COLUMNS} FROM publishers WHERE admin_id = $1 ORDER BY id"),
            Some(i64::from(admin_id)),
        )
        .await
    }
}
