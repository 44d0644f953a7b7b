// src/infrastructure/repositories/postgres_content.rs
//! Articles and newsletters live in two tables with identical columns. The
//! table name always comes from `ContentKind::resource`, never from input.
use super::map_sqlx;
use crate::domain::content::{
    Content, ContentBody, ContentId, ContentKind, ContentReadRepository, ContentTitle,
    ContentUpdate, ContentWriteRepository, NewContent,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const CONTENT_COLUMNS: &str =
    "id, title, content, author_id, publisher_id, is_approved, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresContentWriteRepository {
    pool: PgPool,
}

impl PostgresContentWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresContentReadRepository {
    pool: PgPool,
}

impl PostgresContentReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContentRow {
    id: i64,
    title: String,
    content: Option<String>,
    author_id: i64,
    publisher_id: Option<i64>,
    is_approved: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ContentRow {
    fn into_content(self, kind: ContentKind) -> DomainResult<Content> {
        Ok(Content {
            id: ContentId::new(self.id)?,
            kind,
            title: ContentTitle::new(self.title)?,
            body: ContentBody::new(self.content),
            author_id: UserId::new(self.author_id)?,
            publisher_id: self.publisher_id.map(PublisherId::new).transpose()?,
            is_approved: self.is_approved,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn into_contents(kind: ContentKind, rows: Vec<ContentRow>) -> DomainResult<Vec<Content>> {
    rows.into_iter().map(|row| row.into_content(kind)).collect()
}

fn select_from(kind: ContentKind) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT ");
    builder.push(CONTENT_COLUMNS);
    builder.push(" FROM ");
    builder.push(kind.resource());
    builder
}

#[async_trait]
impl ContentWriteRepository for PostgresContentWriteRepository {
    async fn insert(&self, content: NewContent) -> DomainResult<Content> {
        let NewContent {
            kind,
            title,
            body,
            author_id,
            publisher_id,
            created_at,
        } = content;

        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "INSERT INTO {table} (title, content, author_id, publisher_id, is_approved, created_at, updated_at)
             VALUES ($1, $2, $3, $4, FALSE, $5, $5)
             RETURNING {CONTENT_COLUMNS}",
            table = kind.resource(),
        ))
        .bind(title.as_str())
        .bind(body.as_deref())
        .bind(i64::from(author_id))
        .bind(publisher_id.map(i64::from))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.into_content(kind)
    }

    async fn update(&self, update: ContentUpdate) -> DomainResult<Content> {
        let ContentUpdate {
            kind,
            id,
            title,
            body,
            publisher_id,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "UPDATE {table}
             SET title = $2, content = $3, publisher_id = $4, updated_at = $5
             WHERE id = $1
             RETURNING {CONTENT_COLUMNS}",
            table = kind.resource(),
        ))
        .bind(i64::from(id))
        .bind(title.as_str())
        .bind(body.as_deref())
        .bind(publisher_id.map(i64::from))
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found(kind))?;

        row.into_content(kind)
    }

    async fn mark_approved(
        &self,
        kind: ContentKind,
        id: ContentId,
        at: DateTime<Utc>,
    ) -> DomainResult<Option<Content>> {
        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "UPDATE {table}
             SET is_approved = TRUE, updated_at = $2
             WHERE id = $1 AND is_approved = FALSE
             RETURNING {CONTENT_COLUMNS}",
            table = kind.resource(),
        ))
        .bind(i64::from(id))
        .bind(at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(|row| row.into_content(kind)).transpose()
    }

    async fn delete(&self, kind: ContentKind, id: ContentId) -> DomainResult<()> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", kind.resource()))
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(kind));
        }
        Ok(())
    }
}

impl PostgresContentReadRepository {
    async fn fetch(
        &self,
        kind: ContentKind,
        mut builder: QueryBuilder<'_, Postgres>,
    ) -> DomainResult<Vec<Content>> {
        builder.push(" ORDER BY id");
        let rows = builder
            .build_query_as::<ContentRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        into_contents(kind, rows)
    }
}

#[async_trait]
impl ContentReadRepository for PostgresContentReadRepository {
    async fn find_by_id(&self, kind: ContentKind, id: ContentId) -> DomainResult<Option<Content>> {
        let mut builder = select_from(kind);
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));

        let row = builder
            .build_query_as::<ContentRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(|row| row.into_content(kind)).transpose()
    }

    async fn list(&self, kind: ContentKind) -> DomainResult<Vec<Content>> {
        self.fetch(kind, select_from(kind)).await
    }

    async fn list_by_publisher(
        &self,
        kind: ContentKind,
        publisher_id: PublisherId,
    ) -> DomainResult<Vec<Content>> {
        let mut builder = select_from(kind);
        builder.push(" WHERE publisher_id = ");
        builder.push_bind(i64::from(publisher_id));
        self.fetch(kind, builder).await
    }

    async fn list_by_author(
        &self,
        kind: ContentKind,
        author_id: UserId,
    ) -> DomainResult<Vec<Content>> {
        let mut builder = select_from(kind);
        builder.push(" WHERE author_id = ");
        builder.push_bind(i64::from(author_id));
        self.fetch(kind, builder).await
    }

    async fn list_pending(&self, kind: ContentKind) -> DomainResult<Vec<Content>> {
        let mut builder = select_from(kind);
        builder.push(" WHERE is_approved = FALSE");
        self.fetch(kind, builder).await
    }

    async fn list_approved_by_authors(
        &self,
        kind: ContentKind,
        authors: &[UserId],
    ) -> DomainResult<Vec<Content>> {
        if authors.is_empty() {
            return Ok(Vec::new());
        }
        let authors: Vec<i64> = authors.iter().copied().map(i64::from).collect();

        let mut builder = select_from(kind);
        builder.push(" WHERE is_approved = TRUE AND author_id = ANY(");
        builder.push_bind(authors);
        builder.push(")");
        self.fetch(kind, builder).await
    }
}
