// src/infrastructure/repositories/postgres_user.rs
use super::{map_sqlx, postgres_subscription::delete_all_for_reader};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publisher::PublisherId;
use crate::domain::user::{
    EmailAddress, NewUser, PasswordHash, Profile, User, UserId, UserRepository, UserUpdate,
    Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const USER_COLUMNS: &str = "id, username, email, password_hash, role, publisher_id, created_at";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn build_update_query(update: UserUpdate) -> QueryBuilder<'static, Postgres> {
        let UserUpdate {
            id,
            username,
            email,
            profile,
            clear_subscriptions: _,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE users SET ");
        let mut fields = builder.separated(", ");

        if let Some(username) = username {
            fields.push("username = ");
            fields.push_bind_unseparated(String::from(username));
        }

        if let Some(email) = email {
            fields.push("email = ");
            fields.push_bind_unseparated(email.map(String::from));
        }

        if let Some(profile) = profile {
            fields.push("role = ");
            fields.push_bind_unseparated(profile.role.as_str());
            fields.push("publisher_id = ");
            fields.push_bind_unseparated(profile.publisher_id.map(i64::from));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(USER_COLUMNS);

        builder
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: Option<String>,
    password_hash: String,
    role: String,
    publisher_id: Option<i64>,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            email: EmailAddress::parse_optional(row.email)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            profile: Profile {
                role: row.role.parse()?,
                publisher_id: row.publisher_id.map(PublisherId::new).transpose()?,
            },
            created_at: row.created_at,
        })
    }
}

fn into_users(rows: Vec<UserRow>) -> DomainResult<Vec<User>> {
    rows.into_iter().map(User::try_from).collect()
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            username,
            email,
            password_hash,
            profile,
            created_at,
        } = new_user;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (username, email, password_hash, role, publisher_id, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(username.as_str())
        .bind(email.as_ref().map(EmailAddress::as_str))
        .bind(password_hash.as_str())
        .bind(profile.role.as_str())
        .bind(profile.publisher_id.map(i64::from))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        if update.is_empty() {
            return Err(DomainError::Validation(
                "no fields provided for update".into(),
            ));
        }

        let id = update.id;
        let clear_subscriptions = update.clear_subscriptions;
        let has_columns =
            update.username.is_some() || update.email.is_some() || update.profile.is_some();

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let fetched = if has_columns {
            let mut builder = Self::build_update_query(update);
            builder
                .build_query_as::<UserRow>()
                .fetch_optional(&mut *tx)
                .await
        } else {
            sqlx::query_as::<_, UserRow>(&format!(
                "SELECT {USER_COLUMNS} FROM users WHERE id = $1 FOR UPDATE"
            ))
            .bind(i64::from(id))
            .fetch_optional(&mut *tx)
            .await
        };
        let row = fetched
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("user"))?;

        if clear_subscriptions {
            delete_all_for_reader(&mut *tx, id).await?;
        }
        tx.commit().await.map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();

        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ANY($1) ORDER BY id"
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_users(rows)
    }
}
