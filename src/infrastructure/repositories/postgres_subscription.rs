// src/infrastructure/repositories/postgres_subscription.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::publisher::PublisherId;
use crate::domain::subscription::{SubscriptionKind, SubscriptionRepository, SubscriptionTarget};
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

#[derive(Clone)]
pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Join table and target column for each subscription kind.
fn table_for(kind: SubscriptionKind) -> (&'static str, &'static str) {
    match kind {
        SubscriptionKind::Journalist => ("journalist_subscriptions", "journalist_id"),
        SubscriptionKind::Publisher => ("publisher_subscriptions", "publisher_id"),
    }
}

/// Drop every subscription the reader holds. Runs on the caller's
/// connection so it can share a transaction with a role change.
pub(super) async fn delete_all_for_reader(
    conn: &mut PgConnection,
    reader: UserId,
) -> DomainResult<()> {
    for kind in [SubscriptionKind::Journalist, SubscriptionKind::Publisher] {
        let (table, _) = table_for(kind);
        sqlx::query(&format!("DELETE FROM {table} WHERE reader_id = $1"))
            .bind(i64::from(reader))
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx)?;
    }
    Ok(())
}

fn target_from(kind: SubscriptionKind, raw: i64) -> DomainResult<SubscriptionTarget> {
    Ok(match kind {
        SubscriptionKind::Journalist => SubscriptionTarget::Journalist(UserId::new(raw)?),
        SubscriptionKind::Publisher => SubscriptionTarget::Publisher(PublisherId::new(raw)?),
    })
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn add_subscription(
        &self,
        reader: UserId,
        target: SubscriptionTarget,
    ) -> DomainResult<()> {
        let (table, column) = table_for(target.kind());
        sqlx::query(&format!(
            "INSERT INTO {table} (reader_id, {column}) VALUES ($1, $2) ON CONFLICT DO NOTHING"
        ))
        .bind(i64::from(reader))
        .bind(target.raw_id())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn remove_subscription(
        &self,
        reader: UserId,
        target: SubscriptionTarget,
    ) -> DomainResult<()> {
        let (table, column) = table_for(target.kind());
        sqlx::query(&format!(
            "DELETE FROM {table} WHERE reader_id = $1 AND {column} = $2"
        ))
        .bind(i64::from(reader))
        .bind(target.raw_id())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn is_subscribed(
        &self,
        reader: UserId,
        target: SubscriptionTarget,
    ) -> DomainResult<bool> {
        let (table, column) = table_for(target.kind());
        sqlx::query_scalar::<_, bool>(&format!(
            "SELECT EXISTS (SELECT 1 FROM {table} WHERE reader_id = $1 AND {column} = $2)"
        ))
        .bind(i64::from(reader))
        .bind(target.raw_id())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn list_subscriptions(
        &self,
        reader: UserId,
        kind: SubscriptionKind,
    ) -> DomainResult<Vec<SubscriptionTarget>> {
        let (table, column) = table_for(kind);
        let ids = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT {column} FROM {table} WHERE reader_id = $1 ORDER BY created_at, {column}"
        ))
        .bind(i64::from(reader))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ids.into_iter().map(|raw| target_from(kind, raw)).collect()
    }

    async fn list_subscribers(&self, target: SubscriptionTarget) -> DomainResult<Vec<UserId>> {
        let (table, column) = table_for(target.kind());
        let ids = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT reader_id FROM {table} WHERE {column} = $1 ORDER BY reader_id"
        ))
        .bind(target.raw_id())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ids.into_iter().map(UserId::new).collect()
    }

    async fn clear_subscriptions(&self, reader: UserId) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        delete_all_for_reader(&mut *tx, reader).await?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(())
    }
}
