//! Durable storage and retrieval of newsletter records.

use chrono::Utc;
use sqlx::PgPool;

use crate::domain::{
    NewNewsletter,
    Newsletter,
    NewsletterUpdate,
};

/// Handle on the `newsletters` table.
///
/// It is built once at startup and shared with every handler through
/// `web::Data`; cloning it clones the underlying pool handle, not the pool.
#[derive(Clone, Debug)]
pub struct NewsletterStore {
    pool: PgPool,
}

impl NewsletterStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Every record, in insertion order.
    #[tracing::instrument(name = "retrieving all newsletter records", skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Newsletter>, sqlx::Error> {
        sqlx::query_as::<_, Newsletter>(
            "SELECT id, title, body, published_at FROM newsletters ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            e
        })
    }

    /// Lookup by identifier: an unknown id is `None`, never an error.
    #[tracing::instrument(name = "retrieving newsletter record", skip(self))]
    pub async fn get(&self, id: i64) -> Result<Option<Newsletter>, sqlx::Error> {
        sqlx::query_as::<_, Newsletter>(
            "SELECT id, title, body, published_at FROM newsletters WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            e
        })
    }

    /// Persist a new record: the store assigns the id and the publish
    /// timestamp.
    #[tracing::instrument(
        name = "inserting newsletter record",
        skip(self, new_newsletter),
        fields(title = %new_newsletter.title.as_ref())
    )]
    pub async fn create(&self, new_newsletter: &NewNewsletter) -> Result<Newsletter, sqlx::Error> {
        sqlx::query_as::<_, Newsletter>(
            "INSERT INTO newsletters (title, body, published_at) VALUES ($1, $2, $3) \
             RETURNING id, title, body, published_at",
        )
        .bind(new_newsletter.title.as_ref())
        .bind(new_newsletter.body.as_ref())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            e
        })
    }

    /// Merge update: absent fields keep their stored value. `None` when the
    /// id does not resolve to a record.
    #[tracing::instrument(name = "updating newsletter record", skip(self, update))]
    pub async fn update(
        &self,
        id: i64,
        update: &NewsletterUpdate,
    ) -> Result<Option<Newsletter>, sqlx::Error> {
        let title: Option<&str> = update.title.as_ref().map(|t| t.as_ref());
        let body: Option<&str> = update.body.as_ref().map(|b| b.as_ref());
        sqlx::query_as::<_, Newsletter>(
            "UPDATE newsletters SET title = COALESCE($2, title), body = COALESCE($3, body) \
             WHERE id = $1 RETURNING id, title, body, published_at",
        )
        .bind(id)
        .bind(title)
        .bind(body)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            e
        })
    }

    /// Remove the record permanently. `false` when the id does not resolve.
    #[tracing::instrument(name = "deleting newsletter record", skip(self))]
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM newsletters WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to execute query: {:?}", e);
                e
            })?;
        Ok(result.rows_affected() > 0)
    }
}
