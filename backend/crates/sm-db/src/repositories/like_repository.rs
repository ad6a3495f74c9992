use crate::row::{timestamp_column, uuid_column};
use crate::{DbError, Result as DbErrorResult};

use sm_core::{Like, PageRequest};

use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct LikeRow {
    id: String,
    post_id: String,
    user_id: String,
    created_at: i64,
}

impl TryFrom<LikeRow> for Like {
    type Error = DbError;

    fn try_from(r: LikeRow) -> DbErrorResult<Self> {
        Ok(Like {
            id: uuid_column("likes", &r.id)?,
            post_id: uuid_column("likes", &r.post_id)?,
            user_id: uuid_column("likes", &r.user_id)?,
            created_at: timestamp_column("likes", r.created_at)?,
        })
    }
}

pub struct LikeRepository {
    pool: SqlitePool,
}

impl LikeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Record a like unless the user already likes the post.
    /// Returns the stored like and whether this call created it.
    pub async fn create(&self, like: &Like) -> DbErrorResult<(Like, bool)> {
        let result = sqlx::query(
            r#"
              INSERT OR IGNORE INTO likes (id, post_id, user_id, created_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(like.id.to_string())
        .bind(like.post_id.to_string())
        .bind(like.user_id.to_string())
        .bind(like.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        let created = result.rows_affected() > 0;
        let stored = self
            .find_by_post_and_user(like.post_id, like.user_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        Ok((stored, created))
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Like>> {
        let row: Option<LikeRow> =
            sqlx::query_as("SELECT id, post_id, user_id, created_at FROM likes WHERE id = ?")
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await?;

        row.map(Like::try_from).transpose()
    }

    pub async fn find_by_post_and_user(
        &self,
        post_id: Uuid,
        user_id: Uuid,
    ) -> DbErrorResult<Option<Like>> {
        let row: Option<LikeRow> = sqlx::query_as(
            r#"
              SELECT id, post_id, user_id, created_at
              FROM likes
              WHERE post_id = ? AND user_id = ?
              "#,
        )
        .bind(post_id.to_string())
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Like::try_from).transpose()
    }

    pub async fn find_by_post(&self, post_id: Uuid, page: PageRequest) -> DbErrorResult<Vec<Like>> {
        let rows: Vec<LikeRow> = sqlx::query_as(
            r#"
              SELECT id, post_id, user_id, created_at
              FROM likes
              WHERE post_id = ?
              ORDER BY created_at ASC, rowid ASC
              LIMIT ? OFFSET ?
              "#,
        )
        .bind(post_id.to_string())
        .bind(page.limit as i64)
        .bind(page.offset as i64)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Like::try_from).collect()
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM likes WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
