use crate::row::uuid_column;
use crate::Result as DbErrorResult;

use sm_core::{FollowEdge, PageRequest};

use uuid::Uuid;

/// Stateless queries over the `follows` table. Every method takes an
/// executor so the follow store can run them inside one transaction.
pub struct FollowRepository;

impl FollowRepository {
    pub async fn user_exists<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM users WHERE id = ?")
            .bind(user_id.to_string())
            .fetch_optional(executor)
            .await?;

        Ok(found.is_some())
    }

    pub async fn exists<'e, E>(executor: E, follower_id: Uuid, followee_id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let found: Option<i64> = sqlx::query_scalar(
            "SELECT 1 FROM follows WHERE follower_id = ? AND followee_id = ?",
        )
        .bind(follower_id.to_string())
        .bind(followee_id.to_string())
        .fetch_optional(executor)
        .await?;

        Ok(found.is_some())
    }

    pub async fn create<'e, E>(executor: E, edge: &FollowEdge) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
              INSERT INTO follows (follower_id, followee_id, created_at)
              VALUES (?, ?, ?)
              "#,
        )
        .bind(edge.follower_id.to_string())
        .bind(edge.followee_id.to_string())
        .bind(edge.created_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn delete<'e, E>(executor: E, follower_id: Uuid, followee_id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM follows WHERE follower_id = ? AND followee_id = ?")
            .bind(follower_id.to_string())
            .bind(followee_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Users `user_id` follows, oldest edge first
    pub async fn following<'e, E>(executor: E, user_id: Uuid, page: PageRequest) -> DbErrorResult<Vec<Uuid>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let ids: Vec<String> = sqlx::query_scalar(
            r#"
              SELECT followee_id
              FROM follows
              WHERE follower_id = ?
              ORDER BY seq ASC
              LIMIT ? OFFSET ?
              "#,
        )
        .bind(user_id.to_string())
        .bind(page.limit as i64)
        .bind(page.offset as i64)
        .fetch_all(executor)
        .await?;

        ids.iter().map(|id| uuid_column("follows", id)).collect()
    }

    /// Users following `user_id`, oldest edge first
    pub async fn followers<'e, E>(executor: E, user_id: Uuid, page: PageRequest) -> DbErrorResult<Vec<Uuid>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let ids: Vec<String> = sqlx::query_scalar(
            r#"
              SELECT follower_id
              FROM follows
              WHERE followee_id = ?
              ORDER BY seq ASC
              LIMIT ? OFFSET ?
              "#,
        )
        .bind(user_id.to_string())
        .bind(page.limit as i64)
        .bind(page.offset as i64)
        .fetch_all(executor)
        .await?;

        ids.iter().map(|id| uuid_column("follows", id)).collect()
    }

    pub async fn count<'e, E>(executor: E) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM follows")
            .fetch_one(executor)
            .await?;

        Ok(count)
    }
}
