use crate::row::{timestamp_column, uuid_column};
use crate::{DbError, Result as DbErrorResult};

use sm_core::{Comment, PageRequest};

use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: String,
    post_id: String,
    author_id: String,
    content: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DbError;

    fn try_from(r: CommentRow) -> DbErrorResult<Self> {
        Ok(Comment {
            id: uuid_column("comments", &r.id)?,
            post_id: uuid_column("comments", &r.post_id)?,
            author_id: uuid_column("comments", &r.author_id)?,
            content: r.content,
            created_at: timestamp_column("comments", r.created_at)?,
            updated_at: timestamp_column("comments", r.updated_at)?,
        })
    }
}

pub struct CommentRepository {
    pool: SqlitePool,
}

impl CommentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, comment: &Comment) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO comments (id, post_id, author_id, content, created_at, updated_at)
              VALUES (?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(comment.id.to_string())
        .bind(comment.post_id.to_string())
        .bind(comment.author_id.to_string())
        .bind(&comment.content)
        .bind(comment.created_at.timestamp())
        .bind(comment.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Comment>> {
        let row: Option<CommentRow> = sqlx::query_as(
            r#"
              SELECT id, post_id, author_id, content, created_at, updated_at
              FROM comments
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Comment::try_from).transpose()
    }

    pub async fn find_by_post(&self, post_id: Uuid, page: PageRequest) -> DbErrorResult<Vec<Comment>> {
        let rows: Vec<CommentRow> = sqlx::query_as(
            r#"
              SELECT id, post_id, author_id, content, created_at, updated_at
              FROM comments
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

        rows.into_iter().map(Comment::try_from).collect()
    }

    pub async fn update(&self, comment: &Comment) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE comments SET content = ?, updated_at = ? WHERE id = ?")
            .bind(&comment.content)
            .bind(comment.updated_at.timestamp())
            .bind(comment.id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
