use crate::row::{timestamp_column, uuid_column};
use crate::{DbError, Result as DbErrorResult};

use sm_core::{PageRequest, Post};

use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct PostRow {
    id: String,
    author_id: String,
    content: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<PostRow> for Post {
    type Error = DbError;

    fn try_from(r: PostRow) -> DbErrorResult<Self> {
        Ok(Post {
            id: uuid_column("posts", &r.id)?,
            author_id: uuid_column("posts", &r.author_id)?,
            content: r.content,
            created_at: timestamp_column("posts", r.created_at)?,
            updated_at: timestamp_column("posts", r.updated_at)?,
        })
    }
}

/// Engagement counters shown alongside a post
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostStats {
    pub like_count: i64,
    pub comment_count: i64,
}

pub struct PostRepository {
    pool: SqlitePool,
}

impl PostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, post: &Post) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO posts (id, author_id, content, created_at, updated_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(post.id.to_string())
        .bind(post.author_id.to_string())
        .bind(&post.content)
        .bind(post.created_at.timestamp())
        .bind(post.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Post>> {
        let row: Option<PostRow> = sqlx::query_as(
            r#"
              SELECT id, author_id, content, created_at, updated_at
              FROM posts
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Post::try_from).transpose()
    }

    /// Newest first, optionally restricted to one author
    pub async fn list(&self, author_id: Option<Uuid>, page: PageRequest) -> DbErrorResult<Vec<Post>> {
        let rows: Vec<PostRow> = sqlx::query_as(
            r#"
              SELECT id, author_id, content, created_at, updated_at
              FROM posts
              WHERE (?1 IS NULL OR author_id = ?1)
              ORDER BY created_at DESC, rowid DESC
              LIMIT ?2 OFFSET ?3
              "#,
        )
        .bind(author_id.map(|id| id.to_string()))
        .bind(page.limit as i64)
        .bind(page.offset as i64)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Post::try_from).collect()
    }

    pub async fn update(&self, post: &Post) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE posts SET content = ?, updated_at = ? WHERE id = ?")
            .bind(&post.content)
            .bind(post.updated_at.timestamp())
            .bind(post.id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Comments and likes on the post are removed with it
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn stats(&self, id: Uuid) -> DbErrorResult<PostStats> {
        let (like_count, comment_count): (i64, i64) = sqlx::query_as(
            r#"
              SELECT
                  (SELECT COUNT(*) FROM likes WHERE post_id = ?1),
                  (SELECT COUNT(*) FROM comments WHERE post_id = ?1)
              "#,
        )
        .bind(id.to_string())
        .fetch_one(&self.pool)
        .await?;

        Ok(PostStats {
            like_count,
            comment_count,
        })
    }
}
