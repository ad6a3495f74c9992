//! SQLite-backed [`FollowStore`].
//!
//! Each follow transaction claims SQLite's write lock before its first read,
//! so the existence check and the insert see the same snapshot and concurrent
//! writers queue on the busy timeout instead of failing. Lock contention that
//! still escapes, and unique-index violations from a racing insert, surface
//! as [`GraphError::Conflict`] for the graph to retry.

use crate::{DbError, FollowRepository};

use sm_core::{FollowEdge, FollowStore, FollowTransaction, GraphError, GraphResult, PageRequest};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};
use uuid::Uuid;

impl From<DbError> for GraphError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        if err.is_contention() || err.is_unique_violation() {
            GraphError::Conflict {
                message: err.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            GraphError::Storage {
                message: err.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SqliteFollowStore {
    pool: SqlitePool,
}

impl SqliteFollowStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

struct SqliteFollowTransaction {
    tx: Option<Transaction<'static, Sqlite>>,
}

impl SqliteFollowTransaction {
    #[track_caller]
    fn conn(&mut self) -> GraphResult<&mut SqliteConnection> {
        self.tx.as_deref_mut().ok_or_else(|| GraphError::Storage {
            message: "transaction already committed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

#[async_trait]
impl FollowTransaction for SqliteFollowTransaction {
    async fn user_exists(&mut self, user_id: Uuid) -> GraphResult<bool> {
        Ok(FollowRepository::user_exists(self.conn()?, user_id).await?)
    }

    async fn edge_exists(&mut self, follower_id: Uuid, followee_id: Uuid) -> GraphResult<bool> {
        Ok(FollowRepository::exists(self.conn()?, follower_id, followee_id).await?)
    }

    async fn create_edge(&mut self, edge: &FollowEdge) -> GraphResult<()> {
        Ok(FollowRepository::create(self.conn()?, edge).await?)
    }

    async fn remove_edge(&mut self, follower_id: Uuid, followee_id: Uuid) -> GraphResult<bool> {
        Ok(FollowRepository::delete(self.conn()?, follower_id, followee_id).await?)
    }

    async fn commit(&mut self) -> GraphResult<()> {
        let tx = self.tx.take().ok_or_else(|| GraphError::Storage {
            message: "transaction already committed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        tx.commit().await.map_err(DbError::from)?;
        Ok(())
    }
}

#[async_trait]
impl FollowStore for SqliteFollowStore {
    async fn begin(&self) -> GraphResult<Box<dyn FollowTransaction>> {
        let mut tx = self.pool.begin().await.map_err(DbError::from)?;

        // A write statement takes the RESERVED lock even when it matches no rows
        sqlx::query("UPDATE follows SET seq = seq WHERE 0")
            .execute(&mut *tx)
            .await
            .map_err(DbError::from)?;

        Ok(Box::new(SqliteFollowTransaction { tx: Some(tx) }))
    }

    async fn user_exists(&self, user_id: Uuid) -> GraphResult<bool> {
        Ok(FollowRepository::user_exists(&self.pool, user_id).await?)
    }

    async fn edge_exists(&self, follower_id: Uuid, followee_id: Uuid) -> GraphResult<bool> {
        Ok(FollowRepository::exists(&self.pool, follower_id, followee_id).await?)
    }

    async fn following_page(&self, user_id: Uuid, page: PageRequest) -> GraphResult<Vec<Uuid>> {
        Ok(FollowRepository::following(&self.pool, user_id, page).await?)
    }

    async fn followers_page(&self, user_id: Uuid, page: PageRequest) -> GraphResult<Vec<Uuid>> {
        Ok(FollowRepository::followers(&self.pool, user_id, page).await?)
    }
}
