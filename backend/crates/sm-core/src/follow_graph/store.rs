use crate::{FollowEdge, GraphResult, PageRequest};

use async_trait::async_trait;
use uuid::Uuid;

/// One atomic unit of work against the edge relation.
///
/// Dropping a transaction without calling [`commit`](Self::commit) discards
/// every change made through it.
#[async_trait]
pub trait FollowTransaction: Send {
    async fn user_exists(&mut self, user_id: Uuid) -> GraphResult<bool>;

    async fn edge_exists(&mut self, follower_id: Uuid, followee_id: Uuid) -> GraphResult<bool>;

    /// Insert an edge. Fails with `Conflict` if the pair already exists.
    async fn create_edge(&mut self, edge: &FollowEdge) -> GraphResult<()>;

    /// Delete an edge, returning whether one was removed.
    async fn remove_edge(&mut self, follower_id: Uuid, followee_id: Uuid) -> GraphResult<bool>;

    async fn commit(&mut self) -> GraphResult<()>;
}

/// Storage backend for the follow relation.
///
/// Enumeration is ordered by edge insertion, oldest first.
#[async_trait]
pub trait FollowStore: Send + Sync {
    async fn begin(&self) -> GraphResult<Box<dyn FollowTransaction>>;

    async fn user_exists(&self, user_id: Uuid) -> GraphResult<bool>;

    /// Point read outside any transaction; takes no write lock.
    async fn edge_exists(&self, follower_id: Uuid, followee_id: Uuid) -> GraphResult<bool>;

    async fn following_page(&self, user_id: Uuid, page: PageRequest) -> GraphResult<Vec<Uuid>>;

    async fn followers_page(&self, user_id: Uuid, page: PageRequest) -> GraphResult<Vec<Uuid>>;
}
