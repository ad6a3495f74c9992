use crate::{
    ErrorLocation, FollowEdge, FollowStore, FollowTransaction, GraphError, GraphResult,
    PageRequest,
};

use std::collections::{HashMap, HashSet};
use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

/// Both adjacency views of the relation. They are only ever mutated
/// together, through [`GraphState::insert`] and [`GraphState::remove`].
#[derive(Debug, Default, Clone)]
struct GraphState {
    users: HashSet<Uuid>,
    following: HashMap<Uuid, Vec<Uuid>>,
    followers: HashMap<Uuid, Vec<Uuid>>,
}

impl GraphState {
    fn contains(&self, follower_id: Uuid, followee_id: Uuid) -> bool {
        self.following
            .get(&follower_id)
            .is_some_and(|targets| targets.contains(&followee_id))
    }

    fn insert(&mut self, follower_id: Uuid, followee_id: Uuid) {
        self.following
            .entry(follower_id)
            .or_default()
            .push(followee_id);
        self.followers
            .entry(followee_id)
            .or_default()
            .push(follower_id);
    }

    fn remove(&mut self, follower_id: Uuid, followee_id: Uuid) -> bool {
        let removed = self
            .following
            .get_mut(&follower_id)
            .map(|targets| {
                let before = targets.len();
                targets.retain(|id| *id != followee_id);
                before != targets.len()
            })
            .unwrap_or(false);

        if let Some(sources) = self.followers.get_mut(&followee_id) {
            sources.retain(|id| *id != follower_id);
        }

        removed
    }

    fn edge_count(&self) -> usize {
        self.following.values().map(Vec::len).sum()
    }
}

/// Process-local follow store. A transaction holds the store lock until it
/// is committed or dropped, so transactions are fully serialized.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFollowStore {
    state: Arc<Mutex<GraphState>>,
}

impl InMemoryFollowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_user(&self, user_id: Uuid) {
        self.state.lock().await.users.insert(user_id);
    }

    /// Remove a user together with every edge that touches them
    pub async fn remove_user(&self, user_id: Uuid) {
        let mut state = self.state.lock().await;
        state.users.remove(&user_id);

        let followees = state.following.remove(&user_id).unwrap_or_default();
        for followee in followees {
            if let Some(sources) = state.followers.get_mut(&followee) {
                sources.retain(|id| *id != user_id);
            }
        }

        let followers = state.followers.remove(&user_id).unwrap_or_default();
        for follower in followers {
            if let Some(targets) = state.following.get_mut(&follower) {
                targets.retain(|id| *id != user_id);
            }
        }
    }

    pub async fn edge_count(&self) -> usize {
        self.state.lock().await.edge_count()
    }
}

struct InMemoryTransaction {
    guard: Option<OwnedMutexGuard<GraphState>>,
    staged: GraphState,
}

impl InMemoryTransaction {
    fn check_open(&self) -> GraphResult<()> {
        if self.guard.is_none() {
            return Err(GraphError::Storage {
                message: "transaction already committed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl FollowTransaction for InMemoryTransaction {
    async fn user_exists(&mut self, user_id: Uuid) -> GraphResult<bool> {
        self.check_open()?;
        Ok(self.staged.users.contains(&user_id))
    }

    async fn edge_exists(&mut self, follower_id: Uuid, followee_id: Uuid) -> GraphResult<bool> {
        self.check_open()?;
        Ok(self.staged.contains(follower_id, followee_id))
    }

    async fn create_edge(&mut self, edge: &FollowEdge) -> GraphResult<()> {
        self.check_open()?;

        if edge.is_self_loop() {
            return Err(GraphError::SelfFollow {
                user_id: edge.follower_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.staged.contains(edge.follower_id, edge.followee_id) {
            return Err(GraphError::Conflict {
                message: format!(
                    "edge {} -> {} already exists",
                    edge.follower_id, edge.followee_id
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.staged.insert(edge.follower_id, edge.followee_id);
        Ok(())
    }

    async fn remove_edge(&mut self, follower_id: Uuid, followee_id: Uuid) -> GraphResult<bool> {
        self.check_open()?;
        Ok(self.staged.remove(follower_id, followee_id))
    }

    async fn commit(&mut self) -> GraphResult<()> {
        self.check_open()?;
        if let Some(mut guard) = self.guard.take() {
            *guard = std::mem::take(&mut self.staged);
        }
        Ok(())
    }
}

#[async_trait]
impl FollowStore for InMemoryFollowStore {
    async fn begin(&self) -> GraphResult<Box<dyn FollowTransaction>> {
        let guard = self.state.clone().lock_owned().await;
        let staged = guard.clone();
        Ok(Box::new(InMemoryTransaction {
            guard: Some(guard),
            staged,
        }))
    }

    async fn user_exists(&self, user_id: Uuid) -> GraphResult<bool> {
        Ok(self.state.lock().await.users.contains(&user_id))
    }

    async fn edge_exists(&self, follower_id: Uuid, followee_id: Uuid) -> GraphResult<bool> {
        Ok(self.state.lock().await.contains(follower_id, followee_id))
    }

    async fn following_page(&self, user_id: Uuid, page: PageRequest) -> GraphResult<Vec<Uuid>> {
        let state = self.state.lock().await;
        Ok(slice_page(state.following.get(&user_id), page))
    }

    async fn followers_page(&self, user_id: Uuid, page: PageRequest) -> GraphResult<Vec<Uuid>> {
        let state = self.state.lock().await;
        Ok(slice_page(state.followers.get(&user_id), page))
    }
}

fn slice_page(ids: Option<&Vec<Uuid>>, page: PageRequest) -> Vec<Uuid> {
    ids.map(|ids| {
        ids.iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .copied()
            .collect()
    })
    .unwrap_or_default()
}
