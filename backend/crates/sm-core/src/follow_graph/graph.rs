use crate::{
    ErrorLocation, FollowEdge, FollowOutcome, FollowStore, FollowTransaction, GraphError,
    GraphResult, MAX_PAGE_LIMIT, PageRequest, UnfollowOutcome,
};

use std::panic::Location;

use log::{debug, info, warn};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct FollowGraph<S> {
    store: S,
    retry_on_conflict: bool,
}

impl<S: FollowStore> FollowGraph<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            retry_on_conflict: true,
        }
    }

    /// Follow/unfollow are idempotent, so one retry after a detected write
    /// conflict is always safe. Disable to surface conflicts directly.
    pub fn with_retry_on_conflict(mut self, retry_on_conflict: bool) -> Self {
        self.retry_on_conflict = retry_on_conflict;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn follow(&self, actor: Uuid, target: Uuid) -> GraphResult<FollowOutcome> {
        if actor == target {
            return Err(GraphError::SelfFollow {
                user_id: actor,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let outcome = match self.try_follow(actor, target).await {
            Err(e) if e.is_conflict() && self.retry_on_conflict => {
                warn!("Retrying follow {} -> {} after conflict: {}", actor, target, e);
                self.try_follow(actor, target).await
            }
            other => other,
        }?;

        match outcome {
            FollowOutcome::Created => info!("User {} now follows {}", actor, target),
            FollowOutcome::AlreadyFollowing => {
                debug!("User {} already follows {}, nothing to do", actor, target)
            }
        }

        Ok(outcome)
    }

    pub async fn unfollow(&self, actor: Uuid, target: Uuid) -> GraphResult<UnfollowOutcome> {
        let outcome = match self.try_unfollow(actor, target).await {
            Err(e) if e.is_conflict() && self.retry_on_conflict => {
                warn!(
                    "Retrying unfollow {} -> {} after conflict: {}",
                    actor, target, e
                );
                self.try_unfollow(actor, target).await
            }
            other => other,
        }?;

        match outcome {
            UnfollowOutcome::Removed => info!("User {} unfollowed {}", actor, target),
            UnfollowOutcome::NotFollowing => {
                debug!("User {} does not follow {}, nothing to do", actor, target)
            }
        }

        Ok(outcome)
    }

    pub async fn is_following(&self, follower: Uuid, followee: Uuid) -> GraphResult<bool> {
        self.store.edge_exists(follower, followee).await
    }

    /// Everyone `user` follows, in the order the edges were created
    pub async fn list_following(&self, user: Uuid) -> GraphResult<Vec<Uuid>> {
        self.ensure_user(user).await?;
        let mut all = Vec::new();
        let mut page = PageRequest {
            limit: MAX_PAGE_LIMIT,
            offset: 0,
        };
        loop {
            let batch = self.store.following_page(user, page).await?;
            let done = batch.len() < page.limit as usize;
            all.extend(batch);
            if done {
                return Ok(all);
            }
            page = page.next();
        }
    }

    /// Everyone following `user`, in the order the edges were created
    pub async fn list_followers(&self, user: Uuid) -> GraphResult<Vec<Uuid>> {
        self.ensure_user(user).await?;
        let mut all = Vec::new();
        let mut page = PageRequest {
            limit: MAX_PAGE_LIMIT,
            offset: 0,
        };
        loop {
            let batch = self.store.followers_page(user, page).await?;
            let done = batch.len() < page.limit as usize;
            all.extend(batch);
            if done {
                return Ok(all);
            }
            page = page.next();
        }
    }

    pub async fn following_page(&self, user: Uuid, page: PageRequest) -> GraphResult<Vec<Uuid>> {
        self.ensure_user(user).await?;
        self.store.following_page(user, page).await
    }

    pub async fn followers_page(&self, user: Uuid, page: PageRequest) -> GraphResult<Vec<Uuid>> {
        self.ensure_user(user).await?;
        self.store.followers_page(user, page).await
    }

    async fn try_follow(&self, actor: Uuid, target: Uuid) -> GraphResult<FollowOutcome> {
        let mut tx = self.store.begin().await?;
        require_users(tx.as_mut(), actor, target).await?;

        if tx.edge_exists(actor, target).await? {
            return Ok(FollowOutcome::AlreadyFollowing);
        }

        tx.create_edge(&FollowEdge::new(actor, target)).await?;
        tx.commit().await?;

        Ok(FollowOutcome::Created)
    }

    async fn try_unfollow(&self, actor: Uuid, target: Uuid) -> GraphResult<UnfollowOutcome> {
        let mut tx = self.store.begin().await?;
        require_users(tx.as_mut(), actor, target).await?;

        if !tx.remove_edge(actor, target).await? {
            return Ok(UnfollowOutcome::NotFollowing);
        }
        tx.commit().await?;

        Ok(UnfollowOutcome::Removed)
    }

    async fn ensure_user(&self, user: Uuid) -> GraphResult<()> {
        if self.store.user_exists(user).await? {
            Ok(())
        } else {
            Err(GraphError::NotFound {
                user_id: user,
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}

async fn require_users(
    tx: &mut dyn FollowTransaction,
    actor: Uuid,
    target: Uuid,
) -> GraphResult<()> {
    for user_id in [actor, target] {
        if !tx.user_exists(user_id).await? {
            return Err(GraphError::NotFound {
                user_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }
    }
    Ok(())
}
