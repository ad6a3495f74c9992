//! Directed follow relation between users.
//!
//! [`FollowGraph`](graph::FollowGraph) enforces the relation's invariants
//! (no self-loops, one edge per ordered pair, mutations are idempotent) on
//! top of any [`FollowStore`](store::FollowStore). Stores only provide
//! transactional primitives; every follow or unfollow runs inside a single
//! store transaction so both the `following` and `followers` views change
//! together.

pub mod error;
pub mod graph;
pub mod memory_store;
pub mod outcome;
pub mod store;
