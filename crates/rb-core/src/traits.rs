//! # Core Traits (Ports)
//!
//! Any storage plugin must implement these traits to be used by the binary.

use async_trait::async_trait;
use crate::models::{Post, PostUpdate};
use crate::query::Search;

/// Data persistence contract for posts.
///
/// Range bounds are 1-based and inclusive, counted over the posts matching
/// `search` ordered newest first. Implementations may clamp `end` to the
/// rows available.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait BoardStore: Send + Sync {
    async fn count(&self, search: &Search) -> anyhow::Result<u64>;
    async fn fetch_range(&self, start: u64, end: u64, search: &Search) -> anyhow::Result<Vec<Post>>;
    async fn fetch_by_id(&self, num: i64) -> anyhow::Result<Option<Post>>;

    async fn increment_hit_count(&self, num: i64) -> anyhow::Result<()>;
    async fn insert(&self, post: Post) -> anyhow::Result<()>;
    async fn update(&self, update: PostUpdate) -> anyhow::Result<()>;
    /// Deleting a number that does not exist is not an error.
    async fn delete(&self, num: i64) -> anyhow::Result<()>;

    /// Highest post number in use, or 0 on an empty board.
    async fn max_id(&self) -> anyhow::Result<i64>;
}
