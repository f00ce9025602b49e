use crate::domain::ports::DistanceStore;
use crate::domain::types::{DistanceEvent, ObuId};
use crate::error::{AggregatorError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

const DEFAULT_SHARDS: usize = 16;

/// A thread-safe in-memory distance store, sharded by OBU identifier.
///
/// Each shard is an `RwLock<HashMap<ObuId, f64>>`, so concurrent updates to
/// different vehicles only contend when they hash to the same shard, never
/// on one global lock. A shard's write lock is held only for the duration
/// of the arithmetic update, so an insert followed by a get for the same
/// key always observes the insert's effect.
#[derive(Clone)]
pub struct InMemoryDistanceStore {
    shards: Arc<Vec<RwLock<HashMap<ObuId, f64>>>>,
}

impl InMemoryDistanceStore {
    /// Creates an empty store with the default shard count.
    pub fn new() -> Self {
        Self::with_shards(DEFAULT_SHARDS)
    }

    /// Creates an empty store with `shards` shards (at least one).
    pub fn with_shards(shards: usize) -> Self {
        let shards = shards.max(1);
        Self {
            shards: Arc::new((0..shards).map(|_| RwLock::new(HashMap::new())).collect()),
        }
    }

    fn shard(&self, obu_id: ObuId) -> &RwLock<HashMap<ObuId, f64>> {
        &self.shards[obu_id as usize % self.shards.len()]
    }
}

impl Default for InMemoryDistanceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DistanceStore for InMemoryDistanceStore {
    async fn insert(&self, event: DistanceEvent) -> Result<()> {
        let mut shard = self.shard(event.obu_id).write().await;
        *shard.entry(event.obu_id).or_insert(0.0) += event.value;
        Ok(())
    }

    async fn get(&self, obu_id: ObuId) -> Result<f64> {
        let shard = self.shard(obu_id).read().await;
        shard
            .get(&obu_id)
            .copied()
            .ok_or(AggregatorError::NotFound(obu_id))
    }
}
