use super::types::{DistanceEvent, Invoice, ObuId};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// The keyed accumulator holding the authoritative running distance per
/// vehicle. Sole owner of the aggregate state; callers only ever receive
/// value copies, never references into the map.
#[async_trait]
pub trait DistanceStore: Send + Sync {
    /// Adds `event.value` to the stored total for `event.obu_id`, creating
    /// the entry if absent. Never fails for a structurally valid event.
    async fn insert(&self, event: DistanceEvent) -> Result<()>;
    /// Returns the current total, or `NotFound` when no entry exists.
    async fn get(&self, obu_id: ObuId) -> Result<f64>;
}

/// The two-operation service contract shared by the invoicing service and
/// every instrumentation decorator wrapped around it.
#[async_trait]
pub trait Aggregator: Send + Sync {
    async fn record_distance(&self, event: DistanceEvent) -> Result<()>;
    async fn compute_invoice(&self, obu_id: ObuId) -> Result<Invoice>;
}

pub type DistanceStoreBox = Box<dyn DistanceStore>;
pub type AggregatorBox = Box<dyn Aggregator>;
pub type SharedAggregator = Arc<dyn Aggregator>;
