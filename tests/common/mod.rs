use std::sync::Arc;
use toll_aggregator::application::middleware::AggregatorStack;
use toll_aggregator::domain::ports::SharedAggregator;
use toll_aggregator::domain::types::{DistanceEvent, ObuId};
use toll_aggregator::infrastructure::in_memory::InMemoryDistanceStore;

/// Builds the full production stack (metrics over logging over the
/// service) on top of a fresh in-memory store.
pub fn decorated_service() -> SharedAggregator {
    Arc::from(
        AggregatorStack::new(Box::new(InMemoryDistanceStore::new()))
            .with_logging()
            .with_metrics()
            .build(),
    )
}

pub fn event(obu_id: ObuId, value: f64) -> DistanceEvent {
    DistanceEvent {
        obu_id,
        value,
        unix: 0,
    }
}
