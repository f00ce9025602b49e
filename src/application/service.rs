use crate::domain::ports::{Aggregator, DistanceStoreBox};
use crate::domain::types::{BASE_PRICE, DistanceEvent, Invoice, ObuId};
use crate::error::Result;
use async_trait::async_trait;

/// The stateless orchestration point between transports and the store.
///
/// `InvoiceService` owns no aggregate state of its own; every call is
/// recomputed from the store, so multiple instances can safely share one
/// store. Store errors are propagated to callers unchanged.
pub struct InvoiceService {
    store: DistanceStoreBox,
}

impl InvoiceService {
    /// Creates a new `InvoiceService` over the given distance store.
    pub fn new(store: DistanceStoreBox) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Aggregator for InvoiceService {
    async fn record_distance(&self, event: DistanceEvent) -> Result<()> {
        self.store.insert(event).await
    }

    async fn compute_invoice(&self, obu_id: ObuId) -> Result<Invoice> {
        let total_distance = self.store.get(obu_id).await?;
        Ok(Invoice {
            obu_id,
            total_distance,
            amount: total_distance * BASE_PRICE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AggregatorError;
    use crate::infrastructure::in_memory::InMemoryDistanceStore;

    fn service() -> InvoiceService {
        InvoiceService::new(Box::new(InMemoryDistanceStore::new()))
    }

    fn event(obu_id: ObuId, value: f64) -> DistanceEvent {
        DistanceEvent {
            obu_id,
            value,
            unix: 0,
        }
    }

    #[tokio::test]
    async fn test_invoice_from_recorded_distances() {
        let svc = service();

        svc.record_distance(event(12345, 10.5)).await.unwrap();
        svc.record_distance(event(12345, 15.2)).await.unwrap();

        let invoice = svc.compute_invoice(12345).await.unwrap();
        assert_eq!(invoice.obu_id, 12345);
        assert!((invoice.total_distance - 25.7).abs() < 0.001);
        assert!((invoice.amount - 8095.5).abs() < 0.001);
    }

    #[tokio::test]
    async fn test_amount_is_total_times_base_price() {
        let svc = service();

        svc.record_distance(event(7, 2.0)).await.unwrap();
        let invoice = svc.compute_invoice(7).await.unwrap();

        assert!((invoice.amount - invoice.total_distance * 315.0).abs() < 0.001);
    }

    #[tokio::test]
    async fn test_unknown_obu_propagates_not_found() {
        let svc = service();

        let err = svc.compute_invoice(99999).await.unwrap_err();
        assert!(matches!(err, AggregatorError::NotFound(99999)));
    }
}
