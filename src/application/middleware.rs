use crate::application::service::InvoiceService;
use crate::domain::ports::{Aggregator, AggregatorBox, DistanceStoreBox};
use crate::domain::types::{DistanceEvent, Invoice, ObuId};
use crate::error::Result;
use async_trait::async_trait;
use std::time::Instant;

/// Logs every call with its duration, key fields and outcome, then returns
/// the inner result unchanged.
pub struct LoggingMiddleware {
    next: AggregatorBox,
}

impl LoggingMiddleware {
    pub fn new(next: AggregatorBox) -> Self {
        Self { next }
    }
}

#[async_trait]
impl Aggregator for LoggingMiddleware {
    async fn record_distance(&self, event: DistanceEvent) -> Result<()> {
        let started = Instant::now();
        let res = self.next.record_distance(event).await;
        tracing::info!(
            obu_id = event.obu_id,
            value = event.value,
            elapsed = ?started.elapsed(),
            err = ?res.as_ref().err(),
            "record distance"
        );
        res
    }

    async fn compute_invoice(&self, obu_id: ObuId) -> Result<Invoice> {
        let started = Instant::now();
        let res = self.next.compute_invoice(obu_id).await;
        let (distance, amount) = match &res {
            Ok(invoice) => (invoice.total_distance, invoice.amount),
            Err(_) => (0.0, 0.0),
        };
        tracing::info!(
            obu_id,
            distance,
            amount,
            elapsed = ?started.elapsed(),
            err = ?res.as_ref().err(),
            "compute invoice"
        );
        res
    }
}

/// Counts requests and errors and records latency for both operations,
/// then returns the inner result unchanged.
pub struct MetricsMiddleware {
    next: AggregatorBox,
}

impl MetricsMiddleware {
    pub fn new(next: AggregatorBox) -> Self {
        Self { next }
    }
}

#[async_trait]
impl Aggregator for MetricsMiddleware {
    async fn record_distance(&self, event: DistanceEvent) -> Result<()> {
        let started = Instant::now();
        let res = self.next.record_distance(event).await;
        metrics::increment_counter!("aggregate_requests_total");
        metrics::histogram!(
            "aggregate_request_latency_seconds",
            started.elapsed().as_secs_f64()
        );
        if res.is_err() {
            metrics::increment_counter!("aggregate_errors_total");
        }
        res
    }

    async fn compute_invoice(&self, obu_id: ObuId) -> Result<Invoice> {
        let started = Instant::now();
        let res = self.next.compute_invoice(obu_id).await;
        metrics::increment_counter!("invoice_requests_total");
        metrics::histogram!(
            "invoice_request_latency_seconds",
            started.elapsed().as_secs_f64()
        );
        if res.is_err() {
            metrics::increment_counter!("invoice_errors_total");
        }
        res
    }
}

/// Builds the decorator stack explicitly at startup, outermost last.
///
/// ```text
/// AggregatorStack::new(store).with_logging().with_metrics().build()
/// ```
/// wraps the service in logging, then metrics, so latency measured by the
/// metrics layer includes the logging overhead.
pub struct AggregatorStack {
    inner: AggregatorBox,
}

impl AggregatorStack {
    pub fn new(store: DistanceStoreBox) -> Self {
        Self {
            inner: Box::new(InvoiceService::new(store)),
        }
    }

    pub fn with_logging(self) -> Self {
        Self {
            inner: Box::new(LoggingMiddleware::new(self.inner)),
        }
    }

    pub fn with_metrics(self) -> Self {
        Self {
            inner: Box::new(MetricsMiddleware::new(self.inner)),
        }
    }

    pub fn build(self) -> AggregatorBox {
        self.inner
    }
}
