use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use toll_aggregator::application::middleware::AggregatorStack;
use toll_aggregator::domain::ports::SharedAggregator;
use toll_aggregator::infrastructure::in_memory::InMemoryDistanceStore;
use toll_aggregator::interfaces::http;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Listen address of the HTTP transport
    #[arg(long, default_value = "127.0.0.1:3000")]
    http_listen_addr: String,

    /// Shard count of the in-memory distance store
    #[arg(long, default_value_t = 16)]
    shards: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let addr: SocketAddr = cli.http_listen_addr.parse().into_diagnostic()?;

    let store = InMemoryDistanceStore::with_shards(cli.shards);
    let svc: SharedAggregator = Arc::from(
        AggregatorStack::new(Box::new(store))
            .with_logging()
            .with_metrics()
            .build(),
    );

    tracing::info!(%addr, "HTTP transport listening");
    warp::serve(http::routes(svc)).run(addr).await;

    Ok(())
}
