mod cli;

use axum::Router;
use clap::Parser;
use std::net::SocketAddr;
use stub_backend::StubConfig;
use tower_http::services::ServeDir;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
    let cli = cli::Cli::parse();

    let mut router = Router::new();
    if cli.stub_backend {
        tracing::info!(chapters = cli.stub_chapters, "Mounting stub backend under /api");
        router = router.merge(stub_backend::router(StubConfig {
            chapter_count: cli.stub_chapters,
        }));
    }
    let router = router.fallback_service(ServeDir::new(&cli.dist_dir));

    let addr = SocketAddr::from(([127, 0, 0, 1], cli.port));
    tracing::info!("Serving {} on {}", cli.dist_dir.display(), addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
