use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use corkboard_mirror::http::{router, AppState};

#[derive(Parser)]
#[command(name = "corkboard-mirror", about = "REST mirror for the corkboard message feed")]
struct Cli {
    /// Port to listen on.
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("corkboard_mirror=info")),
        )
        .init();

    let cli = Cli::parse();
    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!(%addr, version = env!("CARGO_PKG_VERSION"), "mirror listening");

    axum::serve(listener, router(AppState::new()))
        .await
        .context("serve")?;
    Ok(())
}
