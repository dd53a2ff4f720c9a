use buscaminas_server::routes::create_router;
use buscaminas_server::service::Minesweeper;
use buscaminas_server::state::AppState;
use buscaminas_server::store::MemoryStore;
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Minesweeper HTTP service.
#[derive(Debug, Parser)]
struct Args {
    /// HTTP listen address.
    #[arg(long, default_value = "0.0.0.0:8080")]
    addr: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let service = Minesweeper::new(MemoryStore::new());
    let app = create_router(AppState::new(service));

    let listener = TcpListener::bind(&args.addr).await?;
    tracing::info!(addr = %args.addr, "buscaminas listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("buscaminas stopped");
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,buscaminas_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install the ctrl-c handler");
    tracing::info!("shutdown signal received");
}
