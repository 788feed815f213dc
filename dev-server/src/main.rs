use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use expense_tracker_dev_server::{build_router, shutdown_signal};

/// Serve the built expense tracker front end.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Address to bind.
    #[arg(long, env = "DEV_SERVER_HOST", default_value = "0.0.0.0")]
    host: std::net::IpAddr,

    /// The port to serve from.
    #[arg(short, long, env = "DEV_SERVER_PORT", default_value_t = 5173)]
    port: u16,

    /// Directory holding `index.html` and the wasm bundle.
    #[arg(long, env = "DEV_SERVER_DIR", default_value = "frontend/dist")]
    dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    let args = Args::parse();
    if !args.dir.join("index.html").is_file() {
        tracing::warn!(
            "No index.html in {}; run `trunk build` in frontend/ first",
            args.dir.display()
        );
    }

    let addr = SocketAddr::new(args.host, args.port);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server running at http://127.0.0.1:{}", args.port);
    tracing::info!("Serving files from: {}", args.dir.display());

    axum::serve(listener, build_router(&args.dir))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn setup_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
