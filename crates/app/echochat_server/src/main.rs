//! Echochat HTTP server binary.
//!
//! Serves the chat page on `/` and the echo endpoint on `/api/chat`.
//! Prints `{"port": N}` to stdout once bound so a parent process can
//! discover an ephemeral port.

use clap::Parser;
use echochat_api::config::ApiConfig;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info,echochat_api=debug,echochat_core=debug,tower_http=debug";

/// CLI arguments for the server. Unset flags fall back to `ECHOCHAT_*` env vars.
#[derive(Parser, Debug)]
#[command(name = "echochat_server", version, about = "Echochat HTTP server")]
struct Args {
    /// Address to listen on, e.g. 127.0.0.1:3000 (port 0 = ephemeral).
    #[arg(long)]
    bind_addr: Option<String>,

    /// Maximum request body size in bytes (default: axum's 2 MB).
    #[arg(long)]
    body_limit: Option<usize>,

    /// Run as a managed sidecar: shut down when stdin reaches EOF.
    ///
    /// The parent keeps the write end of the pipe open; if it exits the OS
    /// closes the pipe and the server stops.
    #[arg(long, default_value_t = false)]
    sidecar: bool,
}

impl Args {
    fn into_config(self, mut config: ApiConfig) -> ApiConfig {
        if let Some(bind_addr) = self.bind_addr {
            config.bind_addr = bind_addr;
        }
        if let Some(body_limit) = self.body_limit {
            config.body_limit = Some(body_limit);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout is reserved for the JSON port message.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let args = Args::parse();
    let sidecar = args.sidecar;
    let config = args.into_config(ApiConfig::from_env());

    info!(
        bind_addr = %config.bind_addr,
        body_limit = ?config.body_limit,
        sidecar,
        "starting echochat_server"
    );

    let app = echochat_api::router(&config);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    println!("{}", serde_json::json!({ "port": local_addr.port() }));

    let shutdown = CancellationToken::new();

    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("interrupt received, shutting down"),
                Err(e) => warn!("failed to listen for interrupt: {e}"),
            }
            shutdown.cancel();
        }
    });

    if sidecar {
        info!("sidecar mode: will exit when parent pipe closes");
        tokio::spawn({
            let shutdown = shutdown.clone();
            async move {
                use tokio::io::AsyncReadExt;
                let mut stdin = tokio::io::stdin();
                let mut buf = [0u8; 1];
                // Returns once the parent is gone and the pipe reaches EOF.
                let _ = stdin.read(&mut buf).await;
                info!("parent pipe closed, shutting down");
                shutdown.cancel();
            }
        });
    }

    info!(addr = %local_addr, "chat server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("server stopped");
    Ok(())
}
