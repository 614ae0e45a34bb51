//! Prime Cache Server - Lists primes up to a bound over HTTP
//!
//! Answers from a precomputed cache for small bounds and sieves live
//! (Atkin or segmented Eratosthenes) for everything else.

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prime_cache_server::api::create_router;
use prime_cache_server::{join_warm_task, spawn_warm_task, AppState, Config};

const USAGE: &str = r#"
Usage
=====
A web service returning every prime up to the bound given in the URL.

  GET /primes/{algorithm}/{bound}       JSON, e.g. /primes/segmented/15 ->
                                        {"initial":"15","primes":[2,3,5,7,11,13]}
  GET /primes/xml/{algorithm}/{bound}   the same list as XML

Algorithms:
  aitkin      Sieve of Atkin (default, also used for unknown names)
  segmented   Segmented Sieve of Eratosthenes

Environment: SERVER_PORT, CACHE_CEILING, WARM_ALGORITHM, MAX_BOUND, RUST_LOG
"#;

#[derive(Parser, Debug)]
#[command(name = "prime_cache_server", version)]
#[command(about = "Web service listing the primes up to a bound", long_about = None)]
struct Cli {
    /// Show the usage parameters
    #[arg(short = 'u', long)]
    usage: bool,

    /// HTTP port (overrides SERVER_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Largest bound to precompute (overrides CACHE_CEILING)
    #[arg(long)]
    cache_ceiling: Option<u64>,
}

/// Main entry point for the prime cache server.
///
/// # Startup Sequence
/// 1. Parse command line flags
/// 2. Initialize tracing subscriber for logging
/// 3. Load configuration from environment variables and flags
/// 4. Create the prime cache and request policy
/// 5. Start background cache warmer
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM, then join the warmer
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.usage {
        println!("{}", USAGE);
        return Ok(());
    }

    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prime_cache_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Prime Cache Server");

    let mut config = Config::from_env();
    if let Some(port) = cli.port {
        config.server_port = port;
    }
    if let Some(ceiling) = cli.cache_ceiling {
        config.cache_ceiling = ceiling;
    }
    info!(
        "Configuration loaded: port={}, cache_ceiling={}, warm_algorithm={}, max_bound={:?}",
        config.server_port, config.cache_ceiling, config.warm_algorithm, config.max_bound
    );

    let state = AppState::from_config(&config);
    info!("Prime cache initialized");

    // Warming runs alongside request handling
    let cache = state.primes.cache();
    let warm_handle = spawn_warm_task(cache.clone(), config.warm_algorithm);
    info!("Background cache warmer started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    join_warm_task(warm_handle, &cache).await;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
