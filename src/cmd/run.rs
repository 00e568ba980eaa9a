//! `m3-proxy run` — start the proxy server.
//!
//! Resolves the configuration (file, then CLI/env overrides), builds the
//! shared state and router, and serves until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::cli::RunArgs;
use crate::config;
use crate::error::ProxyError;
use crate::logging;
use crate::server::{self, AppState};

pub async fn execute(args: RunArgs) -> Result<(), ProxyError> {
    let log_format = logging::resolve_format(args.pretty, args.json);
    logging::init(&args.log_level, log_format);

    let (file_config, source) = config::resolve(args.config.as_deref()).await?;
    let config = config::apply_overrides(file_config, args.upstream.as_deref(), args.timeout)?;

    let upstream = config.upstream_base().to_string();
    let timeout_ms = config.timeout;

    let state = Arc::new(AppState::new(config, args.max_body));
    let router = server::build_router(Arc::clone(&state));

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        addr = %addr,
        upstream = %upstream,
        timeout_ms,
        config = %source,
        "m3-proxy started"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    tracing::info!(
        uptime_seconds = state.start_time.elapsed().as_secs(),
        "m3-proxy stopped"
    );
    Ok(())
}
