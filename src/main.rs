use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activities::config::Config;
use activities::database::{seed, ActivityRegistry};
use activities::web::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Configuration and registry
    let config = Config::from_env().context("invalid configuration")?;

    let seed = match &config.seed_path {
        Some(path) => {
            info!(path = %path.display(), "loading activities from seed file");
            seed::load_seed_file(path)?
        }
        None => seed::default_activities(),
    };
    let registry = Arc::new(ActivityRegistry::from_seed(seed).context("invalid activity seed")?);
    info!(activities = registry.len(), "activity registry ready");

    // 3. Application
    let app = router::build_router(registry, &config.static_dir);

    // 4. Bind (with fallback port)
    let listener = match TcpListener::bind((config.host.as_str(), config.port)).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config
                .port
                .checked_add(1)
                .with_context(|| format!("cannot bind {}:{}: {}", config.host, config.port, e))?;
            warn!(
                host = %config.host,
                port = config.port,
                error = %e,
                fallback,
                "bind failed, trying fallback port"
            );
            TcpListener::bind((config.host.as_str(), fallback))
                .await
                .with_context(|| format!("cannot bind fallback {}:{}", config.host, fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("Server running on http://{}", bound_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
