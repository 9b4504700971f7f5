use std::sync::Arc;

use anyhow::Result;
use axum::extract::Request;
use axum::ServiceExt;
use tracing_subscriber::EnvFilter;
use wm_core::{AccessResolver, TenantProvisioner};
use wm_server::{router, AppState, MemoryCluster, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env();
    if config.provision_enabled {
        tracing::info!("automatic namespace provisioning is on");
    }

    let cluster = Arc::new(MemoryCluster::new());
    let state = AppState {
        directory: cluster.clone(),
        resolver: Arc::new(AccessResolver::new(cluster.clone())),
        provisioner: Arc::new(TenantProvisioner::new(cluster)),
    };

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "workspace manager listening");
    let app = router(state, config.provision_enabled);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
