//! Beam statics HTTP server

use anyhow::Context;
use log::info;

use statics_server::{app, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env()?;
    let addr = config.addr();

    info!("Beam statics service v{}", env!("CARGO_PKG_VERSION"));
    info!("Listening on {}", addr);
    info!("  GET  /health");
    info!("  POST /api/beam/{{analyze,reactions,center-of-mass,torsor-at}}");
    info!("  POST /api/section/{{rectangular,i-beam,composite}}");
    info!("  POST /api/{{truss,frame}}/analyze");
    info!("  POST /api/mechanics/{{center-of-mass-3d,force-from-torsor}}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    axum::serve(listener, app()).await?;
    Ok(())
}
