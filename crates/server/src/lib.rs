//! HTTP surface of the forwarding proxy.

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use classify_core::config::ServerConfig;
use providers::relay::ForwardingProxy;
use tracing::info;

pub mod routes;

pub fn build_proxy(cfg: &ServerConfig) -> anyhow::Result<ForwardingProxy> {
    ForwardingProxy::new(cfg.intent_upstream_url.clone(), cfg.timeout())
        .context("building upstream client")
}

fn cors(permissive: bool) -> Cors {
    if permissive {
        Cors::permissive()
    } else {
        Cors::default()
    }
}

pub async fn run(cfg: ServerConfig) -> anyhow::Result<()> {
    let proxy = web::Data::new(build_proxy(&cfg)?);
    let permissive = cfg.cors_permissive;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors(permissive))
            .app_data(proxy.clone())
            .configure(routes::configure)
    })
    .bind((cfg.host.as_str(), cfg.port))
    .with_context(|| format!("binding {}:{}", cfg.host, cfg.port))?;

    info!("Backend running at http://localhost:{}", cfg.port);
    info!(
        "Intent: POST http://localhost:{}{} -> {}",
        cfg.port,
        routes::INTENT_ROUTE,
        cfg.intent_upstream_url
    );

    server.run().await.context("proxy server")?;
    Ok(())
}
