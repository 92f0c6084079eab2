use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{App, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;

mod api;
mod auth;
mod client;
mod config;
mod model;
mod models;
mod routes;
mod utils;
mod view;

#[cfg(test)]
mod test_support;

use client::Clients;
use config::Config;

use tracing::info;
use tracing_appender::rolling;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    let clients = Clients::from_config(&config)?;
    let server_addr = config.server_addr.clone();

    info!(
        addr = %server_addr,
        auth = %config.auth_service_url,
        payroll = %config.payroll_service_url,
        performance = %config.performance_service_url,
        "Backends configured"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .configure(|cfg| routes::configure(cfg, &config, &clients))
    })
    .bind(&server_addr)
    .with_context(|| format!("binding {server_addr}"))?
    .run()
    .await?;

    Ok(())
}
