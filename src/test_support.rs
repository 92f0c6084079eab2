//! Shared fixtures for handler tests: one wiremock server stands in for all
//! three backends, each mounted under its own path prefix.

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use std::net::SocketAddr;
use wiremock::MockServer;

use crate::client::Clients;
use crate::config::Config;

pub async fn mock_backend() -> (MockServer, Config, Clients) {
    let server = MockServer::start().await;
    let config = Config::for_services(&server.uri());
    let clients = Clients::from_config(&config).expect("test clients");
    (server, config, clients)
}

/// Rate-limited routes key on the peer address.
pub fn peer() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 40000))
}

pub fn session(token: &str) -> actix_web::cookie::Cookie<'static> {
    actix_web::cookie::Cookie::new("token", token.to_string())
}

pub async fn body_text<B>(resp: ServiceResponse<B>) -> String
where
    B: MessageBody,
{
    let bytes = actix_web::test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

macro_rules! init_app {
    ($config:expr, $clients:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .configure(|cfg| crate::routes::configure(cfg, &$config, &$clients)),
        )
        .await
    };
}

pub(crate) use init_app;
