use crate::{
    api::{dashboard, payroll, performance},
    auth::handlers,
    client::Clients,
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use std::sync::Arc;

// Helper to build per-route limiter
fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = (60_000 / requests_per_min as u64).max(1);
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .expect("period and burst size are non-zero");
    Governor::new(&cfg)
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, clients: &Clients) {
    let login_limiter = Arc::new(build_limiter(config.rate_login_per_min));
    let register_limiter = Arc::new(build_limiter(config.rate_register_per_min));

    cfg.app_data(web::Data::new(config.clone()))
        .app_data(web::Data::new(clients.clone()))
        .service(dashboard::index)
        .service(dashboard::health);

    // Public pages
    cfg.service(
        web::resource("/login")
            .wrap(login_limiter.clone())
            .route(web::get().to(handlers::login_page))
            .route(web::post().to(handlers::login)),
    )
    .service(
        web::resource("/register")
            .wrap(register_limiter.clone())
            .route(web::get().to(handlers::register_page))
            .route(web::post().to(handlers::register)),
    )
    .service(web::resource("/logout").route(web::post().to(handlers::logout)));

    // Pages backed by the payroll and performance services. The token is
    // forwarded as-is; the services decide whether it is still valid.
    cfg.service(web::resource("/dashboard").route(web::get().to(dashboard::dashboard)))
        .service(
            web::scope("/payroll")
                // /payroll
                .service(
                    web::resource("")
                        .route(web::get().to(payroll::list_payrolls))
                        .route(web::post().to(payroll::create_payroll)),
                )
                // /payroll/{id}/edit
                .service(web::resource("/{id}/edit").route(web::get().to(payroll::edit_payroll)))
                // /payroll/{id}/replace
                .service(
                    web::resource("/{id}/replace").route(web::post().to(payroll::replace_payroll)),
                )
                // /payroll/{id}/delete
                .service(
                    web::resource("/{id}/delete")
                        .route(web::get().to(payroll::confirm_delete_payroll))
                        .route(web::post().to(payroll::delete_payroll)),
                ),
        )
        .service(
            web::scope("/performance")
                // /performance
                .service(
                    web::resource("")
                        .route(web::get().to(performance::list_reviews))
                        .route(web::post().to(performance::create_review)),
                )
                // /performance/{id}/edit
                .service(
                    web::resource("/{id}/edit").route(web::get().to(performance::edit_review)),
                )
                // /performance/{id}/replace
                .service(
                    web::resource("/{id}/replace")
                        .route(web::post().to(performance::replace_review)),
                )
                // /performance/{id}/delete
                .service(
                    web::resource("/{id}/delete")
                        .route(web::get().to(performance::confirm_delete_review))
                        .route(web::post().to(performance::delete_review)),
                ),
        );
}
