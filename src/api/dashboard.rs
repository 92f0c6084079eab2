use actix_web::{HttpResponse, Responder, get, web};
use serde::{Deserialize, Serialize};

use crate::{
    auth::session::{SessionToken, see_other},
    utils::notice::NoticeQuery,
    view::{
        self,
        dashboard::{DashboardPage, DashboardPageProps},
    },
};

#[get("/")]
pub async fn index() -> impl Responder {
    see_other("/dashboard")
}

/// Landing page after login. It calls no backend, so the missing-token
/// redirect happens here rather than on a 401.
pub async fn dashboard(token: SessionToken, query: web::Query<NoticeQuery>) -> impl Responder {
    if !token.is_present() {
        return see_other("/login");
    }

    let page = view::render::<DashboardPage>(
        "Tableau de bord",
        DashboardPageProps {
            toasts: query.toasts(),
        },
    )
    .await;
    view::html(page)
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
