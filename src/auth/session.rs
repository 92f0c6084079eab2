use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload};
use futures::future::{Ready, ready};
use std::convert::Infallible;
use tracing::info;

use crate::utils::notice::Notice;

/// Cookie holding the bearer token issued by the auth service.
pub const TOKEN_COOKIE: &str = "token";

/// Token of the browser session making the request, if any.
///
/// Read from the cookie on every request; the dashboard keeps no session
/// state of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionToken(Option<String>);

impl SessionToken {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }
}

impl FromRequest for SessionToken {
    type Error = Infallible;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let token = req
            .cookie(TOKEN_COOKIE)
            .map(|c| c.value().trim().to_string())
            .filter(|t| !t.is_empty());

        ready(Ok(SessionToken(token)))
    }
}

pub fn token_cookie(token: &str, secure: bool) -> Cookie<'static> {
    Cookie::build(TOKEN_COOKIE, token.to_string())
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .finish()
}

pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(TOKEN_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}

/// 303 to `location`.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Response to a 401 from any backend: drop the token and force a new login.
pub fn expired() -> HttpResponse {
    info!("Backend rejected the session token, redirecting to login");
    HttpResponse::SeeOther()
        .cookie(removal_cookie())
        .insert_header((header::LOCATION, Notice::SessionExpired.location("/login")))
        .finish()
}
