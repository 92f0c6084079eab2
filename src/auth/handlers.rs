use actix_web::http::header;
use actix_web::{HttpResponse, Responder, web};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::session::{SessionToken, removal_cookie, see_other, token_cookie},
    client::{ClientError, Clients},
    config::Config,
    models::{LoginReqDto, LoginResponse, RegisterReqDto},
    utils::notice::{Notice, NoticeQuery},
    view::{
        self,
        auth::{LoginPage, LoginPageProps, RegisterPage, RegisterPageProps},
    },
};

const INVALID_CREDENTIALS: &str = "Identifiants invalides. Veuillez réessayer.";
const MISSING_TOKEN: &str = "Erreur de connexion : Token manquant";
const REGISTER_FAILED: &str = "Erreur lors de l’inscription";
const REGISTER_OK: &str = "Inscription réussie !";

async fn login_form(props: LoginPageProps) -> HttpResponse {
    view::html(view::render::<LoginPage>("Connexion", props).await)
}

pub async fn login_page(query: web::Query<NoticeQuery>) -> impl Responder {
    login_form(LoginPageProps {
        toasts: query.toasts(),
        ..Default::default()
    })
    .await
}

/// Signs in against the auth service and keeps the returned token in the
/// session cookie. Any error status or transport failure shows the same
/// message.
#[instrument(
    name = "auth_login",
    skip(form, clients, config),
    fields(username = %form.username)
)]
pub async fn login(
    form: web::Form<LoginReqDto>,
    clients: web::Data<Clients>,
    config: web::Data<Config>,
) -> impl Responder {
    info!("Login request received");
    let credentials = form.into_inner();

    let message = match clients.auth.sign_in(&credentials).await {
        Ok(LoginResponse {
            access_token: Some(token),
        }) if !token.trim().is_empty() => {
            info!("Login successful");
            return HttpResponse::SeeOther()
                .cookie(token_cookie(token.trim(), config.session_cookie_secure))
                .insert_header((header::LOCATION, "/dashboard"))
                .finish();
        }
        // A 2xx whose body is not the expected JSON carries no token either.
        Ok(_) | Err(ClientError::Decode(_)) => {
            warn!("Sign-in succeeded without an access token");
            MISSING_TOKEN
        }
        Err(e) => {
            info!(error = %e, "Login rejected");
            INVALID_CREDENTIALS
        }
    };

    login_form(LoginPageProps {
        username: credentials.username,
        error: Some(message.to_string()),
        toasts: Vec::new(),
    })
    .await
}

pub async fn register_page() -> impl Responder {
    view::html(view::render::<RegisterPage>("Inscription", RegisterPageProps::default()).await)
}

#[instrument(
    name = "auth_register",
    skip(form, clients, config),
    fields(username = %form.username)
)]
pub async fn register(
    form: web::Form<RegisterReqDto>,
    clients: web::Data<Clients>,
    config: web::Data<Config>,
) -> impl Responder {
    let user = form.into_inner();

    match clients.auth.sign_up(&user).await {
        Ok(resp) => {
            let message = resp
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| REGISTER_OK.to_string());
            let name = resp
                .username
                .filter(|n| !n.trim().is_empty())
                .unwrap_or(user.username);
            info!("Registration successful");

            // Fields are cleared; the browser moves on to the login page
            // after the configured delay.
            let page = view::render::<RegisterPage>(
                "Inscription",
                RegisterPageProps {
                    success: Some(format!("{message} Bienvenue {name} !")),
                    ..Default::default()
                },
            )
            .await;

            let mut response = view::html(page);
            if let Ok(value) = header::HeaderValue::from_str(&format!(
                "{}; url=/login",
                config.register_redirect_delay_secs
            )) {
                response
                    .headers_mut()
                    .insert(header::HeaderName::from_static("refresh"), value);
            }
            response
        }
        Err(e) => {
            error!(error = %e, "Registration failed");
            let message = match &e {
                ClientError::Status { error, .. } => error.clone(),
                _ => None,
            }
            .unwrap_or_else(|| REGISTER_FAILED.to_string());

            view::html(
                view::render::<RegisterPage>(
                    "Inscription",
                    RegisterPageProps {
                        username: user.username,
                        email: user.email,
                        error: Some(message),
                        success: None,
                    },
                )
                .await,
            )
        }
    }
}

/// Drops the session token. There is nothing to revoke server-side.
pub async fn logout(token: SessionToken) -> impl Responder {
    info!(had_token = token.is_present(), "Logout");
    let mut response = see_other(&Notice::LoggedOut.location("/login"));
    if let Err(e) = response.add_cookie(&removal_cookie()) {
        error!(error = %e, "Failed to clear session cookie");
    }
    response
}
