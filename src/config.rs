use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub log_dir: String,

    // Backend services
    pub auth_service_url: String,
    pub payroll_service_url: String,
    pub performance_service_url: String,
    pub request_timeout_secs: u64,

    pub register_redirect_delay_secs: u64,
    pub session_cookie_secure: bool,

    // Rate limiting
    pub rate_login_per_min: u32,
    pub rate_register_per_min: u32,
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T>(key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    var_or(key, default)
        .trim()
        .parse()
        .with_context(|| format!("{key} has an invalid value"))
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_addr: var_or("SERVER_ADDR", "127.0.0.1:3000"),
            log_dir: var_or("LOG_DIR", "logs"),

            auth_service_url: var_or("AUTH_SERVICE_URL", "http://localhost:8050/app"),
            payroll_service_url: var_or("PAYROLL_SERVICE_URL", "http://localhost:8083/api/payroll"),
            performance_service_url: var_or(
                "PERFORMANCE_SERVICE_URL",
                "http://localhost:8051/api/performance",
            ),
            request_timeout_secs: parse_var("REQUEST_TIMEOUT_SECS", "10")?,

            register_redirect_delay_secs: parse_var("REGISTER_REDIRECT_DELAY_SECS", "2")?,
            session_cookie_secure: parse_var("SESSION_COOKIE_SECURE", "false")?,

            rate_login_per_min: parse_var("RATE_LOGIN_PER_MIN", "60")?,
            rate_register_per_min: parse_var("RATE_REGISTER_PER_MIN", "30")?,
        })
    }

    /// Configuration pointing every backend at `base`, used by handler tests.
    #[cfg(test)]
    pub fn for_services(base: &str) -> Self {
        Self {
            server_addr: "127.0.0.1:0".to_string(),
            log_dir: "logs".to_string(),
            auth_service_url: format!("{base}/app"),
            payroll_service_url: format!("{base}/api/payroll"),
            performance_service_url: format!("{base}/api/performance"),
            request_timeout_secs: 5,
            register_redirect_delay_secs: 2,
            session_cookie_secure: false,
            rate_login_per_min: 1000,
            rate_register_per_min: 1000,
        }
    }
}
