pub mod auth;
pub mod error;
pub mod payroll;
pub mod performance;

use std::time::Duration;

use anyhow::Result;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Config;
use crate::models::ErrorBody;
pub use error::ClientError;

/// HTTP client bound to one backend's base URL.
///
/// The bearer token is passed per call so it is always the one the current
/// browser session carries; nothing is cached between requests.
#[derive(Clone)]
pub struct ServiceClient {
    name: &'static str,
    base_url: String,
    http: reqwest::Client,
}

impl ServiceClient {
    pub fn new(name: &'static str, base_url: &str, http: reqwest::Client) -> Self {
        Self {
            name,
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn check(&self, response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.json::<ErrorBody>().await.unwrap_or_default();
        let message = body.text();
        let error = body.error_text();

        warn!(service = self.name, %status, message = ?message, "Backend returned an error status");
        Err(ClientError::Status {
            status,
            message,
            error,
        })
    }

    /// Sends the request and decodes a JSON body.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = builder.send().await.map_err(|e| self.transport(e))?;
        let response = self.check(response).await?;
        response.json::<T>().await.map_err(|e| {
            warn!(service = self.name, error = %e, "Failed to decode backend response");
            ClientError::Decode(e.to_string())
        })
    }

    /// Sends the request and ignores any success body.
    pub async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ClientError> {
        let response = builder.send().await.map_err(|e| self.transport(e))?;
        self.check(response).await?;
        Ok(())
    }

    fn transport(&self, e: reqwest::Error) -> ClientError {
        let err = ClientError::from(e);
        warn!(service = self.name, error = %err, "Backend request failed");
        err
    }

    pub async fn list<T: DeserializeOwned>(&self, token: Option<&str>) -> Result<Vec<T>, ClientError> {
        debug!(service = self.name, "Listing records");
        self.send_json(self.request(Method::GET, "/", token)).await
    }

    pub async fn create<B, T>(&self, body: &B, token: Option<&str>) -> Result<T, ClientError>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(service = self.name, "Creating record");
        self.send_json(self.request(Method::POST, "/", token).json(body))
            .await
    }

    pub async fn delete(&self, id: u64, token: Option<&str>) -> Result<(), ClientError> {
        debug!(service = self.name, id, "Deleting record");
        self.send_empty(self.request(Method::DELETE, &id.to_string(), token))
            .await
    }
}

/// One wrapper per backend, shared by every worker.
#[derive(Clone)]
pub struct Clients {
    pub auth: auth::AuthApi,
    pub payroll: payroll::PayrollApi,
    pub performance: performance::PerformanceApi,
}

impl Clients {
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            auth: auth::AuthApi::new(ServiceClient::new(
                "auth",
                &config.auth_service_url,
                http.clone(),
            )),
            payroll: payroll::PayrollApi::new(ServiceClient::new(
                "payroll",
                &config.payroll_service_url,
                http.clone(),
            )),
            performance: performance::PerformanceApi::new(ServiceClient::new(
                "performance",
                &config.performance_service_url,
                http,
            )),
        })
    }
}
