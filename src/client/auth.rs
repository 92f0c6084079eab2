use reqwest::Method;
use tracing::instrument;

use super::{ClientError, ServiceClient};
use crate::models::{LoginReqDto, LoginResponse, RegisterReqDto, RegisterResponse};

/// Public client for the auth service; it never sends a bearer token.
#[derive(Clone)]
pub struct AuthApi {
    client: ServiceClient,
}

impl AuthApi {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }

    #[instrument(name = "auth_sign_in", skip(self, credentials), fields(username = %credentials.username))]
    pub async fn sign_in(&self, credentials: &LoginReqDto) -> Result<LoginResponse, ClientError> {
        self.client
            .send_json(self.client.request(Method::POST, "/sign-in", None).json(credentials))
            .await
    }

    #[instrument(name = "auth_sign_up", skip(self, user), fields(username = %user.username))]
    pub async fn sign_up(&self, user: &RegisterReqDto) -> Result<RegisterResponse, ClientError> {
        self.client
            .send_json(self.client.request(Method::POST, "/sign-up", None).json(user))
            .await
    }
}
