use derive_more::Display;
use reqwest::StatusCode;

/// Why a backend call failed, split the way the pages report it.
#[derive(Debug, Display)]
pub enum ClientError {
    /// The service answered with a non-success status.
    #[display(fmt = "service responded with {}", status)]
    Status {
        status: StatusCode,
        message: Option<String>,
        /// The body's `error` key on its own.
        error: Option<String>,
    },

    /// The service answered 2xx with a body that does not match the contract.
    #[display(fmt = "unexpected response body: {}", _0)]
    Decode(String),

    /// No connection could be established.
    #[display(fmt = "network error: {}", _0)]
    Network(String),

    /// The request went out but no response came back (timeout, reset).
    #[display(fmt = "no response: {}", _0)]
    NoResponse(String),

    /// The request could not be built, e.g. an invalid base URL.
    #[display(fmt = "invalid request: {}", _0)]
    Config(String),
}

impl std::error::Error for ClientError {}

impl ClientError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Status { status, .. } if *status == StatusCode::UNAUTHORIZED)
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided message, falling back to the status reason phrase.
    pub fn server_message(&self) -> Option<String> {
        match self {
            ClientError::Status { status, message, .. } => message.clone().or_else(|| {
                Some(
                    status
                        .canonical_reason()
                        .map(str::to_string)
                        .unwrap_or_else(|| status.as_u16().to_string()),
                )
            }),
            ClientError::Decode(_) => Some("réponse invalide".to_string()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            ClientError::Config(e.to_string())
        } else if e.is_connect() {
            ClientError::Network(e.to_string())
        } else if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ClientError::Status {
                status,
                message: None,
                error: None,
            }
        } else {
            ClientError::NoResponse(e.to_string())
        }
    }
}
