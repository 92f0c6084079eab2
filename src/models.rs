use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Body of `POST /sign-in`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginReqDto {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Body of `POST /sign-up`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterReqDto {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    pub message: Option<String>,
    pub username: Option<String>,
}

/// Error payload returned by the backends, which use either key.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn text(&self) -> Option<String> {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .filter(|m| !m.trim().is_empty())
    }

    /// Only the `error` key, which the auth service fills with a user-facing
    /// reason.
    pub fn error_text(&self) -> Option<String> {
        self.error.clone().filter(|e| !e.trim().is_empty())
    }
}

/// A submitted form field that could not be turned into a request body.
#[derive(Debug, Display, PartialEq)]
pub enum FormError {
    #[display(fmt = "{} is required", _0)]
    Missing(&'static str),
    #[display(fmt = "{} is not a valid number", _0)]
    InvalidNumber(&'static str),
    #[display(fmt = "{} is not a valid date", _0)]
    InvalidDate(&'static str),
    #[display(fmt = "score must be between 1 and 100")]
    ScoreOutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_reads_camel_case() {
        let body: LoginResponse = serde_json::from_str(r#"{"accessToken":"abc"}"#).unwrap();
        assert_eq!(body.access_token.as_deref(), Some("abc"));

        let body: LoginResponse = serde_json::from_str("{}").unwrap();
        assert!(body.access_token.is_none());
    }

    #[test]
    fn test_error_body_prefers_message() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"Bad payroll","error":"Bad Request"}"#).unwrap();
        assert_eq!(body.text().as_deref(), Some("Bad payroll"));

        let body: ErrorBody = serde_json::from_str(r#"{"error":"Username taken"}"#).unwrap();
        assert_eq!(body.text().as_deref(), Some("Username taken"));

        let body: ErrorBody = serde_json::from_str(r#"{"message":"  "}"#).unwrap();
        assert_eq!(body.text(), None);
    }

    #[test]
    fn test_error_text_ignores_message() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"Validation failed","error":"Email déjà utilisé"}"#)
                .unwrap();
        assert_eq!(body.error_text().as_deref(), Some("Email déjà utilisé"));

        let body: ErrorBody = serde_json::from_str(r#"{"message":"Validation failed"}"#).unwrap();
        assert_eq!(body.error_text(), None);
    }

    #[test]
    fn test_form_error_display() {
        assert_eq!(FormError::Missing("employeeId").to_string(), "employeeId is required");
        assert_eq!(
            FormError::ScoreOutOfRange.to_string(),
            "score must be between 1 and 100"
        );
    }
}
