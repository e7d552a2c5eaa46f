use leptos::*;
use serde_json::Value;
use thiserror::Error;

pub const SERVER_ERROR_MESSAGE: &str = "Server error occurred";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Failure of a backend call, classified once at the HTTP client boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Server { status: u16, body: Option<Value> },
    /// The request left the client but no response arrived (offline, timeout, CORS).
    #[error("network error: {message}")]
    Network { message: String },
    /// The request could not be built or its response could not be read.
    #[error("{message}")]
    Client { message: String },
}

impl ApiError {
    pub fn server(status: u16, body: Option<Value>) -> Self {
        Self::Server { status, body }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn client(message: impl Into<String>) -> Self {
        Self::Client {
            message: message.into(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The `detail` string of a server error body, if the backend sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Server {
                body: Some(body), ..
            } => body.get("detail").and_then(Value::as_str),
            _ => None,
        }
    }

    /// Text shown in page banners.
    pub fn user_message(&self) -> String {
        match self {
            Self::Server { .. } => self.detail().unwrap_or(SERVER_ERROR_MESSAGE).to_string(),
            Self::Network { .. } => NETWORK_ERROR_MESSAGE.to_string(),
            Self::Client { message } if !message.trim().is_empty() => message.clone(),
            Self::Client { .. } => UNEXPECTED_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::client(format!("Failed to build request: {}", err))
        } else if err.is_decode() {
            Self::client(format!("Failed to parse response: {}", err))
        } else {
            Self::network(err.to_string())
        }
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.user_message()
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.user_message().into_view()
    }
}
