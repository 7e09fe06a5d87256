use serde::Deserialize;
use thiserror::Error;

use super::config::ConfigError;

/// Errors from the cadastro REST client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Connection failure, timeout, or other transport error.
    #[error("{endpoint}: request failed: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status.
    #[error("{endpoint}: HTTP {status}: {message}")]
    Api {
        endpoint: String,
        status: u16,
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("{endpoint}: unexpected response body: {source}")]
    Deserialization {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Message suitable for showing to a user: the backend's own message
    /// for API errors, the full error text otherwise.
    pub fn message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error body shape used by the backend (`{"message": "..."}`).
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Prefer the backend's `message` field; fall back to the raw body.
pub(crate) fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.to_string())
}
