//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: connection refused, timeout, body decode
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Request failed with status {status}")]
    Api {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Text shown to the user: the server's `message` when it sent one,
    /// otherwise this error's own description.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api {
                message: Some(message),
                ..
            } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins() {
        let err = ClientError::Api {
            status: StatusCode::BAD_REQUEST,
            message: Some("Email or employee_id already exists".into()),
        };
        assert_eq!(err.user_message(), "Email or employee_id already exists");
    }

    #[test]
    fn falls_back_to_generic_text() {
        let err = ClientError::Api {
            status: StatusCode::BAD_GATEWAY,
            message: None,
        };
        assert_eq!(err.user_message(), "Request failed with status 502 Bad Gateway");
    }
}
