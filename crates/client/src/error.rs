use thiserror::Error;

/// Failure talking to the marketplace API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx status, or any body carrying a `message` field.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Text suitable for a user-facing notice: the server's own message when
    /// there is one.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Parse(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_server_text() {
        let err = ApiError::Api {
            status: 400,
            message: "Name is required".into(),
        };
        assert_eq!(err.user_message(), "Name is required");
        assert_eq!(err.to_string(), "API error (400): Name is required");

        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.user_message(), "network error: connection refused");
    }
}
