use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Upstream rejected the call with a structured error body
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Server returned error status {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Failed to decode completion response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Model returned no content")]
    EmptyResponse,
}

impl GenerateError {
    /// Message suitable for showing to the person who asked for the batch
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// HTTP status, when the upstream answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            GenerateError::Api { status, .. } | GenerateError::ServerError { status, .. } => {
                Some(*status)
            }
            GenerateError::RequestFailed(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
