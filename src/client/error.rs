use thiserror::Error;

/// Errors that can occur when talking to the analysis service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network error (connection failed, timeout, etc.).
    #[error("Network error: {message}")]
    Network { message: String },

    /// Request was rejected by the service as malformed.
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Server returned an error status.
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Response body could not be decoded into a report.
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// The request succeeded but carried no usable report.
    #[error("The service returned an empty result")]
    EmptyResult,

    /// Client construction or configuration failed.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ClientError {
    /// User-facing message for display next to the ingestion form.
    ///
    /// Falls back to a generic message when the transport produced
    /// nothing a user could act on.
    pub fn user_message(&self) -> String {
        let raw = match self {
            ClientError::Network { message }
            | ClientError::InvalidRequest { message }
            | ClientError::ServerError { message, .. }
            | ClientError::Serialization { message }
            | ClientError::Configuration { message } => message.trim(),
            ClientError::EmptyResult => "",
        };
        if raw.is_empty() {
            "failed to analyze data".to_string()
        } else {
            raw.to_string()
        }
    }
}

/// Result type for transport operations.
pub type ClientResult<T> = std::result::Result<T, ClientError>;
