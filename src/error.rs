use std::time::Duration;
use thiserror::Error;

/// Reasons a generation request is refused before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("Please enter your OpenAI API key.")]
    MissingCredential,
    #[error("Please describe your event.")]
    EmptyEventDescription,
}

impl PreconditionError {
    /// Stable machine-readable kind for API responses.
    pub fn kind(&self) -> &'static str {
        match self {
            PreconditionError::MissingCredential => "missing_credential",
            PreconditionError::EmptyEventDescription => "empty_event_description",
        }
    }
}

/// Failure of a single platform's completion call. Never affects sibling platforms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Authentication, network, quota or HTTP error reported by the provider.
    #[error("{0}")]
    Api(String),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("response contained no generated text")]
    EmptyResponse,
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl From<async_openai::error::OpenAIError> for GenerationError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        use async_openai::error::OpenAIError;
        match err {
            OpenAIError::InvalidArgument(msg) => GenerationError::InvalidRequest(msg),
            OpenAIError::ApiError(api) => GenerationError::Api(api.message),
            other => GenerationError::Api(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_messages_are_distinct() {
        let missing = PreconditionError::MissingCredential;
        let empty = PreconditionError::EmptyEventDescription;
        assert_ne!(missing.to_string(), empty.to_string());
        assert_eq!(missing.kind(), "missing_credential");
        assert_eq!(empty.kind(), "empty_event_description");
    }

    #[test]
    fn test_timeout_message() {
        let err = GenerationError::Timeout(Duration::from_secs(30));
        assert_eq!(err.to_string(), "request timed out after 30s");
        let err = GenerationError::Timeout(Duration::from_millis(200));
        assert_eq!(err.to_string(), "request timed out after 200ms");
    }
}
