use thiserror::Error;

/// Errors surfaced by embedding providers.
///
/// Any provider error during a reconciliation run aborts the whole run;
/// retry policy, if any, lives inside the provider, not in its callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmbedError {
    /// Provider configuration is inconsistent or incomplete.
    #[error("invalid embedding config: {0}")]
    InvalidConfig(String),
    /// The embedding backend failed (transport error, timeout, non-2xx).
    #[error("embedding backend failure: {0}")]
    Backend(String),
    /// The backend answered, but not with a usable embedding payload.
    #[error("malformed embedding response: {0}")]
    MalformedResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = EmbedError::Backend("connection refused".into());
        assert!(err.to_string().contains("connection refused"));

        let err = EmbedError::InvalidConfig("api_url is required".into());
        assert!(err.to_string().starts_with("invalid embedding config"));
    }
}
