use thiserror::Error;

/// Errors surfaced by the audit store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend failed.
    #[error("store backend failure: {0}")]
    Backend(String),
    /// A record could not be encoded or decoded.
    #[error("store serialization failure: {0}")]
    Serialize(String),
    /// The referenced report does not exist.
    #[error("report {0} not found")]
    MissingReport(u64),
}

impl StoreError {
    /// Wrap any backend error into the `Backend` variant.
    pub fn backend<E: std::fmt::Display>(err: E) -> Self {
        StoreError::Backend(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialize(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_helper_preserves_message() {
        let err = StoreError::backend("poisoned lock");
        assert_eq!(err.to_string(), "store backend failure: poisoned lock");
    }

    #[test]
    fn missing_report_names_the_id() {
        assert_eq!(StoreError::MissingReport(7).to_string(), "report 7 not found");
    }
}
