// Shared error and result types

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Missing arguments: expected 4 or 5, got {got}")]
    ArgumentCount { got: usize },

    #[error("Recording path must not be empty")]
    EmptyPath,

    #[error("Job queue rejected job (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unreadable job queue response ({source}): {body}")]
    MalformedResponse {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode job: {0}")]
    Encode(#[from] serde_json::Error),
}

impl NotifyError {
    /// Errors that end the invocation with usage text and exit code 1.
    pub fn is_usage(&self) -> bool {
        matches!(self, NotifyError::ArgumentCount { .. } | NotifyError::EmptyPath)
    }

    /// The detail written to the system log for a failed submission.
    ///
    /// Rejections log the raw response body; everything else logs the
    /// error description.
    pub fn log_detail(&self) -> String {
        match self {
            NotifyError::Rejected { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}

pub type NotifyResult<T> = std::result::Result<T, NotifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors() {
        assert!(NotifyError::ArgumentCount { got: 3 }.is_usage());
        assert!(NotifyError::EmptyPath.is_usage());
        assert!(!NotifyError::Rejected { status: 500, body: String::new() }.is_usage());
    }

    #[test]
    fn test_rejection_logs_body() {
        let err = NotifyError::Rejected {
            status: 500,
            body: r#"{"status":"error","message":"disk full"}"#.to_string(),
        };
        assert_eq!(err.log_detail(), r#"{"status":"error","message":"disk full"}"#);
    }

    #[test]
    fn test_malformed_response_logs_parse_error_and_body() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = NotifyError::MalformedResponse {
            body: "<html>".to_string(),
            source,
        };
        let detail = err.log_detail();
        assert!(detail.starts_with("Unreadable job queue response"));
        assert!(detail.ends_with("<html>"));
    }
}
