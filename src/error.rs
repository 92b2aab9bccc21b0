//! Error type shared by the builder, the document backends and the CLI.

#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// A url could not be parsed
    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    /// The hosting document is missing a window, body or location
    #[error("platform error: {0}")]
    Platform(String),
    /// A page list could not be read
    #[error("config error: {0}")]
    Config(String),
    /// A page list is not valid JSON
    #[error("invalid page list: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_display() {
        let err = NavError::InvalidUrl {
            url: "projects".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid url 'projects': relative URL without a base"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let parse: Result<Vec<u8>, _> = serde_json::from_str("[1, ");
        let err: NavError = parse.unwrap_err().into();
        assert!(matches!(err, NavError::Json(_)));
        assert!(err.to_string().starts_with("invalid page list: "));
    }
}
