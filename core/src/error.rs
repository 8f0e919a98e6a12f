use thiserror::Error;

#[derive(Error, Debug)]
pub enum KompKitError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error("Invalid currency code: {0}")]
    InvalidCurrencyCode(String),

    // Debouncer::on_current_runtime called outside of a Tokio runtime
    #[error("No async runtime available: {source}")]
    NoRuntime {
        #[from]
        source: tokio::runtime::TryCurrentError,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, KompKitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = KompKitError::InvalidArgument("wait_ms must not be negative (got -1)".to_string());
        assert_eq!(err.to_string(), "Invalid argument: wait_ms must not be negative (got -1)");

        let err = KompKitError::UnsupportedLocale("xx-YY".to_string());
        assert_eq!(err.to_string(), "Unsupported locale: xx-YY");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: KompKitError = json_err.into();
        assert!(matches!(err, KompKitError::JsonError { .. }));
        assert!(err.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn test_no_runtime_conversion() {
        // Plain #[test] has no runtime entered
        let err: KompKitError = tokio::runtime::Handle::try_current().unwrap_err().into();
        assert!(matches!(err, KompKitError::NoRuntime { .. }));
    }
}
