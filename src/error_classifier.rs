use crate::api::error::ApiError;
use log::LevelFilter;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a daemon API error and determine the appropriate log level.
    pub fn classify_fetch_error(&self, error: &ApiError) -> LogLevel {
        match error {
            // Rate limiting - low priority
            ApiError::Http { status, .. } if *status == 429 => LogLevel::Debug,

            // Server errors - temporary issues, recovered by the next poll
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Remaining client errors indicate a wrong endpoint or daemon version
            ApiError::Http { .. } => LogLevel::Error,

            // A response that is not the expected key->record mapping
            ApiError::Malformed(_) => LogLevel::Error,

            // The configured record is simply absent from the snapshot
            ApiError::MissingRecord(_) => LogLevel::Warn,

            // Network issues - usually temporary
            ApiError::Transport(_) => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> ApiError {
        ApiError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn test_server_errors_are_warnings() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_fetch_error(&http(500)), LogLevel::Warn);
        assert_eq!(classifier.classify_fetch_error(&http(503)), LogLevel::Warn);
    }

    #[test]
    fn test_client_errors_are_errors() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_fetch_error(&http(404)), LogLevel::Error);
    }

    #[test]
    fn test_rate_limiting_is_quiet() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_fetch_error(&http(429)), LogLevel::Debug);
    }

    #[test]
    fn test_missing_record_is_a_warning() {
        let classifier = ErrorClassifier::new();
        let err = ApiError::MissingRecord("id_torrent".to_string());
        assert_eq!(classifier.classify_fetch_error(&err), LogLevel::Warn);
    }

    #[test]
    fn test_malformed_response_is_an_error() {
        let classifier = ErrorClassifier::new();
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert_eq!(
            classifier.classify_fetch_error(&ApiError::Malformed(parse_err)),
            LogLevel::Error
        );
    }
}
