use std::fmt;

/// Result type for sentra-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ways an analysis request can fail.
///
/// The UI treats every variant the same; the distinction exists for logs.
#[derive(Debug)]
pub enum Error {
    /// Connection, timeout or other transport failure
    Transport(reqwest::Error),

    /// Service answered with a non-success status
    Status { status: u16, body: String },

    /// Response body did not match the expected shape
    Decode(serde_json::Error),

    /// Client could not be constructed from its configuration
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(err) => write!(f, "Transport error: {}", err),
            Error::Status { status, body } if body.is_empty() => {
                write!(f, "Service returned HTTP {}", status)
            }
            Error::Status { status, body } => {
                write!(f, "Service returned HTTP {}: {}", status, body)
            }
            Error::Decode(err) => write!(f, "Malformed response: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(err) => Some(err),
            Error::Decode(err) => Some(err),
            Error::Status { .. } | Error::Config(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = Error::Status {
            status: 503,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "Service returned HTTP 503");

        let err = Error::Status {
            status: 422,
            body: "missing text".to_string(),
        };
        assert_eq!(err.to_string(), "Service returned HTTP 422: missing text");
    }

    #[test]
    fn test_decode_keeps_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(json_err);
        assert!(err.to_string().starts_with("Malformed response:"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
