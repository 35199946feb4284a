//! Network source error types.

use std::path::PathBuf;

/// Errors that can occur while loading the carrier network.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Network file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse network JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// A source was asked for without the settings it needs
    #[error("not configured: {0}")]
    NotConfigured(String),

    /// Every source in the chain failed
    #[error("no network source succeeded")]
    Exhausted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NetworkError::Api {
            status: 503,
            message: "maintenance".into(),
        };
        assert_eq!(err.to_string(), "API error 503: maintenance");

        let err = NetworkError::Io {
            path: PathBuf::from("/tmp/network.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "failed to read /tmp/network.json: missing");
    }
}
