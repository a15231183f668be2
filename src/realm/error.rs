use std::time::Duration;

use thiserror::Error;

/// Failures of the realm discovery query.
#[derive(Debug, Error)]
pub enum RealmError {
    #[error("HTTP client initialization failed: {source}")]
    ClientInit {
        #[source]
        source: reqwest::Error,
    },
    #[error("realm request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("realm request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },
    #[error("realm response could not be decoded: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

impl RealmError {
    pub(crate) fn client_init(source: reqwest::Error) -> Self {
        Self::ClientInit { source }
    }

    /// Sort a transport error into a timeout or a plain request failure.
    pub(crate) fn transport(
        url: impl Into<String>,
        timeout: Duration,
        source: reqwest::Error,
    ) -> Self {
        if source.is_timeout() {
            Self::Timeout {
                url: url.into(),
                timeout,
            }
        } else {
            Self::Request {
                url: url.into(),
                source,
            }
        }
    }

    pub(crate) fn decode(source: serde_json::Error) -> Self {
        Self::Decode { source }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
