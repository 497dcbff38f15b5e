use thiserror::Error;

/// Why a single target could not be probed.
///
/// These never leave the probe boundary as errors; they are rendered to the
/// console and the batch carries on.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("invalid target URL '{url}': {source}")]
    InvalidTarget {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request timed out: {source}")]
    Timeout {
        #[source]
        source: reqwest::Error,
    },
    #[error("connection failed: {source}")]
    Connect {
        #[source]
        source: reqwest::Error,
    },
    #[error("request failed: {source}")]
    Request {
        #[source]
        source: reqwest::Error,
    },
    #[error("body read failed: {source}")]
    Body {
        #[source]
        source: reqwest::Error,
    },
}

impl ProbeError {
    /// Classifies a transport error raised before a response arrived.
    #[must_use]
    pub fn from_send(source: reqwest::Error) -> Self {
        if source.is_timeout() {
            ProbeError::Timeout { source }
        } else if source.is_connect() {
            ProbeError::Connect { source }
        } else {
            ProbeError::Request { source }
        }
    }
}
