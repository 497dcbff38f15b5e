//! Targets and the sources they are read from.
mod source;

pub use source::{load_targets, parse_targets};

use std::fmt;
use std::sync::Arc;

use url::Url;

use crate::args::Scheme;
use crate::error::ProbeError;

/// One host to probe, optionally carrying a scheme, port or path.
///
/// Cheap to clone; duplicates are kept and probed independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target(Arc<str>);

impl Target {
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(Arc::from(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the target into the URL that gets requested.
    ///
    /// `scheme` is prefixed when the target has none and `port` is applied when
    /// the target does not name one itself.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTarget` when the result is not a valid URL.
    pub fn to_url(&self, scheme: Scheme, port: u16) -> Result<Url, ProbeError> {
        let raw = if self.0.contains("://") {
            self.0.to_string()
        } else {
            format!("{}://{}", scheme.as_str(), self.0)
        };
        let invalid = |source| ProbeError::InvalidTarget {
            url: raw.clone(),
            source,
        };
        let mut url = Url::parse(&raw).map_err(invalid)?;
        if url.port().is_none() {
            url.set_port(Some(port))
                .map_err(|()| invalid(url::ParseError::InvalidPort))?;
        }
        Ok(url)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Target {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
