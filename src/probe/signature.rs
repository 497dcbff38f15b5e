use reqwest::StatusCode;

/// Fixed body substring that marks a target as a positive detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pattern: String,
    status: Option<u16>,
    label: String,
}

impl Signature {
    #[must_use]
    pub const fn new(pattern: String, status: Option<u16>, label: String) -> Self {
        Self {
            pattern,
            status,
            label,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// True when `body` contains the pattern and, if a status is required,
    /// the response carried exactly that status.
    #[must_use]
    pub fn matches(&self, status: StatusCode, body: &str) -> bool {
        if let Some(required) = self.status
            && status.as_u16() != required
        {
            return false;
        }
        body.contains(&self.pattern)
    }
}
