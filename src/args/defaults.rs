/// Pool size used when `-n` is not given.
pub(crate) const DEFAULT_WORKERS: &str = "250";

pub(crate) const DEFAULT_PORT: u16 = 80;

pub(crate) const DEFAULT_TIMEOUT: &str = "5s";

pub(crate) const DEFAULT_BODY: &str = "Body Text";

pub(crate) const DEFAULT_SIGNATURE: &str = "Admin login";

pub(crate) const DEFAULT_MATCH_LABEL: &str = "Big-F5";

pub(crate) const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

/// Headers sent with every probe unless overridden with `-H`.
pub(crate) const DEFAULT_HEADERS: [(&str, &str); 2] = [
    ("Accept-Encoding", "gzip, deflate"),
    ("Content-Type", "text/plain"),
];

pub(crate) const DEFAULT_TLS_MIN: &str = "1.0";

pub(crate) const DEFAULT_TLS_MAX: &str = "1.2";
