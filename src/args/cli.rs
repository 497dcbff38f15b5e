use clap::Parser;
use std::time::Duration;

use super::defaults::{
    DEFAULT_BODY, DEFAULT_MATCH_LABEL, DEFAULT_PORT, DEFAULT_SIGNATURE, DEFAULT_TIMEOUT,
    DEFAULT_TLS_MAX, DEFAULT_TLS_MIN, DEFAULT_USER_AGENT, DEFAULT_WORKERS,
};
use super::parsers::{parse_duration_arg, parse_header, parse_positive_usize, parse_tls_version};
use super::types::{HttpMethod, PositiveUsize, Scheme, TlsVersion};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent HTTP reconnaissance sweeper - a fixed worker pool probes every target once and flags response bodies that carry a known signature."
)]
pub struct ProbeArgs {
    /// File containing targets (one per line)
    #[arg(long = "list", short = 'l')]
    pub list: Option<String>,

    /// Single target (bypasses the worker pool)
    #[arg(long = "single", short = 's')]
    pub single: Option<String>,

    /// Number of concurrent workers
    #[arg(
        long = "workers",
        short = 'n',
        default_value = DEFAULT_WORKERS,
        value_parser = parse_positive_usize
    )]
    pub workers: PositiveUsize,

    /// Scheme used for targets without one
    #[arg(long, default_value = "http", ignore_case = true)]
    pub scheme: Scheme,

    /// Port used for targets without one
    #[arg(long, short = 'p', default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// HTTP method to use
    #[arg(long, short = 'X', default_value = "get", ignore_case = true)]
    pub method: HttpMethod,

    /// Request body
    #[arg(long, short, default_value = DEFAULT_BODY)]
    pub data: String,

    /// Extra HTTP headers in 'Key: Value' format (repeatable, overrides defaults)
    #[arg(long = "header", short = 'H', value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// User-Agent header
    #[arg(long = "user-agent", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(long, default_value = DEFAULT_TIMEOUT, value_parser = parse_duration_arg)]
    pub timeout: Duration,

    /// Substring that marks a response body as a match
    #[arg(long = "match", short = 'm', default_value = DEFAULT_SIGNATURE)]
    pub signature: String,

    /// Only report a match when the response has this status code
    #[arg(long = "match-status")]
    pub match_status: Option<u16>,

    /// Label printed when the signature matches
    #[arg(long = "match-label", default_value = DEFAULT_MATCH_LABEL)]
    pub match_label: String,

    /// Minimum TLS version (1.0, 1.1, 1.2, 1.3)
    #[arg(long = "tls-min", default_value = DEFAULT_TLS_MIN, value_parser = parse_tls_version)]
    pub tls_min: TlsVersion,

    /// Maximum TLS version (1.0, 1.1, 1.2, 1.3)
    #[arg(long = "tls-max", default_value = DEFAULT_TLS_MAX, value_parser = parse_tls_version)]
    pub tls_max: TlsVersion,

    /// Enable verbose logging (sets log level to debug unless overridden by SIGSWEEP_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable colored diagnostics
    #[arg(long = "no-color")]
    pub no_color: bool,
}
