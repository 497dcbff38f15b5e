use std::path::PathBuf;
use std::time::Duration;

use crate::args::{DEFAULT_HEADERS, PositiveUsize, ProbeArgs, Scheme, TlsVersion};
use crate::error::{AppError, AppResult, ValidationError};
use crate::probe::Signature;
use crate::target::Target;

/// Which of the two target sources the run uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// One target probed directly, without a worker pool.
    Single(Target),
    /// Targets read line by line from a file and fanned out to the pool.
    Batch(PathBuf),
}

/// Shape of the request every probe sends.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub method: reqwest::Method,
    pub body: String,
    pub headers: Vec<(String, String)>,
    pub user_agent: String,
    pub timeout: Duration,
    pub tls_min: TlsVersion,
    pub tls_max: TlsVersion,
}

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub mode: RunMode,
    pub workers: PositiveUsize,
    pub scheme: Scheme,
    pub port: u16,
    pub request: RequestConfig,
    pub signature: Signature,
}

impl ProbeConfig {
    /// Builds the run configuration from parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns `MissingTarget` when neither `-l` nor `-s` is set (or both are
    /// empty) and `ConflictingTargets` when both are set.
    pub fn from_args(args: &ProbeArgs) -> AppResult<Self> {
        let mode = resolve_mode(args.list.as_deref(), args.single.as_deref())?;
        Ok(Self {
            mode,
            workers: args.workers,
            scheme: args.scheme,
            port: args.port,
            request: RequestConfig {
                method: args.method.to_reqwest(),
                body: args.data.clone(),
                headers: merge_headers(&args.headers),
                user_agent: args.user_agent.clone(),
                timeout: args.timeout,
                tls_min: args.tls_min,
                tls_max: args.tls_max,
            },
            signature: Signature::new(
                args.signature.clone(),
                args.match_status,
                args.match_label.clone(),
            ),
        })
    }
}

pub(super) fn resolve_mode(list: Option<&str>, single: Option<&str>) -> AppResult<RunMode> {
    let list = list.filter(|value| !value.is_empty());
    let single = single.filter(|value| !value.is_empty());
    match (list, single) {
        (Some(_), Some(_)) => Err(AppError::validation(
            ValidationError::ConflictingTargets,
        )),
        (Some(path), None) => Ok(RunMode::Batch(PathBuf::from(path))),
        (None, Some(target)) => Ok(RunMode::Single(Target::new(target))),
        (None, None) => Err(AppError::validation(ValidationError::MissingTarget)),
    }
}

/// Default headers first, user headers replace defaults with the same name.
pub(super) fn merge_headers(overrides: &[(String, String)]) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> = DEFAULT_HEADERS
        .iter()
        .filter(|(name, _)| {
            !overrides
                .iter()
                .any(|(key, _)| key.eq_ignore_ascii_case(name))
        })
        .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
        .collect();
    headers.extend(overrides.iter().cloned());
    headers
}
