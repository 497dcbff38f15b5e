use reqwest::{
    Client,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use tracing::error;

use crate::config::RequestConfig;
use crate::error::{AppError, AppResult, HttpError};

use super::tls::apply_tls_settings;

/// Builds the shared HTTP client used by every probe.
///
/// Certificate and hostname verification are disabled, idle connections are
/// not kept, and proxies come from the standard environment variables.
///
/// # Errors
///
/// Returns an error when a header is malformed, the TLS range is inverted, or
/// the client cannot be built.
pub fn build_client(request: &RequestConfig) -> AppResult<Client> {
    let mut client_builder = Client::builder()
        .timeout(request.timeout)
        .user_agent(request.user_agent.as_str())
        .default_headers(build_headers(&request.headers)?)
        .danger_accept_invalid_certs(true)
        .danger_accept_invalid_hostnames(true)
        .pool_max_idle_per_host(0);

    client_builder = apply_tls_settings(client_builder, request.tls_min, request.tls_max)?;

    match client_builder.build() {
        Ok(client) => Ok(client),
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            Err(AppError::http(HttpError::BuildClientFailed { source: e }))
        }
    }
}

/// Converts `(name, value)` pairs into a header map.
///
/// # Errors
///
/// Returns an error when a name or value is not a valid HTTP header.
pub fn build_headers(headers: &[(String, String)]) -> AppResult<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|err| {
            AppError::http(HttpError::InvalidHeaderName {
                header: key.clone(),
                source: err,
            })
        })?;
        let val = HeaderValue::from_str(value).map_err(|err| {
            AppError::http(HttpError::InvalidHeaderValue {
                header: key.clone(),
                source: err,
            })
        })?;
        map.insert(name, val);
    }
    Ok(map)
}
