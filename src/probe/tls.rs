use reqwest::ClientBuilder;

use crate::args::TlsVersion;
use crate::error::{AppError, AppResult, ValidationError};

/// Pins the TLS protocol range on the client builder.
pub(super) fn apply_tls_settings(
    builder: ClientBuilder,
    min: TlsVersion,
    max: TlsVersion,
) -> AppResult<ClientBuilder> {
    if tls_version_rank(min) > tls_version_rank(max) {
        return Err(AppError::validation(ValidationError::TlsMinGreaterThanMax));
    }

    Ok(builder
        .min_tls_version(to_reqwest_tls_version(min))
        .max_tls_version(to_reqwest_tls_version(max)))
}

const fn to_reqwest_tls_version(version: TlsVersion) -> reqwest::tls::Version {
    match version {
        TlsVersion::V1_0 => reqwest::tls::Version::TLS_1_0,
        TlsVersion::V1_1 => reqwest::tls::Version::TLS_1_1,
        TlsVersion::V1_2 => reqwest::tls::Version::TLS_1_2,
        TlsVersion::V1_3 => reqwest::tls::Version::TLS_1_3,
    }
}

const fn tls_version_rank(version: TlsVersion) -> u8 {
    match version {
        TlsVersion::V1_0 => 0,
        TlsVersion::V1_1 => 1,
        TlsVersion::V1_2 => 2,
        TlsVersion::V1_3 => 3,
    }
}
