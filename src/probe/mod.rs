//! Per-target probing: one HTTP request, one status line, one signature check.
mod client;
mod http;
mod outcome;
mod signature;
mod tls;


use async_trait::async_trait;

use crate::target::Target;

pub use client::{build_client, build_headers};
pub use http::HttpProbe;
pub use outcome::ProbeOutcome;
pub use signature::Signature;

/// Something that can be pointed at one target.
///
/// Implementations absorb every per-target failure and report it themselves;
/// the returned outcome is informational and callers may ignore it.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, target: &Target) -> ProbeOutcome;
}
