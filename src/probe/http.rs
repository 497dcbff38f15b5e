use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, header::CONNECTION, header::HeaderValue};
use tracing::debug;

use crate::args::Scheme;
use crate::config::ProbeConfig;
use crate::error::{AppResult, ProbeError};
use crate::target::Target;

use super::client::build_client;
use super::outcome::print_status;
use super::{Probe, ProbeOutcome, Signature};

/// Sends the configured request to a target and checks the body signature.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
    method: Method,
    body: String,
    scheme: Scheme,
    port: u16,
    signature: Signature,
}

impl HttpProbe {
    /// Builds the probe and its HTTP client from the run config.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn new(config: &ProbeConfig) -> AppResult<Self> {
        Ok(Self {
            client: build_client(&config.request)?,
            method: config.request.method.clone(),
            body: config.request.body.clone(),
            scheme: config.scheme,
            port: config.port,
            signature: config.signature.clone(),
        })
    }

    /// Runs one request/response cycle without printing anything.
    pub async fn check(&self, target: &Target) -> ProbeOutcome {
        self.check_with(target, |_| {}).await
    }

    /// Like [`HttpProbe::check`], calling `on_status` once the response head
    /// has arrived and before the body is read.
    pub async fn check_with<F>(&self, target: &Target, on_status: F) -> ProbeOutcome
    where
        F: FnOnce(StatusCode) + Send,
    {
        let url = match target.to_url(self.scheme, self.port) {
            Ok(url) => url,
            Err(err) => return ProbeOutcome::InvalidTarget(err),
        };
        debug!("Requesting {} for target {}", url, target);

        let response = match self
            .client
            .request(self.method.clone(), url)
            .header(CONNECTION, HeaderValue::from_static("close"))
            .body(self.body.clone())
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => return ProbeOutcome::Unreachable(ProbeError::from_send(err)),
        };

        let status = response.status();
        on_status(status);
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(err) => {
                return ProbeOutcome::BodyUnreadable {
                    status,
                    error: ProbeError::Body { source: err },
                };
            }
        };

        let text = String::from_utf8_lossy(&body);
        let matched = self
            .signature
            .matches(status, &text)
            .then(|| self.signature.label().to_owned());
        ProbeOutcome::Responded { status, matched }
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn probe(&self, target: &Target) -> ProbeOutcome {
        let outcome = self
            .check_with(target, |status| print_status(target, status))
            .await;
        outcome.print_details(target);
        outcome
    }
}
