//! HTTP adapters for the payment and survey services.
//!
//! Each adapter issues exactly one GET per call through [`UpstreamClient`], which owns the
//! status policy shared by both: 404 means "no data", any other non-2xx status is an
//! [`ReportError::Upstream`], and the caller's cancellation token aborts the request.

pub mod json;
pub mod payments;
pub mod surveys;

use crate::error::{ReportError, Result, Upstream};
use json::JsonDecoder;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// A base URL plus client for one upstream service.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    service: Upstream,
    base_url: Url,
    client: reqwest::Client,
    decoder: JsonDecoder,
}

impl UpstreamClient {
    pub fn new(service: Upstream, base_url: &str, client: reqwest::Client) -> Result<Self> {
        Ok(Self {
            service,
            base_url: parse_base_url(base_url)?,
            client,
            decoder: JsonDecoder::case_insensitive(),
        })
    }

    /// GETs `path` relative to the base URL.
    ///
    /// Returns `Ok(None)` on 404 and the body text on any 2xx status.
    pub async fn get(&self, path: &str, cancel: &CancellationToken) -> Result<Option<String>> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| ReportError::Config(format!("invalid upstream path '{path}': {e}")))?;

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ReportError::Cancelled),
            result = self.send(url) => result,
        }
    }

    async fn send(&self, url: Url) -> Result<Option<String>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| self.transport(source))?;

        let status = response.status();
        debug!(service = %self.service, %status, "upstream responded");

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ReportError::Upstream {
                service: self.service,
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| self.transport(source))?;
        Ok(Some(body))
    }

    pub fn decode<T: DeserializeOwned>(&self, body: &str) -> Result<T> {
        self.decoder
            .decode(body)
            .map_err(|source| ReportError::Deserialization {
                service: self.service,
                source,
            })
    }

    fn transport(&self, source: reqwest::Error) -> ReportError {
        ReportError::Transport {
            service: self.service,
            source,
        }
    }
}

/// Parses a base URL, making sure relative paths join beneath it.
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| ReportError::Config(format!("invalid base URL '{raw}': {e}")))?;
    if url.cannot_be_a_base() {
        return Err(ReportError::Config(format!("invalid base URL '{raw}'")));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
