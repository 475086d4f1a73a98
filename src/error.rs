use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;

/// The upstream service an adapter talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Payments,
    Surveys,
}

impl Upstream {
    /// Noun used when describing a response body from this upstream.
    pub fn response_noun(&self) -> &'static str {
        match self {
            Upstream::Payments => "payment",
            Upstream::Surveys => "survey",
        }
    }
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Upstream::Payments => f.write_str("payments"),
            Upstream::Surveys => f.write_str("surveys"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Error querying {service}: {status}")]
    Upstream {
        service: Upstream,
        status: StatusCode,
    },
    #[error("Error deserializing {} response: {source}", .service.response_noun())]
    Deserialization {
        service: Upstream,
        source: serde_json::Error,
    },
    #[error("Error reaching {service}: {source}")]
    Transport {
        service: Upstream,
        source: reqwest::Error,
    },
    #[error("Request cancelled")]
    Cancelled,
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ReportError {
    /// HTTP status reported by the upstream, when the failure carries one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ReportError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
