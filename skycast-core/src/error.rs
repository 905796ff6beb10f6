use crate::upstream::Upstream;
use thiserror::Error;

/// A single upstream call failing, split by where it went wrong.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent, the connection failed, or the body
    /// could not be read.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The body arrived but is not the JSON shape we expect.
    #[error("parse error: {0}")]
    Parse(#[source] serde_json::Error),
}

/// A [`FetchError`] tagged with which upstream produced it. This is what the
/// aggregator surfaces: the first failure wins and no partial result exists.
#[derive(Debug, Error)]
#[error("{upstream} upstream failed: {source}")]
pub struct UpstreamError {
    pub upstream: Upstream,
    #[source]
    pub source: FetchError,
}

impl UpstreamError {
    pub fn new(upstream: Upstream, source: FetchError) -> Self {
        Self { upstream, source }
    }
}
