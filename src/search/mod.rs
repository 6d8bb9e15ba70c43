//! Image search provider boundary.

pub mod google;

use async_trait::async_trait;
use thiserror::Error;

use crate::services::safety::SafetyLevel;

pub use google::GoogleImageSearch;

/// A single search request. `page` is 1-based; each page holds ten results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub page: usize,
    pub safety: SafetyLevel,
    pub animated_only: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateImage {
    pub url: String,
}

impl CandidateImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("search provider returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed search response: {message}")]
    Decode { message: String },
}

impl SearchError {
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

#[async_trait]
pub trait ImageSearch: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<CandidateImage>, SearchError>;
}
