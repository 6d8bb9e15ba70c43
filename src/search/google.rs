//! Google Custom Search JSON API client (image search mode).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{CandidateImage, ImageSearch, SearchError, SearchQuery};
use crate::constants::RESULTS_PER_PAGE;

const GOOGLE_API_BASE: &str = "https://www.googleapis.com";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    link: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct GoogleImageSearch {
    client: Client,
    base_url: String,
    cse_id: String,
    api_key: String,
}

impl GoogleImageSearch {
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(cse_id: impl Into<String>, api_key: impl Into<String>) -> Result<Self, SearchError> {
        Self::with_base_url(GOOGLE_API_BASE, cse_id, api_key)
    }

    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(
        base_url: impl Into<String>,
        cse_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SearchError::network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            cse_id: cse_id.into(),
            api_key: api_key.into(),
        })
    }

    /// 1-based index of the first result on `page`.
    pub fn start_index(page: usize) -> usize {
        page.saturating_sub(1) * RESULTS_PER_PAGE + 1
    }
}

#[async_trait]
impl ImageSearch for GoogleImageSearch {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<CandidateImage>, SearchError> {
        let url = format!("{}/customsearch/v1", self.base_url);
        let start = Self::start_index(query.page).to_string();
        let num = RESULTS_PER_PAGE.to_string();

        debug!(page = query.page, safe = query.safety.as_param(), "Querying image search");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query.text.as_str()),
                ("cx", self.cse_id.as_str()),
                ("key", self.api_key.as_str()),
                ("searchType", "image"),
                ("start", start.as_str()),
                ("num", num.as_str()),
                ("safe", query.safety.as_param()),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach image search");
                if e.is_timeout() {
                    SearchError::network("request timed out")
                } else {
                    SearchError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error.message,
                Err(_) => format!("HTTP {status}"),
            };
            return Err(SearchError::api(status.as_u16(), message));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::decode(e.to_string()))?;

        Ok(body
            .items
            .into_iter()
            .map(|item| CandidateImage::new(item.link))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::GoogleImageSearch;

    #[test]
    fn pages_map_to_ten_result_offsets() {
        assert_eq!(GoogleImageSearch::start_index(1), 1);
        assert_eq!(GoogleImageSearch::start_index(2), 11);
        assert_eq!(GoogleImageSearch::start_index(5), 41);
    }
}
