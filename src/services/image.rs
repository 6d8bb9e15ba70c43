//! Image resolution: policy guards, rate limiting, provider search and embeddable-image sampling.

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, instrument};

use crate::constants::{BLOCKED_QUERY_TERM, MAX_SAMPLE_ATTEMPTS, MAX_SEARCH_PAGE, MIN_SEARCH_PAGE};
use crate::search::{CandidateImage, ImageSearch, SearchQuery};
use crate::services::cooldown::CooldownGate;
use crate::services::random::RandomSource;
use crate::services::safety::SafetyLevel;

/// Terminal result of one image request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutcome {
    Found(String),
    Refused,
    Cooldown,
    NotFound,
    NoEmbeddable,
    ProviderError(String),
}

/// Animated-only requests accept `.gif`; everything else also accepts `.jpg` and `.png`.
pub fn is_embeddable(url: &str, animated_only: bool) -> bool {
    if url.ends_with(".gif") {
        return true;
    }
    !animated_only && (url.ends_with(".jpg") || url.ends_with(".png"))
}

/// Draws candidates uniformly with replacement until one is embeddable, at most
/// [`MAX_SAMPLE_ATTEMPTS`] times. May miss a valid candidate on an unlucky run; the caller
/// reports that as [`ImageOutcome::NoEmbeddable`].
pub fn sample_embeddable<'a>(
    candidates: &'a [CandidateImage],
    animated_only: bool,
    rng: &dyn RandomSource,
) -> Option<&'a CandidateImage> {
    let last = candidates.len().checked_sub(1)?;
    (0..MAX_SAMPLE_ATTEMPTS)
        .filter_map(|_| candidates.get(rng.between(0, last)))
        .find(|candidate| is_embeddable(&candidate.url, animated_only))
}

pub struct ImageResolver {
    search: Arc<dyn ImageSearch>,
    rng: Arc<dyn RandomSource>,
    cooldown: CooldownGate,
}

impl ImageResolver {
    pub fn new(search: Arc<dyn ImageSearch>, rng: Arc<dyn RandomSource>) -> Self {
        Self::with_cooldown(search, rng, CooldownGate::default())
    }

    pub fn with_cooldown(
        search: Arc<dyn ImageSearch>,
        rng: Arc<dyn RandomSource>,
        cooldown: CooldownGate,
    ) -> Self {
        Self {
            search,
            rng,
            cooldown,
        }
    }

    pub fn cooldown(&self) -> &CooldownGate {
        &self.cooldown
    }

    pub fn rng(&self) -> &dyn RandomSource {
        self.rng.as_ref()
    }

    /// Runs one image request end to end. Provider failures are converted into
    /// [`ImageOutcome::ProviderError`] and never escape.
    #[instrument(level = "debug", skip(self, query), fields(safe = safety.as_param()))]
    pub async fn resolve(&self, query: &str, safety: SafetyLevel, animated_only: bool) -> ImageOutcome {
        if query.contains(BLOCKED_QUERY_TERM) {
            info!(target: "image", "Refused an image request matching the blocked term");
            return ImageOutcome::Refused;
        }

        // Reserved before the search so slow provider calls still count against the window.
        if !self.cooldown.check_and_reserve(Instant::now()) {
            return ImageOutcome::Cooldown;
        }

        let request = SearchQuery {
            text: query.to_string(),
            page: self.rng.between(MIN_SEARCH_PAGE, MAX_SEARCH_PAGE),
            safety,
            animated_only,
        };

        let candidates = match self.search.search(&request).await {
            Ok(candidates) => candidates,
            Err(e) => {
                error!(target: "image", query = %query, error = %e, "There was an error requesting the image");
                return ImageOutcome::ProviderError(e.to_string());
            }
        };

        if candidates.is_empty() {
            info!(target: "image", query = %query, "No images were found matching the request");
            return ImageOutcome::NotFound;
        }

        match sample_embeddable(&candidates, animated_only, self.rng.as_ref()) {
            Some(image) => {
                info!(target: "image", url = %image.url, "Posted a new image");
                ImageOutcome::Found(image.url.clone())
            }
            None => {
                info!(target: "image", query = %query, "No embeddable images were found matching the request");
                ImageOutcome::NoEmbeddable
            }
        }
    }
}
