// Central constants for rate limiting, search paging and canned content.
use std::time::Duration;

/// Minimum gap between two accepted image requests, process-wide.
pub const IMAGE_COOLDOWN: Duration = Duration::from_millis(2500);
/// Search pages are groups of 10 results; a random page in this range is requested.
pub const MIN_SEARCH_PAGE: usize = 1;
pub const MAX_SEARCH_PAGE: usize = 5;
pub const RESULTS_PER_PAGE: usize = 10;
/// Random picks made over a result set before giving up on finding an embeddable image.
pub const MAX_SAMPLE_ATTEMPTS: usize = 10;

pub const COMMAND_PREFIX: &str = "!";
pub const LOG_FILE_NAME: &str = "image-bot.log";

/// Queries containing this substring are refused before any search is made. Case-sensitive.
pub const BLOCKED_QUERY_TERM: &str = "child";

pub const BALL_RESPONSES: [&str; 8] = [
    "yes",
    "no",
    "maybe",
    "definitely",
    "absolutely not",
    "stupid question",
    "nodding",
    "shaking my head",
];
