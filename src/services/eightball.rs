use crate::constants::BALL_RESPONSES;
use crate::services::random::RandomSource;

/// Picks one of the fixed magic 8-ball answers uniformly.
pub fn pick_response(rng: &dyn RandomSource) -> &'static str {
    let idx = rng.between(0, BALL_RESPONSES.len() - 1);
    BALL_RESPONSES.get(idx).copied().unwrap_or(BALL_RESPONSES[0])
}

/// Image query used to illustrate an answer.
pub fn answer_query(response: &str) -> String {
    format!("{response} gif")
}
