// src/config/options.rs

use super::consts::{MAX_ROUNDS, REQUEST_DELAY_MS, YEAR_MAX, YEAR_MIN};

/// Knobs for one season's scrape run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Upper bound on rounds fetched per season (1..=MAX_ROUNDS).
    pub max_round: u32,
    /// Fixed pause between successive round fetches. Not adaptive.
    pub request_delay_ms: u64,
    /// Validity range for the `year` parameter.
    pub year_bounds: (i32, i32),
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            max_round: MAX_ROUNDS,
            request_delay_ms: REQUEST_DELAY_MS,
            year_bounds: (YEAR_MIN, YEAR_MAX),
        }
    }
}
