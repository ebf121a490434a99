// src/stats/mod.rs

pub mod record;
pub mod season;

pub use record::{MatchRecord, StatKey, StatLine};
pub use season::{SeasonSummary, compute_season_stats};
