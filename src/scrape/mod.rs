// src/scrape/mod.rs
mod season;

pub use season::{HttpFetch, PageFetch, fetch_season_scores};
