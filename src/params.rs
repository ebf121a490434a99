// src/params.rs
use std::path::PathBuf;

use crate::config::consts::DEFAULT_OUT_DIR;
use crate::config::options::ScrapeOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    /// Scrape SuperCoach rounds and export per-season CSVs.
    Supercoach,
    /// Aggregate locally stored match records for one player/season.
    SeasonStats,
}

#[derive(Clone, Debug)]
pub struct Params {
    pub page: PageKind,
    pub years: Vec<i32>,       // seasons to scrape
    pub scrape: ScrapeOptions, // rounds, delay, year bounds
    pub out: PathBuf,          // output directory for CSVs
    pub player_id: u32,        // season-stats: whose records
    pub season: Option<i32>,   // season-stats: which year
}

impl Params {
    pub fn new() -> Self {
        Self {
            page: PageKind::Supercoach,
            years: Vec::new(),
            scrape: ScrapeOptions::default(),
            out: PathBuf::from(DEFAULT_OUT_DIR),
            player_id: 1,
            season: None,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
