// src/config/consts.rs

// Net config
pub const HOST: &str = "www.footywire.com";
pub const PREFIX: &str = "/afl/footy/";

// Scrape
pub const MAX_ROUNDS: u32 = 24; // standard AFL season
pub const REQUEST_DELAY_MS: u64 = 500; // be polite
pub const YEAR_MIN: i32 = 2000;
pub const YEAR_MAX: i32 = 2100;

// Local store
pub const STORE_DIR: &str = ".store";
pub const MATCHES_FILE: &str = "matches.csv";
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
