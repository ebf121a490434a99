// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod params;
pub mod progress;
pub mod specs;

pub mod aggregate;
pub mod csv;
pub mod file;
pub mod runner;
pub mod scrape;
pub mod stats;
pub mod store;
