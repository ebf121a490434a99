// src/specs/mod.rs
//! Page-specific extraction specs.
//!
//! Each spec encodes *where the ground truth lives in the HTML* for one
//! remote page and how to pull it out robustly: case-insensitive tag-block
//! scanning via `core::html`, entity/whitespace normalization, and silent
//! per-row skips for cells that fail to parse. Specs are pure — no network,
//! no caching, no output formatting. Higher layers (`scrape`, `runner`)
//! decide when to fetch and what to do with the rows.

pub mod supercoach;
