// src/error.rs
//
// Error taxonomy for the two pipelines.
//
// - InvalidParameter: out-of-range year/round/season; raised before any I/O.
// - InvalidInput: malformed data fed into the match aggregator's source
//   (e.g. a corrupt store file); fatal for that call.
// - FetchFailure: per-round network/HTTP failure. Never surfaced as a hard
//   error by the season pipeline; logged and folded into an empty round
//   (partial-result policy).

use std::error::Error as StdError;
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidParameter {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    InvalidInput(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter { name, value, min, max } => {
                write!(f, "Invalid {name}: {value} (expected {min}..={max})")
            }
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
        }
    }
}

impl StdError for Error {}

/// One round's fetch went wrong. Carried internally by the season pipeline;
/// the round contributes zero scores and the pipeline moves on.
#[derive(Debug)]
pub struct FetchFailure {
    pub year: i32,
    pub round: u32,
    pub reason: String,
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fetch failed for {} round {}: {}",
            self.year, self.round, self.reason
        )
    }
}

impl StdError for FetchFailure {}
