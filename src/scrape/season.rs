// src/scrape/season.rs
//
// Season scrape driver. Strictly sequential: one round in flight at a time,
// with a fixed pause between fetches so the source server isn't hammered.
//
// Partial-result policy: a round whose fetch fails is logged and contributes
// zero scores; the season continues. Callers inspect lengths rather than
// assume completeness.

use std::{error::Error as StdError, thread, time::Duration};

use crate::config::consts::MAX_ROUNDS;
use crate::config::options::ScrapeOptions;
use crate::core::net;
use crate::error::{Error, FetchFailure};
use crate::progress::Progress;
use crate::specs::supercoach::{RoundScore, extract_round_scores};

/// Supplies raw page markup for a (year, round) pair.
/// Implemented by `HttpFetch` for live runs and by closures in tests.
pub trait PageFetch {
    fn fetch(&mut self, year: i32, round: u32) -> Result<String, Box<dyn StdError>>;
}

impl<F> PageFetch for F
where
    F: FnMut(i32, u32) -> Result<String, Box<dyn StdError>>,
{
    fn fetch(&mut self, year: i32, round: u32) -> Result<String, Box<dyn StdError>> {
        self(year, round)
    }
}

/// Live fetcher for the supercoach_round page.
pub struct HttpFetch;

impl PageFetch for HttpFetch {
    fn fetch(&mut self, year: i32, round: u32) -> Result<String, Box<dyn StdError>> {
        net::http_get(&format!("supercoach_round?year={year}&round={round}&p=&s=T"))
    }
}

/// Fetch and extract all rounds of one season, in round-ascending order.
///
/// Errors only on invalid parameters, before any I/O. Per-round fetch
/// failures are folded into an empty round; the returned list holds
/// whatever was collected.
pub fn fetch_season_scores(
    year: i32,
    opts: &ScrapeOptions,
    fetch: &mut dyn PageFetch,
    mut progress: Option<&mut (dyn Progress + 'static)>,
) -> Result<Vec<RoundScore>, Error> {
    let (y_min, y_max) = opts.year_bounds;
    if !(y_min..=y_max).contains(&year) {
        return Err(Error::InvalidParameter {
            name: "year",
            value: year as i64,
            min: y_min as i64,
            max: y_max as i64,
        });
    }
    if opts.max_round < 1 || opts.max_round > MAX_ROUNDS {
        return Err(Error::InvalidParameter {
            name: "round",
            value: opts.max_round as i64,
            min: 1,
            max: MAX_ROUNDS as i64,
        });
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.max_round as usize);
    }

    let mut all: Vec<RoundScore> = Vec::new();

    for round in 1..=opts.max_round {
        let picked: Result<Vec<RoundScore>, FetchFailure> = fetch
            .fetch(year, round)
            .map(|doc| extract_round_scores(&doc, round))
            .map_err(|e| FetchFailure { year, round, reason: e.to_string() });

        match picked {
            Ok(mut scores) => {
                logd!("{year} round {round}: {} scores", scores.len());
                all.append(&mut scores);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(round);
                }
            }
            Err(fail) => {
                loge!("{fail}");
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("Round {round} failed, skipping"));
                }
            }
        }

        if round < opts.max_round && opts.request_delay_ms > 0 {
            thread::sleep(Duration::from_millis(opts.request_delay_ms));
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(all)
}
