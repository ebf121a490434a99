// src/stats/season.rs
//
// Season aggregation over match records: totals, per-game averages and
// personal bests. Pure; the input list is never mutated.

use std::collections::BTreeMap;

use crate::config::consts::{YEAR_MAX, YEAR_MIN};
use crate::core::tenths::Tenths;
use crate::error::Error;

use super::record::{MatchRecord, StatKey};

/// Derived season view. Not persisted.
///
/// When `total_games == 0` the three maps are empty; there is no
/// divide-by-zero path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeasonSummary {
    pub total_games: usize,
    pub totals: BTreeMap<StatKey, u64>,
    /// Per-game averages as one-decimal strings ("3.0", never "3").
    pub averages: BTreeMap<StatKey, String>,
    /// Best single-match value per counter.
    pub personal_bests: BTreeMap<StatKey, u32>,
}

/// Aggregate `records` for one season.
///
/// Synthetic records and records from other seasons are excluded here;
/// callers pass the raw list. An empty filtered set is a valid result,
/// not an error.
pub fn compute_season_stats(
    records: &[MatchRecord],
    season: i32,
) -> Result<SeasonSummary, Error> {
    if !(YEAR_MIN..=YEAR_MAX).contains(&season) {
        return Err(Error::InvalidParameter {
            name: "season",
            value: season as i64,
            min: YEAR_MIN as i64,
            max: YEAR_MAX as i64,
        });
    }

    let picked: Vec<&MatchRecord> = records
        .iter()
        .filter(|r| !r.synthetic && r.season() == Some(season))
        .collect();

    if picked.is_empty() {
        return Ok(SeasonSummary::default());
    }

    let games = picked.len();
    let mut totals = BTreeMap::new();
    let mut averages = BTreeMap::new();
    let mut personal_bests = BTreeMap::new();

    for key in StatKey::ALL {
        let mut total = 0u64;
        let mut best = 0u32;
        for rec in &picked {
            let v = rec.stats.get(key);
            total += v as u64;
            best = best.max(v);
        }
        totals.insert(key, total);
        averages.insert(key, Tenths::ratio(total as i64, games as i64).to_string());
        personal_bests.insert(key, best);
    }

    Ok(SeasonSummary {
        total_games: games,
        totals,
        averages,
        personal_bests,
    })
}
