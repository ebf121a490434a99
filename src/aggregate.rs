// src/aggregate.rs
//
// Round scores → per-player season lines. One grouping pass, no shared
// state between calls.

use std::collections::HashMap;

use crate::core::tenths::Tenths;
use crate::specs::supercoach::RoundScore;

/// One player's season line, derived from their round scores.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerSeasonAggregate {
    pub name: String,
    pub games_played: u32,
    pub total_score: i64,
    /// total / games, one-decimal fixed point.
    pub average_score: Tenths,
}

/// Group `scores` by exact name and compute games/total/average per player.
///
/// Name matching is exact string identity — no canonicalization, so two
/// spellings of one player stay two aggregates. Output is sorted by average
/// descending; ties keep first-encounter order (the sort is stable).
pub fn aggregate_players(scores: &[RoundScore]) -> Vec<PlayerSeasonAggregate> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, u32, i64)> = Vec::new();

    for s in scores {
        match index.get(s.name.as_str()) {
            Some(&i) => {
                let g = &mut groups[i];
                g.1 += 1;
                g.2 += s.score;
            }
            None => {
                index.insert(s.name.as_str(), groups.len());
                groups.push((s.name.clone(), 1, s.score));
            }
        }
    }

    let mut out: Vec<PlayerSeasonAggregate> = groups
        .into_iter()
        .map(|(name, games, total)| PlayerSeasonAggregate {
            name,
            games_played: games,
            total_score: total,
            average_score: Tenths::ratio(total, games as i64),
        })
        .collect();

    // Vec::sort_by is stable; equal averages retain encounter order.
    out.sort_by(|a, b| b.average_score.cmp(&a.average_score));
    out
}
