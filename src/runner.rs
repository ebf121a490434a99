// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use crate::{
    aggregate, csv, file,
    params::{PageKind, Params},
    progress::Progress,
    scrape::{HttpFetch, PageFetch, fetch_season_scores},
    stats::record::StatKey,
    stats::season::compute_season_stats,
    store::MatchStore,
};

/// Summary of what was produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
}

/// Top-level runner: dispatch on page kind and run.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
///
/// The sink is `dyn Progress + 'static`: `&mut` is invariant over the
/// object lifetime, and tying it to the reference lifetime would pin the
/// first per-loop reborrow for the whole call.
pub fn run(
    params: &Params,
    progress: Option<&mut (dyn Progress + 'static)>,
) -> Result<RunSummary, Box<dyn Error>> {
    match params.page {
        PageKind::Supercoach => run_supercoach(params, &mut HttpFetch, progress),
        PageKind::SeasonStats => run_season_stats(params, progress),
    }
}

/* ---------------- SuperCoach CSV export ---------------- */

/// Scrape each requested season, aggregate per player, export one CSV per
/// year. A season with no scores at all is reported and skipped — a valid
/// outcome, not a failure.
pub fn run_supercoach(
    params: &Params,
    fetch: &mut dyn PageFetch,
    mut progress: Option<&mut (dyn Progress + 'static)>,
) -> Result<RunSummary, Box<dyn Error>> {
    let mut written = Vec::with_capacity(params.years.len());

    for &year in &params.years {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetching SuperCoach scores for {year}…"));
        }

        let scores = fetch_season_scores(year, &params.scrape, fetch, progress.as_deref_mut())?;
        if scores.is_empty() {
            logf!("No scores found for {year}");
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("No scores found for {year}"));
            }
            continue;
        }

        let players = aggregate::aggregate_players(&scores);
        let text = csv::supercoach_csv(&players);
        let path = file::write_season_csv(&params.out, year, &text)?;

        logf!("{year}: wrote {} ({} players)", path.display(), players.len());
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("{year}: {} players → {}", players.len(), path.display()));
        }
        written.push(path);
    }

    Ok(RunSummary { files_written: written })
}

/* ---------------- Local season stats ---------------- */

fn run_season_stats(
    params: &Params,
    mut progress: Option<&mut (dyn Progress + 'static)>,
) -> Result<RunSummary, Box<dyn Error>> {
    let season = params
        .season
        .ok_or("--season is required for season stats")?;

    let store = MatchStore::load(&MatchStore::default_path())?;
    let records = store.matches_for(params.player_id, true);
    let summary = compute_season_stats(&records, season)?;

    if summary.total_games == 0 {
        println!(
            "No matches recorded for player {} in season {season}",
            params.player_id
        );
        return Ok(RunSummary { files_written: Vec::new() });
    }

    println!(
        "Season {season}, player {}: {} games",
        params.player_id, summary.total_games
    );
    println!("{:<14} {:>7} {:>7} {:>6}", "Stat", "Total", "Avg", "Best");
    for key in StatKey::ALL {
        println!(
            "{:<14} {:>7} {:>7} {:>6}",
            key.label(),
            summary.totals[&key],
            summary.averages[&key],
            summary.personal_bests[&key],
        );
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(RunSummary { files_written: Vec::new() })
}
