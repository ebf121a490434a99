// tests/match_store.rs
//
// Store persistence round-trip and the store → season-stats path.

use std::fs;
use std::path::PathBuf;

use footy_scrape::error::Error;
use footy_scrape::stats::record::{StatKey, StatLine};
use footy_scrape::stats::season::compute_season_stats;
use footy_scrape::store::MatchStore;

fn temp_store_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "footy_scrape_{tag}_{}.csv",
        std::process::id()
    ))
}

#[test]
fn save_then_load_preserves_records_and_ids() {
    let path = temp_store_path("roundtrip");

    let mut store = MatchStore::new();
    let stats = StatLine { kicks: 12, goals: 2, tackles: 5, ..Default::default() };
    store.create(1, "2025-04-05", false, stats);
    store.create(1, "2025-04-12", true, StatLine::default());
    store.create(2, "2025-05-03", false, StatLine { marks: 7, ..Default::default() });
    store.save(&path).unwrap();

    let loaded = MatchStore::load(&path).unwrap();
    assert_eq!(loaded.len(), 3);
    let rec = loaded.get(1).unwrap();
    assert_eq!(rec.stats.kicks, 12);
    assert_eq!(rec.date, "2025-04-05");
    assert!(loaded.get(2).unwrap().synthetic);

    // New ids continue after the highest persisted one.
    let mut loaded = loaded;
    assert_eq!(loaded.create(1, "2025-06-01", false, StatLine::default()), 4);

    let _ = fs::remove_file(&path);
}

#[test]
fn missing_file_loads_as_empty_store() {
    let store = MatchStore::load(&temp_store_path("missing")).unwrap();
    assert!(store.is_empty());
}

#[test]
fn corrupt_file_is_invalid_input() {
    let path = temp_store_path("corrupt");
    fs::write(&path, "this,is,not\na,store,file\n").unwrap();

    let err = MatchStore::load(&path).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));

    let _ = fs::remove_file(&path);
}

#[test]
fn stored_records_feed_season_stats() {
    let mut store = MatchStore::new();
    store.create(1, "2025-04-05", false, StatLine { kicks: 5, ..Default::default() });
    store.create(1, "2025-04-12", false, StatLine { kicks: 7, ..Default::default() });
    store.create(1, "2025-04-19", false, StatLine { kicks: 9, ..Default::default() });
    // Demo record and other-season record must not leak into the summary.
    store.create(1, "2025-04-26", true, StatLine { kicks: 40, ..Default::default() });
    store.create(1, "2024-04-05", false, StatLine { kicks: 30, ..Default::default() });

    let records = store.matches_for(1, true);
    let summary = compute_season_stats(&records, 2025).unwrap();

    assert_eq!(summary.total_games, 3);
    assert_eq!(summary.totals[&StatKey::Kicks], 21);
    assert_eq!(summary.averages[&StatKey::Kicks], "7.0");
    assert_eq!(summary.personal_bests[&StatKey::Kicks], 9);
}
