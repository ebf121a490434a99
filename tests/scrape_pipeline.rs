// tests/scrape_pipeline.rs
//
// Season pipeline behavior with an injected page fetcher: partial-result
// policy, ordering, and parameter validation.

use std::error::Error;

use footy_scrape::config::options::ScrapeOptions;
use footy_scrape::error::Error as ScrapeError;
use footy_scrape::scrape::fetch_season_scores;

fn opts(max_round: u32) -> ScrapeOptions {
    ScrapeOptions {
        max_round,
        request_delay_ms: 0, // no pacing in tests
        ..Default::default()
    }
}

fn round_page(names_scores: &[(&str, i64)]) -> String {
    let mut doc = String::from("<table><tr><td>#</td><td>Player</td><td>Score</td></tr>");
    for (i, (name, score)) in names_scores.iter().enumerate() {
        doc.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            i + 1,
            name,
            score
        ));
    }
    doc.push_str("</table>");
    doc
}

#[test]
fn failed_round_is_skipped_not_fatal() {
    let mut fetch = |_year: i32, round: u32| -> Result<String, Box<dyn Error>> {
        if round == 5 {
            Err("HTTP error: 503".into())
        } else {
            Ok(round_page(&[("Some Player", 100)]))
        }
    };

    let scores = fetch_season_scores(2024, &opts(24), &mut fetch, None).unwrap();
    // 23 of 24 rounds contribute one score each.
    assert_eq!(scores.len(), 23);
    assert!(scores.iter().all(|s| s.round != 5));
}

#[test]
fn results_are_round_ascending() {
    let mut fetch = |_year: i32, round: u32| -> Result<String, Box<dyn Error>> {
        Ok(round_page(&[("A", round as i64), ("B", round as i64 + 1)]))
    };

    let scores = fetch_season_scores(2024, &opts(4), &mut fetch, None).unwrap();
    assert_eq!(scores.len(), 8);
    let rounds: Vec<u32> = scores.iter().map(|s| s.round).collect();
    let mut sorted = rounds.clone();
    sorted.sort();
    assert_eq!(rounds, sorted);
}

#[test]
fn all_rounds_failing_yields_empty_result_not_error() {
    let mut fetch =
        |_year: i32, _round: u32| -> Result<String, Box<dyn Error>> { Err("no route".into()) };

    let scores = fetch_season_scores(2024, &opts(6), &mut fetch, None).unwrap();
    assert!(scores.is_empty());
}

#[test]
fn year_validated_before_any_fetch() {
    let mut calls = 0usize;
    let mut fetch = |_year: i32, _round: u32| -> Result<String, Box<dyn Error>> {
        calls += 1;
        Ok(String::new())
    };

    let err = fetch_season_scores(1987, &opts(24), &mut fetch, None).unwrap_err();
    assert!(matches!(err, ScrapeError::InvalidParameter { name: "year", .. }));
    assert_eq!(calls, 0);
}

#[test]
fn round_bounds_validated() {
    let mut fetch =
        |_year: i32, _round: u32| -> Result<String, Box<dyn Error>> { Ok(String::new()) };

    let err = fetch_season_scores(2024, &opts(0), &mut fetch, None).unwrap_err();
    assert!(matches!(err, ScrapeError::InvalidParameter { name: "round", .. }));

    let err = fetch_season_scores(2024, &opts(25), &mut fetch, None).unwrap_err();
    assert!(matches!(err, ScrapeError::InvalidParameter { name: "round", .. }));
}
