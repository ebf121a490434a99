// tests/export_e2e.rs
//
// Full export run with an injected fetcher: scrape → aggregate → CSV files
// on disk, one per requested season.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use footy_scrape::params::Params;
use footy_scrape::progress::Progress;
use footy_scrape::runner::run_supercoach;

fn temp_out_dir(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("footy_scrape_out_{tag}_{}", std::process::id()))
}

fn page(rows: &[(&str, i64)]) -> String {
    let mut doc = String::from("<table><tr><td>#</td><td>Player</td><td>Score</td></tr>");
    for (name, score) in rows {
        doc.push_str(&format!("<tr><td>.</td><td>{name}</td><td>{score}</td></tr>"));
    }
    doc.push_str("</table>");
    doc
}

#[test]
fn writes_one_csv_per_season() {
    let out = temp_out_dir("per_season");
    let mut params = Params::new();
    params.years = vec![2023, 2024];
    params.out = out.clone();
    params.scrape.max_round = 2;
    params.scrape.request_delay_ms = 0;

    let mut fetch = |year: i32, round: u32| -> Result<String, Box<dyn Error>> {
        Ok(page(&[("Player A", 100 + round as i64), ("Player B", 90 + year as i64 % 10)]))
    };

    let summary = run_supercoach(&params, &mut fetch, None).unwrap();
    assert_eq!(summary.files_written.len(), 2);
    assert!(out.join("afl_supercoach_2023.csv").exists());
    assert!(out.join("afl_supercoach_2024.csv").exists());

    let text = fs::read_to_string(out.join("afl_supercoach_2023.csv")).unwrap();
    assert!(text.starts_with("Player Name,Games Played,Total Score,Average SuperCoach Score\n"));
    assert!(text.contains("\"Player A\",2,"));

    let _ = fs::remove_dir_all(&out);
}

#[test]
fn one_progress_sink_serves_a_whole_multi_year_run() {
    #[derive(Default)]
    struct RecordingProgress {
        begins: usize,
        rounds_done: Vec<u32>,
        lines: Vec<String>,
    }
    impl Progress for RecordingProgress {
        fn begin(&mut self, _total: usize) {
            self.begins += 1;
        }
        fn log(&mut self, msg: &str) {
            self.lines.push(msg.to_string());
        }
        fn item_done(&mut self, round: u32) {
            self.rounds_done.push(round);
        }
    }

    let out = temp_out_dir("progress");
    let mut params = Params::new();
    params.years = vec![2023, 2024];
    params.out = out.clone();
    params.scrape.max_round = 2;
    params.scrape.request_delay_ms = 0;

    let mut fetch = |_y: i32, _r: u32| -> Result<String, Box<dyn Error>> {
        Ok(page(&[("Player A", 100)]))
    };

    // The same sink is reborrowed once per year and once per round.
    let mut progress = RecordingProgress::default();
    run_supercoach(&params, &mut fetch, Some(&mut progress)).unwrap();

    assert_eq!(progress.begins, 2);
    assert_eq!(progress.rounds_done, [1, 2, 1, 2]);
    assert!(progress.lines.iter().any(|l| l.contains("2023")));
    assert!(progress.lines.iter().any(|l| l.contains("2024")));

    let _ = fs::remove_dir_all(&out);
}

#[test]
fn season_with_no_scores_writes_no_file() {
    let out = temp_out_dir("empty_season");
    let mut params = Params::new();
    params.years = vec![2024];
    params.out = out.clone();
    params.scrape.max_round = 3;
    params.scrape.request_delay_ms = 0;

    // Pages exist but hold no qualifying rows.
    let mut fetch = |_y: i32, _r: u32| -> Result<String, Box<dyn Error>> {
        Ok("<html><p>No games this week</p></html>".to_string())
    };

    let summary = run_supercoach(&params, &mut fetch, None).unwrap();
    assert!(summary.files_written.is_empty());
    assert!(!out.join("afl_supercoach_2024.csv").exists());

    let _ = fs::remove_dir_all(&out);
}
