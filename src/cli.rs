// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::consts::{YEAR_MAX, YEAR_MIN};
use crate::params::{PageKind, Params};
use crate::progress::Progress;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    if params.page == PageKind::Supercoach && params.years.is_empty() {
        return Err("No years given (e.g. --years 2023-2025)".into());
    }

    let mut progress = ConsoleProgress::default();
    crate::runner::run(&params, Some(&mut progress)).map(|_| ())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--page" => {
                let v = args.next().ok_or("Missing value for --page")?;
                params.page = match v.to_ascii_lowercase().as_str() {
                    "supercoach" => PageKind::Supercoach,
                    "season-stats" | "stats" => PageKind::SeasonStats,
                    other => return Err(format!("Unknown page: {}", other).into()),
                };}
            "-y" | "--years" => {
                let v = args.next().ok_or("Missing value for --years")?;
                params.years = parse_years_list(&v)?;}
            "--year" => {
                let v: i32 = args.next().ok_or("Missing year")?.parse()?;
                check_year(v)?;
                params.years.push(v);}
            "-r" | "--rounds" => {
                let v: u32 = args.next().ok_or("Missing value for --rounds")?.parse()?;
                params.scrape.max_round = v;}
            "--delay" => {
                let v: u64 = args.next().ok_or("Missing value for --delay")?.parse()?;
                params.scrape.request_delay_ms = v;}
            "-o" | "--out" => params.out = PathBuf::from(args.next().ok_or("Missing output dir")?),
            "--player" => {
                let v: u32 = args.next().ok_or("Missing value for --player")?.parse()?;
                params.player_id = v;}
            "--season" => {
                let v: i32 = args.next().ok_or("Missing value for --season")?.parse()?;
                check_year(v)?;
                params.season = Some(v);}
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

fn check_year(v: i32) -> Result<(), Box<dyn std::error::Error>> {
    if !(YEAR_MIN..=YEAR_MAX).contains(&v) {
        return Err(format!("Year out of range ({YEAR_MIN}..{YEAR_MAX}): {v}").into());
    }
    Ok(())
}

/// "2024", "2023,2025" and "2023-2025" (inclusive range) all work.
fn parse_years_list(s: &str) -> Result<Vec<i32>, Box<dyn std::error::Error>> {
    let mut out = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        if let Some(dash) = part.find('-') {
            let a: i32 = part[..dash].trim().parse()?;
            let b: i32 = part[dash + 1..].trim().parse()?;
            if a > b { return Err(format!("Invalid range: {}", part).into()); }
            for v in a..=b {
                check_year(v)?;
                out.push(v);
            }
        } else {
            let v: i32 = part.parse()?;
            check_year(v)?;
            out.push(v);
        }
    }
    out.sort_unstable();
    out.dedup();
    Ok(out)
}

/* ---------------- Console progress sink ---------------- */

#[derive(Default)]
struct ConsoleProgress {
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, round: u32) {
        eprintln!("  round {round}/{}", self.total);
    }
}
