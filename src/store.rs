// src/store.rs
//
// Local match-record store: auto-assigned integer ids, queryable by player.
// Persists under .store/ as a single CSV with a fixed column layout
// (id, playerId, date, isSynthetic, then one column per stat counter).

use std::{fs, io, path::{Path, PathBuf}};

use crate::config::consts::{MATCHES_FILE, STORE_DIR};
use crate::csv::{parse_rows, write_row};
use crate::error::Error;
use crate::stats::record::{MatchRecord, StatKey, StatLine};

#[derive(Debug)]
pub struct MatchStore {
    next_id: u32,
    records: Vec<MatchRecord>,
}

impl Default for MatchStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchStore {
    pub fn new() -> Self {
        Self { next_id: 1, records: Vec::new() }
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from(STORE_DIR).join(MATCHES_FILE)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add a record and return its id.
    pub fn create(&mut self, player_id: u32, date: &str, synthetic: bool, stats: StatLine) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(MatchRecord {
            id,
            player_id,
            date: s!(date),
            synthetic,
            stats,
        });
        id
    }

    pub fn get(&self, id: u32) -> Option<&MatchRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Explicit update; the aggregator itself never mutates records.
    pub fn update(&mut self, id: u32, date: &str, stats: StatLine) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(rec) => {
                rec.date = s!(date);
                rec.stats = stats;
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() < before
    }

    /// All matches for one player, newest first (ISO dates sort
    /// lexicographically). `include_synthetic` keeps demo records in the
    /// listing; season aggregation excludes them again regardless.
    pub fn matches_for(&self, player_id: u32, include_synthetic: bool) -> Vec<MatchRecord> {
        let mut out: Vec<MatchRecord> = self
            .records
            .iter()
            .filter(|r| r.player_id == player_id && (include_synthetic || !r.synthetic))
            .cloned()
            .collect();
        out.sort_by(|a, b| b.date.cmp(&a.date));
        out
    }

    /// Drop every synthetic record; returns how many were removed.
    pub fn clear_synthetic(&mut self) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !r.synthetic);
        before - self.records.len()
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut buf: Vec<u8> = Vec::new();
        write_row(&mut buf, &header_row(), ',')?;
        for rec in &self.records {
            write_row(&mut buf, &record_row(rec), ',')?;
        }
        fs::write(path, buf)
    }

    /// Load from `path`. A missing file is an empty store; a present but
    /// malformed file is `Error::InvalidInput`.
    pub fn load(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let text = fs::read_to_string(path)
            .map_err(|e| Error::InvalidInput(format!("{}: {e}", path.display())))?;

        let mut rows = parse_rows(&text, ',').into_iter();
        match rows.next() {
            Some(h) if h == header_row() => {}
            _ => {
                return Err(Error::InvalidInput(format!(
                    "{}: missing or unrecognized header row",
                    path.display()
                )));
            }
        }

        let mut store = Self::new();
        for (i, row) in rows.enumerate() {
            let rec = parse_record(&row)
                .map_err(|why| Error::InvalidInput(format!("row {}: {why}", i + 2)))?;
            store.next_id = store.next_id.max(rec.id + 1);
            store.records.push(rec);
        }
        Ok(store)
    }
}

fn header_row() -> Vec<String> {
    let mut h = vec![s!("id"), s!("playerId"), s!("date"), s!("isSynthetic")];
    h.extend(StatKey::ALL.iter().map(|k| s!(k.label())));
    h
}

fn record_row(rec: &MatchRecord) -> Vec<String> {
    let mut row = vec![
        rec.id.to_string(),
        rec.player_id.to_string(),
        rec.date.clone(),
        s!(if rec.synthetic { "1" } else { "0" }),
    ];
    row.extend(StatKey::ALL.iter().map(|&k| rec.stats.get(k).to_string()));
    row
}

fn parse_record(row: &[String]) -> Result<MatchRecord, String> {
    let expect = 4 + StatKey::ALL.len();
    if row.len() != expect {
        return Err(format!("expected {expect} columns, got {}", row.len()));
    }

    let id: u32 = row[0].parse().map_err(|_| format!("bad id {:?}", row[0]))?;
    let player_id: u32 = row[1]
        .parse()
        .map_err(|_| format!("bad playerId {:?}", row[1]))?;
    let synthetic = match row[3].as_str() {
        "1" => true,
        "0" => false,
        other => return Err(format!("bad isSynthetic {other:?}")),
    };

    let mut stats = StatLine::default();
    for (cell, &key) in row[4..].iter().zip(StatKey::ALL.iter()) {
        let v: u32 = cell
            .parse()
            .map_err(|_| format!("bad {} {:?}", key.label(), cell))?;
        stats.set(key, v);
    }

    Ok(MatchRecord {
        id,
        player_id,
        date: row[2].clone(),
        synthetic,
        stats,
    })
}
