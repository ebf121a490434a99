// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

/// Fixed per-season output name: `afl_supercoach_<year>.csv`.
pub fn season_filename(year: i32) -> String {
    format!("afl_supercoach_{year}.csv")
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Write one season's CSV into `out_dir`, creating the directory if needed.
/// Returns the path written.
pub fn write_season_csv(out_dir: &Path, year: i32, csv: &str) -> Result<PathBuf, Box<dyn Error>> {
    ensure_directory(out_dir)?;
    let path = out_dir.join(season_filename(year));
    fs::write(&path, csv)?;
    Ok(path)
}
