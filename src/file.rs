// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};

use crate::config::consts::{FILE_PREFIX, FILE_TIMESTAMP_FMT};
use crate::error::{Result, ScrapeError};
use crate::record::{GameRecord, HEADERS};

/// `steam_games_2025-03-01_14-05-09.csv`
pub fn export_filename(stamp: &DateTime<Local>) -> String {
    format!("{}_{}.csv", FILE_PREFIX, stamp.format(FILE_TIMESTAMP_FMT))
}

/// Write every record, with the fixed header, into `dir`. Nothing is written
/// (and `None` returned) when there are no records. Rows go to a hidden
/// `.part` file first, renamed into place once complete.
pub fn write_records(
    dir: &Path,
    records: &[GameRecord],
    stamp: &DateTime<Local>,
) -> Result<Option<PathBuf>> {
    if records.is_empty() {
        return Ok(None);
    }

    if !dir.as_os_str().is_empty() {
        ensure_directory(dir)?;
    }
    let name = export_filename(stamp);
    let path = dir.join(&name);
    let tmp = dir.join(format!(".{name}.part"));

    // A half-written export never lands under the final name.
    let written = write_csv(&tmp, records)
        .and_then(|()| fs::rename(&tmp, &path).map_err(ScrapeError::from));
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    Ok(Some(path))
}

fn write_csv(path: &Path, records: &[GameRecord]) -> Result<()> {
    let mut w = csv::Writer::from_path(path)?;
    w.write_record(HEADERS)?;
    for rec in records {
        w.write_record(rec.to_row())?;
    }
    w.flush()?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::NotADirectory(dir.display().to_string()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
