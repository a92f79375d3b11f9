// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::data::RacesDocument;
use crate::error::{ScrapeError, ScrapeResult};

/// Write `doc` as pretty JSON (two-space indent, UTF-8 kept as-is) to `path`,
/// replacing whatever was there. Not atomic. Returns the path written.
pub fn write_races_json(path: &Path, doc: &RacesDocument) -> ScrapeResult<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(doc)?;

    let write_err = |source| ScrapeError::FileWrite { path: path.to_path_buf(), source };
    let file = File::create(path).map_err(write_err)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    out.write_all(json.as_bytes()).map_err(write_err)?;
    out.flush().map_err(write_err)?;

    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> ScrapeResult<()> {
    let write_err = |source| ScrapeError::FileWrite { path: dir.to_path_buf(), source };
    if dir.exists() && !dir.is_dir() {
        return Err(write_err(io::Error::other("path exists but is not a directory")));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(write_err)?;
    }
    Ok(())
}
