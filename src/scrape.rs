// src/scrape.rs
use std::{fs, path::Path};

use crate::{
    config::options::ScrapeOptions,
    core::net,
    data::RaceRecord,
    error::{ScrapeError, ScrapeResult},
    specs::calendar::{self, CalendarSpec},
};

/// Fetch the calendar page and extract its races.
/// Fails before any output exists if the page cannot be fetched.
pub fn collect_races(opts: &ScrapeOptions) -> ScrapeResult<Vec<RaceRecord>> {
    let spec = CalendarSpec::from_options(opts)?;
    let doc = net::http_get(&opts.source_url, opts)?;
    Ok(extract(&doc, &spec))
}

/// Same as [`collect_races`] but reads a saved copy of the page.
pub fn collect_races_from_file(path: &Path, opts: &ScrapeOptions) -> ScrapeResult<Vec<RaceRecord>> {
    let spec = CalendarSpec::from_options(opts)?;
    let doc = fs::read_to_string(path).map_err(|source| ScrapeError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Parsing saved page {}", path.display());
    Ok(extract(&doc, &spec))
}

fn extract(doc: &str, spec: &CalendarSpec) -> Vec<RaceRecord> {
    let races = calendar::parse_doc(doc, spec);
    if races.is_empty() {
        // Layout drift shows up here, not as an error.
        tracing::warn!("No races found on the calendar page; has the layout changed?");
    }
    races
}
