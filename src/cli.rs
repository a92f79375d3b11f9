// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::{
    config::options::AppOptions,
    data::{RaceRecord, RacesDocument},
    error::ScrapeResult,
    file, log, scrape,
};

/// Scrape Chiang Mai running races from Runlah into races.json
#[derive(Parser, Debug)]
#[command(name = "runlah_races", version, about, long_about = None)]
pub struct Cli {
    /// TOML file with [scrape] / [export] overrides
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Calendar page to fetch
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// Output JSON file
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Fetch timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// User-Agent header for the fetch
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Parse a saved copy of the page instead of fetching it
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Print the summary but do not write the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Also append logs to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Defaults, then the config file, then flags.
    pub fn options(&self) -> ScrapeResult<AppOptions> {
        let mut opts = match &self.config {
            Some(path) => AppOptions::load(path)?,
            None => AppOptions::default(),
        };

        if let Some(url) = &self.url {
            opts.scrape.source_url = url.clone();
        }
        if let Some(secs) = self.timeout {
            opts.scrape.timeout_secs = secs;
        }
        if let Some(ua) = &self.user_agent {
            opts.scrape.user_agent = ua.clone();
        }
        if let Some(out) = &self.out {
            opts.export.out_path = out.clone();
        }
        Ok(opts)
    }
}

pub fn run() -> ScrapeResult<()> {
    run_with(&Cli::parse())
}

pub fn run_with(cli: &Cli) -> ScrapeResult<()> {
    log::init(cli.verbose, cli.log_file.as_deref())?;
    let opts = cli.options()?;

    let races = match &cli.input {
        Some(path) => scrape::collect_races_from_file(path, &opts.scrape)?,
        None => scrape::collect_races(&opts.scrape)?,
    };
    let doc = RacesDocument::new(&opts.scrape.source_url, races);

    println!("Found {} races in {}", doc.races.len(), opts.scrape.province);

    if cli.dry_run {
        tracing::info!("Dry run: {} not written", opts.export.out_path.display());
    } else {
        let path = file::write_races_json(&opts.export.out_path, &doc)?;
        tracing::info!("Wrote {}", path.display());
    }

    print!("{}", summary_lines(&doc.races));
    Ok(())
}

/// One indented `date, dash, name` line per race.
pub fn summary_lines(races: &[RaceRecord]) -> String {
    races
        .iter()
        .map(|r| format!("  {} — {}\n", r.date, r.name))
        .collect()
}
