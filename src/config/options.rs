// src/config/options.rs
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use super::consts::*;
use crate::error::{ScrapeError, ScrapeResult};

/// Run configuration. `Default` is the fixed Runlah / Chiang Mai setup;
/// a TOML file and then CLI flags may override any part of it.
#[derive(Clone, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    pub fn load(path: &Path) -> ScrapeResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| ScrapeError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| ScrapeError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrapeOptions {
    /// Calendar page to fetch.
    pub source_url: String,
    /// Relative hrefs and image srcs resolve against this.
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Location keyword, also the fallback location.
    pub province: String,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            source_url: s!(SOURCE_URL),
            base_url: s!(BASE_URL),
            user_agent: s!(USER_AGENT),
            timeout_secs: TIMEOUT_SECS,
            province: s!(PROVINCE),
        }
    }
}

impl ScrapeOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportOptions {
    pub out_path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from(DEFAULT_OUT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_fixed_runlah_setup() {
        let opts = AppOptions::default();
        assert_eq!(opts.scrape.source_url, SOURCE_URL);
        assert_eq!(opts.scrape.base_url, "https://www.runlah.com");
        assert_eq!(opts.scrape.timeout(), Duration::from_secs(30));
        assert_eq!(opts.scrape.province, "Chiang Mai");
        assert_eq!(opts.export.out_path, PathBuf::from("races.json"));
    }

    #[test]
    fn toml_overrides_only_what_it_names() {
        let opts = AppOptions::from_toml(
            r#"
            [scrape]
            timeout_secs = 5

            [export]
            out_path = "site/data/races.json"
            "#,
        )
        .unwrap();

        assert_eq!(opts.scrape.timeout_secs, 5);
        assert_eq!(opts.scrape.user_agent, USER_AGENT);
        assert_eq!(opts.export.out_path, PathBuf::from("site/data/races.json"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(AppOptions::from_toml("[scrape]\nretries = 3\n").is_err());
    }

    #[test]
    fn missing_config_file_is_a_read_error() {
        let err = AppOptions::load(Path::new("definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ScrapeError::FileRead { .. }));
    }
}
