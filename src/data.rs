// src/data.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One race card from the calendar page.
///
/// `url` is the identity: no two records in an output share it.
/// `date` is ISO `YYYY-MM-DD`; `date_display` keeps the page's wording,
/// which may be a range such as `12-13 April 2025`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceRecord {
    pub name: String,
    pub url: String,
    pub image: String,
    pub date: String,
    pub date_display: String,
    pub location: String,
}

impl RaceRecord {
    pub fn new(url: String) -> Self {
        Self { url, ..Default::default() }
    }

    /// Both required fields are present.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.date.is_empty()
    }
}

/// The `races.json` envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RacesDocument {
    pub last_updated: String,
    pub source: String,
    pub races: Vec<RaceRecord>,
}

impl RacesDocument {
    pub fn new(source: &str, races: Vec<RaceRecord>) -> Self {
        Self::at(Utc::now(), source, races)
    }

    pub fn at(now: DateTime<Utc>, source: &str, races: Vec<RaceRecord>) -> Self {
        Self {
            last_updated: now.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            source: s!(source),
            races,
        }
    }
}
