// src/specs/calendar.rs
//! Race cards on the Runlah province calendar (`/en/calendar/location?province=…`).
//!
//! Each card is an `<a href="/en/<event id>">` wrapping a banner image and a
//! few text runs: the race name, a date and usually `"<district>, <province>
//! province"`. Nothing about the card is addressed by class; fields are picked
//! out by what the text looks like, first match wins, in one forward pass.
//!
//! A card becomes a [`RaceRecord`] at the first `</a>` that finds it holding
//! both a name and a date. A card whose own anchor closes before that is
//! dropped without complaint.

use std::collections::HashSet;

use url::Url;

use super::dates::parse_race_date;
use crate::config::consts::{
    BOILERPLATE, EVENT_IMAGE_SEGMENT, EVENT_PATH_PREFIX, MIN_NAME_CHARS, NAV_PATHS, TEAMS_SEGMENT,
};
use crate::config::options::ScrapeOptions;
use crate::core::html::{self, StartTag, TagVisitor};
use crate::data::RaceRecord;
use crate::error::{ScrapeError, ScrapeResult};

/// Where links resolve and which province the page is about.
#[derive(Clone, Debug)]
pub struct CalendarSpec {
    base: Url,
    province: String,
}

impl CalendarSpec {
    pub fn new(base_url: &str, province: &str) -> ScrapeResult<Self> {
        let base = Url::parse(base_url).map_err(|source| ScrapeError::InvalidUrl {
            url: s!(base_url),
            source,
        })?;
        Ok(Self { base, province: s!(province) })
    }

    pub fn from_options(opts: &ScrapeOptions) -> ScrapeResult<Self> {
        Self::new(&opts.base_url, &opts.province)
    }

    pub fn province(&self) -> &str {
        &self.province
    }

    fn resolve(&self, href: &str) -> Option<String> {
        self.base.join(href).ok().map(String::from)
    }

    /// Absolute URL for an event-page href, `None` for anything else.
    /// Event pages are `/en/` plus one `[A-Za-z0-9_]+` segment.
    fn event_url(&self, href: &str) -> Option<String> {
        let slug = href.strip_prefix(EVENT_PATH_PREFIX)?;
        let is_slug = !slug.is_empty() && slug.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_');
        if !is_slug || NAV_PATHS.contains(&href) || href.contains(TEAMS_SEGMENT) {
            return None;
        }
        self.resolve(href)
    }
}

/// Parse a calendar page into races, sorted by date and unique by URL.
pub fn parse_doc(doc: &str, spec: &CalendarSpec) -> Vec<RaceRecord> {
    let t = std::time::Instant::now();
    let mut visitor = CalendarVisitor::new(spec);
    html::walk(doc, &mut visitor);
    let races = visitor.finish();
    tracing::debug!("Calendar: parsed {} races in {:?}", races.len(), t.elapsed());
    races
}

struct Candidate {
    race: RaceRecord,
    // Open <a> elements, the card's own included.
    depth: usize,
}

/// Tag visitor holding at most one open card.
pub struct CalendarVisitor<'a> {
    spec: &'a CalendarSpec,
    races: Vec<RaceRecord>,
    current: Option<Candidate>,
}

impl<'a> CalendarVisitor<'a> {
    pub fn new(spec: &'a CalendarSpec) -> Self {
        Self { spec, races: Vec::new(), current: None }
    }

    /// Sort by ISO date (stable) and drop any repeated URL, keeping the first.
    pub fn finish(self) -> Vec<RaceRecord> {
        if let Some(open) = self.current {
            tracing::debug!("Calendar: input ended inside card {}", open.race.url);
        }

        let mut races = self.races;
        races.sort_by(|a, b| a.date.cmp(&b.date));

        let mut seen = HashSet::new();
        races.retain(|r| seen.insert(r.url.clone()));
        races
    }

    fn close(&mut self, mut race: RaceRecord) {
        if !race.is_complete() {
            tracing::debug!("Calendar: dropped incomplete card {}", race.url);
            return;
        }
        if self.races.iter().any(|r| r.url == race.url) {
            tracing::debug!("Calendar: duplicate card {}", race.url);
            return;
        }
        if race.location.is_empty() {
            race.location = s!(self.spec.province());
        }
        self.races.push(race);
    }
}

impl TagVisitor for CalendarVisitor<'_> {
    fn start_tag(&mut self, tag: &StartTag) {
        match tag.name.as_str() {
            "a" => {
                // Anchors inside an open card never start another one.
                if let Some(open) = self.current.as_mut() {
                    open.depth += 1;
                    return;
                }
                if let Some(url) = tag.attr("href").and_then(|h| self.spec.event_url(h)) {
                    self.current = Some(Candidate { race: RaceRecord::new(url), depth: 1 });
                }
            }
            "img" => {
                let Some(open) = self.current.as_mut() else { return };
                if !open.race.image.is_empty() {
                    return;
                }
                if let Some(src) = tag.attr("src").filter(|s| s.contains(EVENT_IMAGE_SEGMENT)) {
                    open.race.image = self.spec.resolve(src).unwrap_or_else(|| s!(src));
                }
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        let Some(open) = self.current.as_mut() else { return };
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        let race = &mut open.race;

        if race.name.is_empty()
            && text.chars().count() >= MIN_NAME_CHARS
            && !BOILERPLATE.contains(&text)
        {
            race.name = s!(text);
        }

        if race.date.is_empty() {
            if let Some(date) = parse_race_date(text) {
                race.date = date.iso;
                race.date_display = date.display;
            }
        }

        let province = self.spec.province();
        if race.location.is_empty()
            && text.contains(province)
            && text.to_lowercase().contains("province")
        {
            race.location = text.replace(" province", "").trim().to_string();
        }
    }

    fn end_tag(&mut self, name: &str) {
        if name != "a" {
            return;
        }
        let Some(open) = self.current.as_mut() else { return };
        open.depth -= 1;
        // A stray unclosed inner <a> must not hold a finished card open.
        if open.depth == 0 || open.race.is_complete() {
            if let Some(done) = self.current.take() {
                self.close(done.race);
            }
        }
    }
}
