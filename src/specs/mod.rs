// src/specs/mod.rs
//! # Page “specs”
//!
//! Page-specific extraction rules. A spec knows *where the ground truth lives
//! in the HTML* of one page and how to read it without a DOM.
//!
//! ## What lives here
//! - **Pure parsing** of fetched markup through the `core::html` event walker.
//! - **Field heuristics** (what counts as a race name, a date, a location).
//! - **Shaping** into [`crate::data::RaceRecord`] values, sorted and unique by URL.
//!
//! ## What does **not** live here
//! - Fetching (`core::net`) and writing output (`file`).
//! - Deciding where the page comes from (`scrape`).
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::collect_races → core::net::http_get
//!                             → specs::calendar::parse_doc → Vec<RaceRecord>
//!     → file::write_races_json
//! ```
//!
//! ## Conventions & invariants
//! - One forward pass; no lookahead, no re-reading.
//! - Structural drift on the site degrades to fewer records, never to an error.
//! - Specs are testable **offline** against captured or synthetic pages.
pub mod calendar;
pub mod dates;
