// src/config/consts.rs

// Net config
pub const SOURCE_URL: &str = "https://www.runlah.com/en/calendar/location?province=Chiang+Mai";
pub const BASE_URL: &str = "https://www.runlah.com";
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; ChiangMaiRaces/1.0)";
pub const TIMEOUT_SECS: u64 = 30;

// Scrape
pub const PROVINCE: &str = "Chiang Mai";
pub const EVENT_PATH_PREFIX: &str = "/en/";
pub const EVENT_IMAGE_SEGMENT: &str = "/images/event/";
pub const TEAMS_SEGMENT: &str = "/teams/";
pub const MIN_NAME_CHARS: usize = 4;

/// Site chrome that links into `/en/` but is never an event.
pub const NAV_PATHS: &[&str] = &[
    "/en",
    "/en/calendar",
    "/en/results",
    "/en/promote",
    "/en/about",
    "/en/terms",
    "/en/privacy",
    "/en/user/registers",
    "/en/user/settings",
];

/// Card text that is never a race name.
pub const BOILERPLATE: &[&str] = &["Detail", "Register now!", "View all other events..."];

// Export
pub const DEFAULT_OUT_FILE: &str = "races.json";
