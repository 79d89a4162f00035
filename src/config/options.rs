// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub command: Command,
    pub log_file: Option<PathBuf>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            command: Command::Help,
            log_file: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Scrape(ScrapeOptions),
    Normalize(NormalizeOptions),
    Supervisors(SupervisorOptions),
    Help,
}

/* ---------------- scrape ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub url: String,
    pub out: PathBuf,
    pub villages: bool,       // one extra postback per mandal
    pub pause_ms: u64,
    pub districts: Vec<String>, // empty = all
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: PORTAL_URL.to_string(),
            out: PathBuf::from(DEFAULT_SCRAPE_FILE),
            villages: false,
            pause_ms: REQUEST_PAUSE_MS,
            districts: Vec::new(),
        }
    }
}

impl ScrapeOptions {
    /// District filter, case-insensitive. No filter selects everything.
    pub fn wants_district(&self, name: &str) -> bool {
        self.districts.is_empty()
            || self.districts.iter().any(|d| d.trim().eq_ignore_ascii_case(name.trim()))
    }
}

/* ---------------- normalize ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub file: PathBuf,
    pub region: String,
    pub out: Option<PathBuf>,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_STRUCTURE_FILE),
            region: DEFAULT_REGION.to_string(),
            out: None,
        }
    }
}

impl NormalizeOptions {
    /// Where the result goes: in place unless redirected.
    pub fn target(&self) -> PathBuf {
        self.out.clone().unwrap_or_else(|| self.file.clone())
    }
}

/* ---------------- supervisors ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NumberSource {
    BuiltIn,
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupervisorOptions {
    pub out: PathBuf,
    pub database_url: Option<String>,
    pub numbers: NumberSource,
    pub contact_name: String,
}

impl Default for SupervisorOptions {
    fn default() -> Self {
        Self {
            out: PathBuf::from(DEFAULT_SQL_FILE),
            database_url: None,
            numbers: NumberSource::BuiltIn,
            contact_name: SUPERVISOR_CONTACT_NAME.to_string(),
        }
    }
}
