// src/model.rs
//! Typed records for the administrative hierarchy.
//!
//! Two document forms exist on disk:
//! - **source**: `{ "<Region>": [ { "district": .., "mandals": ["name", ..] } ] }`
//! - **normalized**: `[ { "district": .., "mandals": [ { "mandal": .., "villages": [] } ] } ]`
//!
//! The scraper writes a third, richer shape ([`ScrapedDistrict`]) that keeps the
//! portal's option ids around.

use serde::{Deserialize, Serialize};

pub type Village = String;

/// District as found in the source document: mandals are bare names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDistrict {
    pub district: String,
    pub mandals: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub district: String,
    pub mandals: Vec<Mandal>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mandal {
    pub mandal: String,
    pub villages: Vec<Village>,
}

impl Mandal {
    /// Mandal record with no villages yet.
    pub fn named(name: impl Into<String>) -> Self {
        Self { mandal: name.into(), villages: Vec::new() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedDistrict {
    pub district: String,
    pub mandals: Vec<ScrapedMandal>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedMandal {
    pub id: String,
    pub name: String,
    pub villages: Vec<Village>,
}
