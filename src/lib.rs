// src/lib.rs

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod error;
pub mod file;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod progress;
pub mod scrape;
pub mod supervisors;

pub use error::{Error, Result};
