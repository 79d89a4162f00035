// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications. Each spec covers a single page and
//! encodes *where the ground truth lives in the HTML* and *how to extract it*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of portal pages (select lists, hidden form state).
//! - **Postback shaping**: the form payload a page expects when one of its
//!   auto-postback dropdowns changes.
//! - **Tolerant extraction** using `core::html` helpers (case-insensitive tag
//!   blocks, attribute lookup, tag stripping, entity decoding).
//!
//! ## What does **not** live here
//! - **Networking and pacing** – `scrape` drives the session and the pauses.
//! - **Persistence** – the caller decides where the hierarchy is written.
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::run → Session::get / post_form
//!                   ↘ specs::portal::{hidden_fields, select_field} on each response
//! ```
//!
//! ## Conventions & invariants
//! - Every function takes the raw HTML text and is testable offline.
//! - The first `<option>` of each dropdown is the “-- Select --” placeholder and
//!   is always skipped.
//! - ASP.NET may prefix control ids (`ctl00_Main_ddlDistrict`); lookups accept
//!   the bare id as a suffix, and postbacks use the control's real `name`.
pub mod portal;
