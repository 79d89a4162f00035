// src/supervisors.rs
//! Supervisor contact seeding.
//!
//! Locations are fetched sorted by name and zipped, by position, with the
//! supervisor number list. There is no key tying a number to a location: if the
//! two lists drift apart in length the pairing silently shifts, so a count
//! mismatch is reported loudly and the shorter list decides how many rows are
//! written.

use std::fmt::Write as _;

use log::{info, warn};
use sqlx::{Connection, FromRow, PgConnection, postgres::PgConnectOptions};

use crate::config::consts::SUPERVISOR_NUMBERS;
use crate::config::options::{NumberSource, SupervisorOptions};
use crate::error::{Error, Result};
use crate::file;

const LOCATIONS_QUERY: &str = r#"
    SELECT id::text AS id, name FROM public.locations
    WHERE type = 'city' OR type = 'village'
    ORDER BY name
"#;

#[derive(Clone, Debug, PartialEq, Eq, FromRow)]
pub struct Location {
    pub id: String,
    pub name: String,
}

pub struct SqlPlan {
    pub sql: String,
    pub inserts: usize,
    /// `(locations, numbers)` when the counts differ.
    pub mismatch: Option<(usize, usize)>,
}

/// Fetch, render, write. Returns the rendered plan.
pub async fn run(opts: &SupervisorOptions) -> Result<SqlPlan> {
    let numbers = load_numbers(&opts.numbers)?;

    let mut conn = connect(opts.database_url.as_deref()).await?;
    let locations = fetch_locations(&mut conn).await?;
    conn.close().await?;

    let plan = render_sql(&locations, &numbers, &opts.contact_name);
    if let Some((locs, nums)) = plan.mismatch {
        warn!(
            "Number of mandals ({locs}) does not match number of supervisor numbers ({nums})!"
        );
    }

    file::write_text(&opts.out, &plan.sql)?;
    info!("SQL file '{}' generated ({} inserts)", opts.out.display(), plan.inserts);
    Ok(plan)
}

/// Explicit URL wins; otherwise `DATABASE_URL`; otherwise the libpq `PG*`
/// variables that `PgConnectOptions::new` reads.
pub async fn connect(url: Option<&str>) -> Result<PgConnection> {
    let url = url
        .map(str::to_string)
        .or_else(|| std::env::var("DATABASE_URL").ok());
    let conn = match url {
        Some(url) => PgConnection::connect(&url).await?,
        None => PgConnection::connect_with(&PgConnectOptions::new()).await?,
    };
    Ok(conn)
}

pub async fn fetch_locations(conn: &mut PgConnection) -> Result<Vec<Location>> {
    let rows = sqlx::query_as::<_, Location>(LOCATIONS_QUERY)
        .fetch_all(conn)
        .await?;
    info!("Fetched {} locations", rows.len());
    Ok(rows)
}

pub fn load_numbers(source: &NumberSource) -> Result<Vec<String>> {
    let numbers = match source {
        NumberSource::BuiltIn => SUPERVISOR_NUMBERS.iter().map(|s| s.to_string()).collect(),
        NumberSource::File(path) => file::read_list(path)?,
    };
    if numbers.is_empty() {
        return Err(Error::usage("supervisor number list is empty"));
    }
    Ok(numbers)
}

/// Render the SQL script: wipe complaints and contacts, then one insert per
/// `(location, number)` pair in positional order.
pub fn render_sql(locations: &[Location], numbers: &[String], contact_name: &str) -> SqlPlan {
    let mismatch = (locations.len() != numbers.len()).then_some((locations.len(), numbers.len()));

    let mut sql = String::new();
    sql.push_str("-- Delete all complaints and supervisor contacts\n");
    sql.push_str("DELETE FROM public.complaints;\n");
    sql.push_str("DELETE FROM public.location_contacts;\n\n");
    sql.push_str("-- Insert new supervisor contacts\n");

    let mut inserts = 0usize;
    for (loc, phone) in locations.iter().zip(numbers) {
        let _ = writeln!(
            sql,
            "INSERT INTO public.location_contacts (location_id, contact_name, phone) VALUES ('{}', '{}', '{}');",
            quote(&loc.id),
            quote(contact_name),
            quote(phone),
        );
        inserts += 1;
    }

    SqlPlan { sql, inserts, mismatch }
}

/// Body of a single-quoted SQL literal.
fn quote(s: &str) -> String {
    s.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_are_doubled() {
        assert_eq!(quote("O'Brien"), "O''Brien");
        assert_eq!(quote("plain"), "plain");
    }

    #[test]
    fn builtin_list_is_not_empty() {
        let n = load_numbers(&NumberSource::BuiltIn).unwrap();
        assert_eq!(n.len(), SUPERVISOR_NUMBERS.len());
        assert_eq!(n[0], "8101001");
    }
}
