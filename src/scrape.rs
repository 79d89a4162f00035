// src/scrape.rs
use std::{path::PathBuf, time::Duration};

use log::{info, warn};

use crate::{
    config::consts::{DISTRICT_SELECT, MANDAL_SELECT, VILLAGE_SELECT},
    config::options::ScrapeOptions,
    core::net::{Session, Transport},
    error::{Error, Result},
    file,
    model::{ScrapedDistrict, ScrapedMandal},
    progress::Progress,
    specs::portal::{self, FormState, OptionItem, SelectField},
};

pub struct ScrapeSummary {
    pub path: PathBuf,
    pub districts: usize,
    pub mandals: usize,
    pub villages: usize,
    pub failed: Vec<String>,
    pub failed_mandals: Vec<(String, String)>,
}

/// What one walk over the portal produced.
#[derive(Debug, Default)]
pub struct Collected {
    pub districts: Vec<ScrapedDistrict>,
    /// Districts whose postback failed; absent from `districts`.
    pub failed: Vec<String>,
    /// `(district, mandal)` pairs whose village postback failed. These mandals
    /// are kept with an empty village list.
    pub failed_mandals: Vec<(String, String)>,
}

/// Scrape the portal with a real session and write the hierarchy to `opts.out`.
pub async fn run(
    opts: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<ScrapeSummary> {
    let session = Session::new()?;
    let Collected { districts, failed, failed_mandals } = collect(&session, opts, progress).await?;

    file::write_json(&opts.out, &districts)?;

    let summary = ScrapeSummary {
        path: opts.out.clone(),
        districts: districts.len(),
        mandals: districts.iter().map(|d| d.mandals.len()).sum(),
        villages: districts
            .iter()
            .flat_map(|d| &d.mandals)
            .map(|m| m.villages.len())
            .sum(),
        failed,
        failed_mandals,
    };
    info!(
        "Wrote {} districts / {} mandals / {} villages to {}",
        summary.districts,
        summary.mandals,
        summary.villages,
        summary.path.display()
    );
    Ok(summary)
}

/// Walk the district dropdown, one postback per district (and per mandal when
/// villages are wanted). A district whose postback fails is reported and
/// skipped. A failed village postback keeps the mandal and is recorded in
/// `failed_mandals`.
pub async fn collect<T: Transport>(
    transport: &T,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Collected> {
    let page = transport.get(&opts.url).await?;
    let state = portal::hidden_fields(&page);
    let district_field = portal::select_field(&page, DISTRICT_SELECT)
        .ok_or_else(|| Error::Portal(format!("no {DISTRICT_SELECT} dropdown on {}", opts.url)))?;

    if district_field.options.is_empty() {
        return Err(Error::Portal(format!("{DISTRICT_SELECT} has no districts")));
    }
    if state.get("__VIEWSTATE").is_none() {
        warn!("No __VIEWSTATE on the landing page; postbacks may be rejected");
    }

    let wanted: Vec<&OptionItem> = district_field
        .options
        .iter()
        .filter(|d| opts.wants_district(&d.text))
        .collect();
    if wanted.is_empty() {
        warn!("District filter {:?} matched nothing", opts.districts);
        if let Some(p) = progress.as_deref_mut() {
            p.log("No districts to fetch (after filtering).");
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(wanted.len());
    }

    let mut out = Collected { districts: Vec::with_capacity(wanted.len()), ..Collected::default() };

    for (i, district) in wanted.into_iter().enumerate() {
        if i > 0 {
            pause(opts).await;
        }
        info!("Fetching {}...", district.text);

        match fetch_district(transport, opts, &state, &district_field, district).await {
            Ok((d, village_failures)) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&d.district, d.mandals.len());
                    for mandal in &village_failures {
                        p.log(&format!("{} / {mandal}: villages not fetched", d.district));
                    }
                }
                out.failed_mandals
                    .extend(village_failures.into_iter().map(|m| (d.district.clone(), m)));
                out.districts.push(d);
            }
            Err(e) => {
                warn!("District {}: {e}", district.text);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&district.text, &e.to_string());
                }
                out.failed.push(district.text.clone());
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(out)
}

async fn fetch_district<T: Transport>(
    transport: &T,
    opts: &ScrapeOptions,
    state: &FormState,
    district_field: &SelectField,
    district: &OptionItem,
) -> Result<(ScrapedDistrict, Vec<String>)> {
    let selection = [(district_field.name.as_str(), district.value.as_str())];
    let form = state.postback(&district_field.name, &selection);
    let html = transport.post_form(&opts.url, &form).await?;

    let mandal_field = portal::select_field(&html, MANDAL_SELECT)
        .ok_or_else(|| Error::Portal(format!("no {MANDAL_SELECT} dropdown after selecting {}", district.text)))?;

    let mut mandals: Vec<ScrapedMandal> = mandal_field
        .options
        .iter()
        .map(|m| ScrapedMandal { id: m.value.clone(), name: m.text.clone(), villages: Vec::new() })
        .collect();
    let mut village_failures = Vec::new();

    if opts.villages {
        // the mandal postback must carry the state returned with the mandal list
        let district_state = portal::hidden_fields(&html);
        for mandal in &mut mandals {
            pause(opts).await;
            let selection = [
                (district_field.name.as_str(), district.value.as_str()),
                (mandal_field.name.as_str(), mandal.id.as_str()),
            ];
            let form = district_state.postback(&mandal_field.name, &selection);
            match transport.post_form(&opts.url, &form).await {
                Ok(resp) => {
                    mandal.villages = portal::select_options(&resp, VILLAGE_SELECT)
                        .into_iter()
                        .map(|v| v.text)
                        .collect();
                }
                Err(e) => {
                    warn!("Villages for {} / {}: {e}", district.text, mandal.name);
                    village_failures.push(mandal.name.clone());
                }
            }
        }
    }

    Ok((ScrapedDistrict { district: district.text.clone(), mandals }, village_failures))
}

async fn pause(opts: &ScrapeOptions) {
    if opts.pause_ms > 0 {
        tokio::time::sleep(Duration::from_millis(opts.pause_ms)).await;
    }
}
