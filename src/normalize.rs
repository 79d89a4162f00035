// src/normalize.rs
//! Hierarchy normalizer: one-shot migration of the region document into the
//! flat list-of-districts form.
//!
//! The transform itself ([`normalize`]) is pure. [`normalize_file`] wraps it with
//! the read / overwrite cycle. Running it on an already normalized file fails
//! (the top level is then an array) and leaves the file as it was.

use log::{debug, info};
use serde_json::Value;

use crate::config::options::NormalizeOptions;
use crate::error::{Error, Result};
use crate::file;
use crate::model::{District, Mandal, RawDistrict};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizeSummary {
    pub districts: usize,
    pub mandals: usize,
}

/// Re-key every mandal name into a `{mandal, villages: []}` record.
/// Names and order are carried over untouched.
pub fn normalize(raw: Vec<RawDistrict>) -> Vec<District> {
    raw.into_iter()
        .map(|d| District {
            district: d.district,
            mandals: d.mandals.into_iter().map(Mandal::named).collect(),
        })
        .collect()
}

/// Pull `region` out of a parsed document and normalize it.
pub fn normalize_value(doc: &Value, region: &str) -> Result<Vec<District>> {
    let obj = doc.as_object().ok_or_else(|| {
        Error::Shape(format!(
            "expected an object with a {region:?} key at the top level, found {}",
            kind_of(doc)
        ))
    })?;

    let districts = obj.get(region).ok_or_else(|| Error::MissingRegion {
        region: region.to_string(),
        found: obj.keys().cloned().collect(),
    })?;

    let raw: Vec<RawDistrict> = serde_json::from_value(districts.clone())
        .map_err(|e| Error::Shape(format!("{region}: {e}")))?;

    Ok(normalize(raw))
}

/// Read the document, normalize it and write the result back.
/// Target is `opts.out` when set, otherwise the input file itself.
pub fn normalize_file(opts: &NormalizeOptions) -> Result<NormalizeSummary> {
    let doc: Value = file::read_json(&opts.file)?;
    let districts = normalize_value(&doc, &opts.region)?;

    let summary = NormalizeSummary {
        districts: districts.len(),
        mandals: districts.iter().map(|d| d.mandals.len()).sum(),
    };
    debug!("{}: {} districts, {} mandals", opts.region, summary.districts, summary.mandals);

    let target = opts.target();
    file::write_json(&target, &districts)?;
    info!(
        "Normalized {} districts / {} mandals into {}",
        summary.districts,
        summary.mandals,
        target.display()
    );

    Ok(summary)
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn adilabad_example() {
        let doc = json!({"Telangana": [{"district": "Adilabad", "mandals": ["Utnoor", "Boath"]}]});
        let out = normalize_value(&doc, "Telangana").unwrap();
        assert_eq!(
            serde_json::to_value(&out).unwrap(),
            json!([{"district": "Adilabad", "mandals": [
                {"mandal": "Utnoor", "villages": []},
                {"mandal": "Boath", "villages": []}
            ]}])
        );
    }

    #[test]
    fn empty_region_gives_empty_list() {
        let out = normalize_value(&json!({"Telangana": []}), "Telangana").unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn missing_region_is_an_error() {
        let err = normalize_value(&json!({"Andhra": []}), "Telangana").unwrap_err();
        match err {
            Error::MissingRegion { region, found } => {
                assert_eq!(region, "Telangana");
                assert_eq!(found, vec!["Andhra".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn normalized_document_is_rejected() {
        let already = json!([{"district": "Adilabad", "mandals": [{"mandal": "Utnoor", "villages": []}]}]);
        assert!(matches!(normalize_value(&already, "Telangana"), Err(Error::Shape(_))));
    }

    #[test]
    fn mandal_must_be_a_string() {
        let doc = json!({"Telangana": [{"district": "Adilabad", "mandals": [{"mandal": "Utnoor"}]}]});
        assert!(matches!(normalize_value(&doc, "Telangana"), Err(Error::Shape(_))));
    }

    #[test]
    fn names_are_copied_verbatim() {
        let raw = vec![RawDistrict {
            district: "  Hanumakonda ".into(),
            mandals: vec!["HASANPARTHY".into(), "Kamalapur ".into(), "ఆత్మకూర్".into()],
        }];
        let out = normalize(raw);
        assert_eq!(out[0].district, "  Hanumakonda ");
        let names: Vec<_> = out[0].mandals.iter().map(|m| m.mandal.as_str()).collect();
        assert_eq!(names, ["HASANPARTHY", "Kamalapur ", "ఆత్మకూర్"]);
        assert!(out[0].mandals.iter().all(|m| m.villages.is_empty()));
    }
}
