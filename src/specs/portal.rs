// src/specs/portal.rs
//! Scraping *spec* for the district/mandal/village report page.
//!
//! The page is an ASP.NET WebForms form with three cascading dropdowns
//! (`ddlDistrict` → `ddlMandal` → `ddlVillage`). Changing one posts the whole
//! form back with `__EVENTTARGET` set to that dropdown, and the response carries
//! the next dropdown's options plus fresh hidden state (`__VIEWSTATE`,
//! `__EVENTVALIDATION`, ...). A postback without the current hidden state is
//! rejected by the server, so every request is built from the previous response.

use crate::core::html::{attr, inner_after_open_tag, next_open_tag_ci, next_tag_block_ci, open_tag};
use crate::core::sanitize::{decode_entities, text_of};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionItem {
    pub value: String,
    pub text: String,
}

/// A dropdown as the form knows it: `name` is the posted field name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectField {
    pub name: String,
    pub options: Vec<OptionItem>,
}

/// Hidden inputs of the form, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    fields: Vec<(String, String)>,
}

impl FormState {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Payload for a dropdown change: event fields first, then the carried
    /// hidden state, then the current selections (`(field name, value)`).
    pub fn postback(&self, target: &str, selections: &[(&str, &str)]) -> Vec<(String, String)> {
        let mut out = vec![
            ("__EVENTTARGET".to_string(), target.to_string()),
            ("__EVENTARGUMENT".to_string(), String::new()),
        ];
        for (name, value) in &self.fields {
            let overridden = name == "__EVENTTARGET"
                || name == "__EVENTARGUMENT"
                || selections.iter().any(|(s, _)| s == name);
            if !overridden {
                out.push((name.clone(), value.clone()));
            }
        }
        for (name, value) in selections {
            out.push((name.to_string(), value.to_string()));
        }
        out
    }
}

/// Collect every `<input type="hidden">` with a name.
pub fn hidden_fields(doc: &str) -> FormState {
    let mut fields = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = next_open_tag_ci(doc, "input", pos) {
        let tag = &doc[s..e];
        pos = e;

        let is_hidden = attr(tag, "type").is_some_and(|t| t.eq_ignore_ascii_case("hidden"));
        if !is_hidden {
            continue;
        }
        if let Some(name) = attr(tag, "name") {
            let value = attr(tag, "value").map(decode_entities).unwrap_or_default();
            fields.push((decode_entities(name), value));
        }
    }
    FormState { fields }
}

/// Find the dropdown whose id is `id` (or ends in `_id`) and read its options,
/// placeholder dropped.
pub fn select_field(doc: &str, id: &str) -> Option<SelectField> {
    let suffix = format!("_{id}");
    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(doc, "<select", "</select>", pos) {
        let block = &doc[s..e];
        pos = e;

        let opener = open_tag(block);
        let Some(found_id) = attr(opener, "id") else { continue };
        if found_id != id && !found_id.ends_with(&suffix) {
            continue;
        }

        let name = attr(opener, "name").unwrap_or(found_id).to_string();
        return Some(SelectField { name, options: read_options(block) });
    }
    None
}

/// Options of dropdown `id`; empty when the page has no such dropdown.
pub fn select_options(doc: &str, id: &str) -> Vec<OptionItem> {
    select_field(doc, id).map(|f| f.options).unwrap_or_default()
}

fn read_options(select_block: &str) -> Vec<OptionItem> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(select_block, "<option", "</option>", pos) {
        let block = &select_block[s..e];
        pos = e;

        // trimmed only: inner spacing is part of the name as the portal spells it
        let text = text_of(&inner_after_open_tag(block));
        let value = attr(open_tag(block), "value")
            .map(decode_entities)
            .unwrap_or_else(|| text.clone());
        out.push(OptionItem { value, text });
    }
    // first entry is the "-- Select --" placeholder
    if !out.is_empty() {
        out.remove(0);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
<form method="post" action="./DistManVillage.aspx" id="form1">
<input type="hidden" name="__EVENTTARGET" id="__EVENTTARGET" value="" />
<input type="hidden" name="__VIEWSTATE" id="__VIEWSTATE" value="/wEPDwUK+abc=" />
<input type="hidden" name="__EVENTVALIDATION" id="__EVENTVALIDATION" value="ev&amp;1" />
<input type="text" name="txtSearch" value="ignored" />
<select name="ctl00$Main$ddlDistrict" onchange="javascript:setTimeout('__doPostBack(\'ctl00$Main$ddlDistrict\',\'\')', 0)" id="ctl00_Main_ddlDistrict">
    <option selected="selected" value="0">--Select--</option>
    <option value="01">
        ADILABAD
    </option>
    <option value="02">Bhadradri   Kothagudem</option>
    <option value="03">Jogulamba &amp; Gadwal</option>
</select>
<select name="ddlMandal" id="ddlMandal">
    <option value="0">--Select--</option>
</select>
</form>"#;

    #[test]
    fn districts_skip_placeholder() {
        let field = select_field(PAGE, "ddlDistrict").unwrap();
        assert_eq!(field.name, "ctl00$Main$ddlDistrict");
        let texts: Vec<_> = field.options.iter().map(|o| o.text.as_str()).collect();
        assert_eq!(texts, ["ADILABAD", "Bhadradri   Kothagudem", "Jogulamba & Gadwal"]);
        assert_eq!(field.options[0].value, "01");
    }

    #[test]
    fn placeholder_only_select_is_empty() {
        assert!(select_options(PAGE, "ddlMandal").is_empty());
        assert!(select_options(PAGE, "ddlVillage").is_empty());
    }

    #[test]
    fn hidden_state_is_carried() {
        let state = hidden_fields(PAGE);
        assert_eq!(state.len(), 3);
        assert_eq!(state.get("__VIEWSTATE"), Some("/wEPDwUK+abc="));
        assert_eq!(state.get("__EVENTVALIDATION"), Some("ev&1"));
        assert_eq!(state.get("txtSearch"), None);
    }

    #[test]
    fn postback_overrides_event_fields() {
        let state = hidden_fields(PAGE);
        let form = state.postback("ctl00$Main$ddlDistrict", &[("ctl00$Main$ddlDistrict", "02")]);
        assert_eq!(form[0], ("__EVENTTARGET".into(), "ctl00$Main$ddlDistrict".into()));
        assert_eq!(form[1], ("__EVENTARGUMENT".into(), String::new()));
        assert_eq!(form.iter().filter(|(n, _)| n == "__EVENTTARGET").count(), 1);
        assert!(form.contains(&("__VIEWSTATE".into(), "/wEPDwUK+abc=".into())));
        assert_eq!(form.last().unwrap(), &("ctl00$Main$ddlDistrict".into(), "02".into()));
    }
}
