// src/core/html.rs
//! Tolerant, case-insensitive HTML slicing. No DOM: callers scan within known
//! blocks. ASCII-only lowercasing keeps byte offsets valid between the original
//! and the lowered text.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Next `<o ...> ... c` block at or after `from`, as byte offsets into `s`
/// (end is exclusive and includes the closing pattern).
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

/// Next opening tag `<name ...>` at or after `from`; returns the span of the tag
/// itself. Used for void elements such as `<input>`.
pub fn next_open_tag_ci(s: &str, name: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let pat = format!("<{}", to_lower(name));
    let mut pos = from;
    loop {
        let start = lc.get(pos..)?.find(&pat)? + pos;
        let after = start + pat.len();
        // whole tag name only: "<input" must not match "<inputs"
        match lc.as_bytes().get(after) {
            Some(b) if b.is_ascii_alphanumeric() => {
                pos = after;
                continue;
            }
            _ => {}
        }
        let end = s[after..].find('>')? + after + 1;
        return Some((start, end));
    }
}

/// The opening tag of a block, `<...>` included.
pub fn open_tag(block: &str) -> &str {
    match block.find('>') {
        Some(e) => &block[..=e],
        None => block,
    }
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    String::new()
}

/// Raw (still entity-encoded) value of attribute `name` in an opening tag.
/// Walks the tag attribute by attribute, so text inside another attribute's
/// quoted value never matches. Handles double, single and unquoted values;
/// names compare case-insensitively. A bare attribute (`selected`) yields `""`.
pub fn attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let b = tag.as_bytes();
    let n = b.len();
    let is_space = |i: usize| b[i].is_ascii_whitespace();

    // skip "<tagname"
    let mut i = usize::from(b.first() == Some(&b'<'));
    while i < n && !is_space(i) && b[i] != b'>' && b[i] != b'/' {
        i += 1;
    }

    loop {
        while i < n && (is_space(i) || b[i] == b'/') {
            i += 1;
        }
        if i >= n || b[i] == b'>' {
            return None;
        }

        let name_start = i;
        while i < n && !is_space(i) && b[i] != b'=' && b[i] != b'>' && b[i] != b'/' {
            i += 1;
        }
        let attr_name = &tag[name_start..i];

        while i < n && is_space(i) {
            i += 1;
        }
        let value = if i < n && b[i] == b'=' {
            i += 1;
            while i < n && is_space(i) {
                i += 1;
            }
            match b.get(i) {
                Some(&q) if q == b'"' || q == b'\'' => {
                    let v_start = i + 1;
                    let v_end = tag[v_start..].find(q as char).map_or(n, |e| v_start + e);
                    i = (v_end + 1).min(n);
                    &tag[v_start..v_end]
                }
                _ => {
                    let v_start = i;
                    while i < n && !is_space(i) && b[i] != b'>' {
                        i += 1;
                    }
                    &tag[v_start..i]
                }
            }
        } else {
            ""
        };

        if attr_name.eq_ignore_ascii_case(name) {
            return Some(value);
        }
    }
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_quoting_styles() {
        let tag = r#"<input type="hidden" NAME='__VIEWSTATE' value=abc123 />"#;
        assert_eq!(attr(tag, "type"), Some("hidden"));
        assert_eq!(attr(tag, "name"), Some("__VIEWSTATE"));
        assert_eq!(attr(tag, "value"), Some("abc123"));
        assert_eq!(attr(tag, "id"), None);
    }

    #[test]
    fn attr_needs_whole_name() {
        let tag = r#"<select data-id="x" id="ddlDistrict">"#;
        assert_eq!(attr(tag, "id"), Some("ddlDistrict"));
    }

    #[test]
    fn attr_ignores_names_inside_quoted_values() {
        let tag = r#"<input type="hidden" title="old name=BAD" name="__VIEWSTATE" value="x">"#;
        assert_eq!(attr(tag, "name"), Some("__VIEWSTATE"));
        assert_eq!(attr(tag, "value"), Some("x"));

        let select = r#"<select onchange="pick(this); id='wrong'" name='ctl00$ddlMandal' id="ctl00_ddlMandal">"#;
        assert_eq!(attr(select, "id"), Some("ctl00_ddlMandal"));
        assert_eq!(attr(select, "name"), Some("ctl00$ddlMandal"));
    }

    #[test]
    fn bare_attribute_is_empty() {
        let tag = r#"<option selected value=01>"#;
        assert_eq!(attr(tag, "selected"), Some(""));
        assert_eq!(attr(tag, "value"), Some("01"));
    }

    #[test]
    fn attr_value_may_be_empty() {
        assert_eq!(attr(r#"<input name="__EVENTARGUMENT" value="">"#, "value"), Some(""));
    }

    #[test]
    fn open_tag_skips_longer_names() {
        let doc = "<inputs x><input a=1>";
        let (s, e) = next_open_tag_ci(doc, "input", 0).unwrap();
        assert_eq!(&doc[s..e], "<input a=1>");
    }

    #[test]
    fn block_is_case_insensitive() {
        let doc = "<p><SELECT id=a><option>1</option></Select></p>";
        let (s, e) = next_tag_block_ci(doc, "<select", "</select>", 0).unwrap();
        assert_eq!(&doc[s..e], "<SELECT id=a><option>1</option></Select>");
        assert_eq!(inner_after_open_tag("<option value=1> Adilabad </option>"), " Adilabad ");
    }
}
