// src/core/sanitize.rs

/// Decode the HTML entities the portal emits: the common named ones plus
/// decimal/hex character references. Unknown entities are left verbatim.
pub fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];

        let decoded = tail
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| entity(&tail[1..semi]).map(|ch| (ch, semi)));

        match decoded {
            Some((ch, semi)) => {
                out.push(ch);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}

/// Visible text of an HTML fragment: tags dropped, entities decoded, ends
/// trimmed. Inner whitespace is kept as the page has it.
pub fn text_of(fragment: &str) -> String {
    decode_entities(&super::html::strip_tags(fragment)).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_and_numeric_entities() {
        assert_eq!(decode_entities("A &amp; B"), "A & B");
        assert_eq!(decode_entities("&lt;b&gt;&#39;x&#x27;"), "<b>'x'");
        assert_eq!(decode_entities("Nizamabad&nbsp;(Rural)"), "Nizamabad (Rural)");
    }

    #[test]
    fn stray_ampersand_survives() {
        assert_eq!(decode_entities("R&B &unknown; tail &"), "R&B &unknown; tail &");
    }

    #[test]
    fn text_trims_ends_only() {
        assert_eq!(text_of("\n   Bhadradri  <b>Kothagudem</b>  "), "Bhadradri  Kothagudem");
        assert_eq!(text_of("&nbsp;Nirmal&#32;"), "Nirmal");
    }
}
