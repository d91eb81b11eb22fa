use indexmap::IndexMap;
use regex::Regex;

use crate::ExtractOptions;

/// Occurrence weight for a name declared through `@font-face`. A loaded
/// font is a much stronger design signal than a stack mention.
const FONT_FACE_WEIGHT: usize = 3;

lazy_static! {
    static ref FONT_FAMILY_REGEX: Regex = Regex::new(r"font-family\s*:\s*([^;{}]+)").unwrap();
    static ref FONT_FACE_REGEX: Regex =
        Regex::new(r#"@font-face\s*\{[^}]*?font-family\s*:\s*['"]?([^;'"}]+)"#).unwrap();
}

/// Count font-family names, excluding generic keywords. Names declared
/// in `@font-face` blocks are credited [`FONT_FACE_WEIGHT`] occurrences
/// instead of one.
pub fn extract(text: &str, options: &ExtractOptions) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();

    // @font-face declarations first, so the plain pass can skip them
    let mut font_face_spans: Vec<(usize, usize)> = Vec::new();

    for caps in FONT_FACE_REGEX.captures_iter(text) {
        let m = caps.get(0).unwrap();
        font_face_spans.push((m.start(), m.end()));

        let name = clean_name(&caps[1]);
        if !name.is_empty() && !is_generic(&name, options) {
            *counts.entry(name).or_insert(0) += FONT_FACE_WEIGHT;
        }
    }

    for caps in FONT_FAMILY_REGEX.captures_iter(text) {
        let start = caps.get(0).unwrap().start();
        if font_face_spans.iter().any(|&(s, e)| start >= s && start < e) {
            continue;
        }

        for entry in caps[1].split(',') {
            let name = clean_name(entry);
            if !name.is_empty() && !is_generic(&name, options) {
                *counts.entry(name).or_insert(0) += 1;
            }
        }
    }

    counts
}

fn clean_name(raw: &str) -> String {
    raw.trim().trim_matches(|c| c == '"' || c == '\'').trim().to_string()
}

fn is_generic(name: &str, options: &ExtractOptions) -> bool {
    options
        .generic_fonts
        .iter()
        .any(|generic| generic.eq_ignore_ascii_case(name))
}
