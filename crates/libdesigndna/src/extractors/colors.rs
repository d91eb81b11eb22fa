use indexmap::IndexMap;
use regex::Regex;

use crate::color::{hsl_to_hex, normalize_hex, rgb_to_hex};

lazy_static! {
    static ref HEX_COLOR_REGEX: Regex =
        Regex::new(r"#(?:[0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b").unwrap();
    static ref RGB_COLOR_REGEX: Regex = Regex::new(
        r"rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*[0-9.]+\s*)?\)"
    )
    .unwrap();
    static ref HSL_COLOR_REGEX: Regex = Regex::new(
        r"hsla?\(\s*([0-9.]+)\s*,\s*([0-9.]+)%\s*,\s*([0-9.]+)%\s*(?:,\s*[0-9.]+\s*)?\)"
    )
    .unwrap();
}

/// Count every color occurrence in the text, normalized to lowercase
/// 6-digit hex. Candidates with out-of-range channels are skipped, and
/// rgba/hsla alpha channels are ignored.
pub fn extract(text: &str) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();

    for m in HEX_COLOR_REGEX.find_iter(text) {
        *counts.entry(normalize_hex(m.as_str())).or_insert(0) += 1;
    }

    for caps in RGB_COLOR_REGEX.captures_iter(text) {
        let channels: Option<Vec<u8>> = (1..=3)
            .map(|i| caps[i].parse::<u32>().ok().and_then(|c| u8::try_from(c).ok()))
            .collect();

        if let Some(channels) = channels {
            let hex = rgb_to_hex(channels[0], channels[1], channels[2]);
            *counts.entry(hex).or_insert(0) += 1;
        }
    }

    for caps in HSL_COLOR_REGEX.captures_iter(text) {
        let parsed: Option<Vec<f64>> = (1..=3).map(|i| caps[i].parse::<f64>().ok()).collect();

        let Some(parsed) = parsed else { continue };
        let (h, s, l) = (parsed[0], parsed[1], parsed[2]);

        if (0.0..=360.0).contains(&h) && (0.0..=100.0).contains(&s) && (0.0..=100.0).contains(&l) {
            *counts.entry(hsl_to_hex(h, s, l)).or_insert(0) += 1;
        }
    }

    counts
}
