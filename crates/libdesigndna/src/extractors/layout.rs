use indexmap::IndexMap;
use regex::Regex;

const MAX_RADII: usize = 5;
const MAX_SHADOWS: usize = 5;

const MIN_SHADOW_LEN: usize = 10;
const MAX_SHADOW_LEN: usize = 150;

lazy_static! {
    static ref SPACING_REGEX: Regex =
        Regex::new(r"(?:padding|margin)\s*:\s*([^;{}]+)").unwrap();
    static ref RADIUS_REGEX: Regex = Regex::new(r"border-radius\s*:\s*([^;{}]+)").unwrap();
    static ref SHADOW_REGEX: Regex = Regex::new(r"box-shadow\s*:\s*([^;{}]+)").unwrap();
}

/// Count `padding` and `margin` values that carry at least one px, rem
/// or em unit. The value string is kept whole, not split into sides.
pub fn extract_spacing(text: &str) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();

    for caps in SPACING_REGEX.captures_iter(text) {
        let value = caps[1].trim().to_string();

        if ["px", "rem", "em"].iter().any(|unit| value.contains(unit)) {
            *counts.entry(value).or_insert(0) += 1;
        }
    }

    counts
}

/// Distinct `border-radius` values with a px, rem, em or percent unit,
/// in discovery order, at most [`MAX_RADII`].
pub fn extract_radii(text: &str) -> Vec<String> {
    let mut radii: Vec<String> = Vec::new();

    for caps in RADIUS_REGEX.captures_iter(text) {
        if radii.len() >= MAX_RADII {
            break;
        }

        let value = caps[1].trim().to_string();

        if ["px", "rem", "em", "%"].iter().any(|unit| value.contains(unit))
            && !radii.iter().any(|r| r == &value)
        {
            radii.push(value);
        }
    }

    radii
}

/// Distinct `box-shadow` values in discovery order, at most
/// [`MAX_SHADOWS`]. Rejects the literal `none` and anything outside the
/// plausible length band.
pub fn extract_shadows(text: &str) -> Vec<String> {
    let mut shadows: Vec<String> = Vec::new();

    for caps in SHADOW_REGEX.captures_iter(text) {
        if shadows.len() >= MAX_SHADOWS {
            break;
        }

        let value = caps[1].trim().to_string();

        if value.eq_ignore_ascii_case("none") {
            continue;
        }

        if (MIN_SHADOW_LEN..=MAX_SHADOW_LEN).contains(&value.len())
            && !shadows.iter().any(|s| s == &value)
        {
            shadows.push(value);
        }
    }

    shadows
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_spacing_values_whole() {
        let css = "a { padding: 10px 20px; } b { padding: 10px 20px; } c { margin: 5px; }";

        let counts = extract_spacing(css);

        assert_eq!(counts["10px 20px"], 2);
        assert_eq!(counts["5px"], 1);
    }

    #[test]
    fn ignores_unitless_spacing() {
        let counts = extract_spacing("a { margin: 0 auto; padding: inherit; }");

        assert!(counts.is_empty());
    }

    #[test]
    fn accepts_rem_and_em_spacing() {
        let counts = extract_spacing("a { padding: 1.5rem; margin: 0.5em 1em; }");

        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn collects_distinct_radii_up_to_the_cap() {
        let css = "a{border-radius: 4px;} b{border-radius: 50%;} c{border-radius: 4px;} \
                   d{border-radius: 8px;} e{border-radius: 1rem;} f{border-radius: 2em;} \
                   g{border-radius: 12px;}";

        let radii = extract_radii(css);

        assert_eq!(radii.len(), MAX_RADII);
        assert_eq!(radii[0], "4px");
        assert_eq!(radii[1], "50%");
    }

    #[test]
    fn ignores_unitless_radii() {
        assert!(extract_radii("a { border-radius: inherit; }").is_empty());
    }

    #[test]
    fn rejects_none_and_out_of_band_shadows() {
        let css = "a { box-shadow: none; } b { box-shadow: 0 0 red; } \
                   c { box-shadow: 0 2px 4px rgba(0,0,0,0.2); }";

        let shadows = extract_shadows(css);

        assert_eq!(shadows, vec!["0 2px 4px rgba(0,0,0,0.2)".to_string()]);
    }

    #[test]
    fn stops_after_the_shadow_cap() {
        let css: String = (0..8)
            .map(|i| format!("s{} {{ box-shadow: 0 {}px 4px rgba(0,0,0,0.2); }}\n", i, i))
            .collect();

        assert_eq!(extract_shadows(&css).len(), MAX_SHADOWS);
    }

    #[test]
    fn deduplicates_shadows_by_exact_text() {
        let css = "a { box-shadow: 0 1px 2px #00000033; } b { box-shadow: 0 1px 2px #00000033; }";

        assert_eq!(extract_shadows(css).len(), 1);
    }
}
