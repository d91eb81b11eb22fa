//! sRGB hex color utilities.
//!
//! Everything in here works on plain 8-bit sRGB channels. That is a
//! deliberate ceiling: extracted tokens are normalized to `#rrggbb` and
//! nothing downstream needs wide-gamut or floating point color.

/// An 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Below this channel-difference sum two colors count as duplicates.
const SIMILARITY_THRESHOLD: u32 = 30;

/// Expand a 3-digit hex color to 6 digits and lowercase it.
///
/// `#abc` becomes `#aabbcc`; already-6-digit input only gets lowercased.
/// Anything else is passed through lowercased, and left for
/// [`hex_to_rgb`] to reject.
pub fn normalize_hex(raw: &str) -> String {
    let hex = raw.trim_start_matches('#').to_lowercase();

    if hex.len() == 3 {
        let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
        format!("#{}", expanded)
    } else {
        format!("#{}", hex)
    }
}

pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Standard HSL to RGB conversion, hue in degrees 0-360, saturation and
/// lightness in percent 0-100. Channels are rounded to the nearest
/// integer before encoding. The caller validates ranges.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let s = s / 100.0;
    let l = l / 100.0;

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let second = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let offset = l - chroma / 2.0;

    // One assignment of {chroma, second, 0} per 60 degree hue sector
    let (r, g, b) = match h {
        h if h < 60.0 => (chroma, second, 0.0),
        h if h < 120.0 => (second, chroma, 0.0),
        h if h < 180.0 => (0.0, chroma, second),
        h if h < 240.0 => (0.0, second, chroma),
        h if h < 300.0 => (second, 0.0, chroma),
        _ => (chroma, 0.0, second),
    };

    rgb_to_hex(
        ((r + offset) * 255.0).round() as u8,
        ((g + offset) * 255.0).round() as u8,
        ((b + offset) * 255.0).round() as u8,
    )
}

/// Parse a 6-digit hex color, with or without the leading `#`.
///
/// Returns `None` for anything that is not exactly 6 hex digits; 3-digit
/// shorthand must go through [`normalize_hex`] first.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);

    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    Some(Rgb {
        r: u8::from_str_radix(&hex[0..2], 16).ok()?,
        g: u8::from_str_radix(&hex[2..4], 16).ok()?,
        b: u8::from_str_radix(&hex[4..6], 16).ok()?,
    })
}

/// WCAG relative luminance of an sRGB color, in [0, 1].
pub fn relative_luminance(rgb: Rgb) -> f64 {
    fn channel(value: u8) -> f64 {
        let c = value as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel(rgb.r) + 0.7152 * channel(rgb.g) + 0.0722 * channel(rgb.b)
}

/// WCAG contrast ratio between two hex colors, or `None` when either
/// fails to parse. White on black yields the maximum, 21.
pub fn contrast_ratio(a: &str, b: &str) -> Option<f64> {
    let lum_a = relative_luminance(hex_to_rgb(a)?);
    let lum_b = relative_luminance(hex_to_rgb(b)?);

    let lighter = lum_a.max(lum_b);
    let darker = lum_a.min(lum_b);

    Some((lighter + 0.05) / (darker + 0.05))
}

/// Whether a color reads as light (luminance above 0.5). Unparseable
/// input defaults to light.
pub fn is_light_color(hex: &str) -> bool {
    match hex_to_rgb(hex) {
        Some(rgb) => relative_luminance(rgb) > 0.5,
        None => true,
    }
}

/// Whether two colors are close enough to count as duplicates.
///
/// This sums the absolute per-channel differences and compares against a
/// fixed threshold. It is a cheap approximation, not a perceptual
/// distance like CIE delta-E, and it is kept that way on purpose: the
/// dedup pass only needs to collapse near-identical shades, and the
/// acceptance behavior of the whole pipeline is defined in terms of this
/// exact heuristic.
pub fn is_similar(a: &str, b: &str) -> bool {
    let (Some(a), Some(b)) = (hex_to_rgb(a), hex_to_rgb(b)) else {
        return false;
    };

    let diff = a.r.abs_diff(b.r) as u32 + a.g.abs_diff(b.g) as u32 + a.b.abs_diff(b.b) as u32;

    diff < SIMILARITY_THRESHOLD
}
