//! Frequency ranking and perceptual dedup.
//!
//! Percentages are always computed against the pre-filter total for the
//! category, so the numbers describe the page as found, not the filtered
//! result set.

use indexmap::IndexMap;
use itertools::Itertools;

use crate::color::{is_similar, normalize_hex};
use crate::tokens::{RankedTokens, TokenStats};
use crate::ExtractOptions;

const MAX_COLORS: usize = 10;
const MAX_FONTS: usize = 8;
const MAX_SPACING: usize = 10;

/// Candidates considered before similarity dedup. Because dedup happens
/// after this truncation, a top 15 full of near-duplicates can leave the
/// final color list under-filled below [`MAX_COLORS`]; later candidates
/// are not pulled in to back-fill. Known quirk, kept as-is.
const PRE_DEDUP_CANDIDATES: usize = 15;

/// Default fonts reported when a page yields no usable font names at
/// all. They carry no statistics.
pub const FALLBACK_FONTS: &[&str] = &["Inter", "Roboto", "Arial"];

/// Rank color candidates: drop the configured noise set, sort by count,
/// then greedily keep candidates that are not similar to an
/// already-kept color.
pub fn rank_colors(counts: IndexMap<String, usize>, options: &ExtractOptions) -> RankedTokens {
    let total: usize = counts.values().sum();

    let noise: Vec<String> = options
        .noise_colors
        .iter()
        .map(|c| {
            if c.starts_with('#') {
                normalize_hex(c)
            } else {
                c.to_lowercase()
            }
        })
        .collect();

    let candidates = counts
        .into_iter()
        .filter(|(value, _)| !noise.contains(&value.to_lowercase()))
        .sorted_by(|a, b| b.1.cmp(&a.1))
        .take(PRE_DEDUP_CANDIDATES);

    let mut result = RankedTokens {
        total,
        ..RankedTokens::default()
    };

    for (value, count) in candidates {
        if result.values.len() >= MAX_COLORS {
            break;
        }

        if result.values.iter().any(|kept| is_similar(kept, &value)) {
            continue;
        }

        result.stats.insert(value.clone(), stats(count, total));
        result.values.push(value);
    }

    result
}

/// Rank font candidates. Exact name identity is the only dedup key, and
/// an empty category falls back to [`FALLBACK_FONTS`] with no stats.
pub fn rank_fonts(counts: IndexMap<String, usize>) -> RankedTokens {
    let total: usize = counts.values().sum();

    let mut result = RankedTokens {
        total,
        ..RankedTokens::default()
    };

    for (value, count) in counts
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1))
        .take(MAX_FONTS)
    {
        result.stats.insert(value.clone(), stats(count, total));
        result.values.push(value);
    }

    if result.values.is_empty() {
        result.values = FALLBACK_FONTS.iter().map(|f| f.to_string()).collect();
    }

    result
}

/// Rank spacing values by frequency. No similarity filter applies;
/// identical value text is the dedup key.
pub fn rank_spacing(counts: IndexMap<String, usize>) -> RankedTokens {
    let total: usize = counts.values().sum();

    let mut result = RankedTokens {
        total,
        ..RankedTokens::default()
    };

    for (value, count) in counts
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1))
        .take(MAX_SPACING)
    {
        result.stats.insert(value.clone(), stats(count, total));
        result.values.push(value);
    }

    result
}

fn stats(count: usize, total: usize) -> TokenStats {
    let percentage = if total == 0 {
        0.0
    } else {
        (count as f64 * 100.0 / total as f64 * 10.0).round() / 10.0
    };

    TokenStats {
        count,
        percentage,
        total,
    }
}
