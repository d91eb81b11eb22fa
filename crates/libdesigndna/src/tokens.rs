use indexmap::IndexMap;

/// Usage statistics for one token within one extraction run.
///
/// `total` is the pre-filter occurrence count for the whole category, so
/// percentages across a result set need not sum to 100 once noise and
/// near-duplicates have been dropped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TokenStats {
    pub count: usize,
    /// Share of `total`, rounded to one decimal place.
    pub percentage: f64,
    pub total: usize,
}

/// A frequency-ranked token category: values in rank order plus a lookup
/// from value to its statistics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RankedTokens {
    pub values: Vec<String>,
    pub stats: IndexMap<String, TokenStats>,
    /// Pre-filter occurrence total for the whole category. Non-zero
    /// whenever anything was found at all, even if every candidate was
    /// later dropped as noise or as a near-duplicate.
    pub total: usize,
}

impl RankedTokens {
    pub fn stats_for(&self, value: &str) -> Option<&TokenStats> {
        self.stats.get(value)
    }
}

/// The complete output of one extraction run. A plain immutable value:
/// callers keep their own copy and nothing is shared between runs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractionResult {
    pub colors: RankedTokens,
    pub fonts: RankedTokens,
    pub spacing: RankedTokens,
    /// Distinct gradient expressions in discovery order.
    pub gradients: Vec<String>,
    /// Distinct border-radius values in discovery order.
    pub radii: Vec<String>,
    /// Distinct box-shadow values in discovery order.
    pub shadows: Vec<String>,
}

impl ExtractionResult {
    /// The "no usable design data" signal: not a single color and not a
    /// single font occurrence was found.
    ///
    /// This checks the pre-filter totals, not the token lists: a page
    /// whose colors were all filtered as noise still counts as styled,
    /// and fallback fonts (which carry no occurrences) do not.
    pub fn is_empty(&self) -> bool {
        self.colors.total == 0 && self.fonts.total == 0
    }

    /// Render the result as a custom-property text block, usable
    /// verbatim as a stylesheet fragment.
    pub fn render_tokens(&self) -> String {
        crate::serializer::render(self)
    }
}
