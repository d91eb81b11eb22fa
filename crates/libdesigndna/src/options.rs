/// Tuning knobs for one extraction run.
///
/// The defaults reproduce the documented behavior; both lists are
/// configuration, not algorithm, and can be overridden wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractOptions {
    /// Colors dropped before ranking. Matched case-insensitively against
    /// the normalized token, so 3-digit forms cover their 6-digit
    /// expansions.
    pub noise_colors: Vec<String>,
    /// Generic font keywords discarded from `font-family` stacks,
    /// matched case-insensitively.
    pub generic_fonts: Vec<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            noise_colors: [
                "#fff",
                "#ffffff",
                "#fefefe",
                "#000",
                "#000000",
                "#010101",
                "transparent",
            ]
            .map(str::to_string)
            .to_vec(),
            generic_fonts: [
                "serif",
                "sans-serif",
                "monospace",
                "cursive",
                "fantasy",
                "system-ui",
            ]
            .map(str::to_string)
            .to_vec(),
        }
    }
}
