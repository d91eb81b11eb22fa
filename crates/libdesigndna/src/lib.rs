#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate serde;

pub mod color;
mod extractors;
mod options;
mod ranking;
mod serializer;
mod tokens;

pub use options::ExtractOptions;
pub use ranking::FALLBACK_FONTS;
pub use tokens::{ExtractionResult, RankedTokens, TokenStats};

/// Run every extractor over a blob of aggregated style text and produce
/// ranked, deduplicated token collections.
///
/// The input is unparsed CSS-like text: `<style>` block contents, inline
/// `style="..."` attribute values, `:root` variable blocks, fetched
/// stylesheet bodies, all concatenated by the caller. No well-formedness
/// is assumed; values that fail validation are skipped, and an input with
/// no matches at all produces empty collections rather than an error.
///
/// Matching is regex-based on purpose. There is no CSS tokenizer or AST
/// behind this, so the acceptance rules are exactly the patterns in the
/// `extractors` module, including the manual parenthesis balancing for
/// gradient expressions.
pub fn extract_design_tokens(text: &str, options: &ExtractOptions) -> ExtractionResult {
    let colors = ranking::rank_colors(extractors::colors::extract(text), options);
    let fonts = ranking::rank_fonts(extractors::fonts::extract(text, options));
    let spacing = ranking::rank_spacing(extractors::layout::extract_spacing(text));

    ExtractionResult {
        colors,
        fonts,
        spacing,
        gradients: extractors::gradients::extract(text),
        radii: extractors::layout::extract_radii(text),
        shadows: extractors::layout::extract_shadows(text),
    }
}
