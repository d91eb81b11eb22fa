use indoc::indoc;
use libdesigndna::{extract_design_tokens, ExtractOptions, FALLBACK_FONTS};
use pretty_assertions::assert_eq;

/// A small but representative page: a variable block, a @font-face
/// declaration, inline-attribute fragments, and a truncated rule at the
/// end. The sort of text the fetch collaborator actually hands over.
const SAMPLE_STYLES: &str = indoc! {r#"
    :root {
        --brand: #3366ff;
        --ink: #222831;
    }
    @font-face {
        font-family: "Custom Sans";
        src: url(/fonts/custom.woff2) format("woff2");
    }
    body {
        font-family: Custom Sans, Arial, sans-serif;
        color: #222831;
        background: #ffffff;
        margin: 0 auto;
    }
    .hero {
        background: linear-gradient(135deg, rgba(51, 102, 255, 0.9), #222831);
        padding: 24px 32px;
        border-radius: 12px;
        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
    }
    .card {
        color: #3366FF;
        padding: 24px 32px;
        border-radius: 12px;
    }
    .badge { color: hsl(227, 100%, 60%); padding: 4px 8px; border-radius: 999px
"#};

#[test]
fn extracts_a_full_design_language_from_messy_css() {
    let result = extract_design_tokens(SAMPLE_STYLES, &ExtractOptions::default());

    // #3366ff appears as hex twice, as an rgba stop once, and
    // hsl(227, 100%, 60%) lands within the similarity threshold of it
    assert_eq!(result.colors.values[0], "#3366ff");
    assert_eq!(result.colors.stats["#3366ff"].count, 3);

    // #ffffff is noise and never becomes a token
    assert!(!result.colors.values.iter().any(|c| c == "#ffffff"));

    // The @font-face name outranks the ordinary stack mention of Arial
    assert_eq!(
        result.fonts.values[..2],
        ["Custom Sans".to_string(), "Arial".to_string()]
    );
    assert_eq!(result.fonts.stats["Custom Sans"].count, 4);

    // Gradient captured whole, nested rgba() included
    assert_eq!(
        result.gradients,
        vec!["linear-gradient(135deg, rgba(51, 102, 255, 0.9), #222831)".to_string()]
    );

    // Spacing ranked by frequency, unitless `0 auto` excluded
    assert_eq!(result.spacing.values[0], "24px 32px");
    assert_eq!(result.spacing.stats["24px 32px"].count, 2);
    assert!(!result.spacing.values.iter().any(|v| v == "0 auto"));

    // The truncated .badge rule still contributed its radius
    assert_eq!(result.radii, vec!["12px".to_string(), "999px".to_string()]);

    assert_eq!(
        result.shadows,
        vec!["0 4px 12px rgba(0, 0, 0, 0.15)".to_string()]
    );
}

#[test]
fn percentages_are_shares_of_the_pre_filter_total() {
    let result = extract_design_tokens(SAMPLE_STYLES, &ExtractOptions::default());

    let stats = &result.colors.stats["#3366ff"];

    // Every counted color occurrence is in the total: 3x #3366ff,
    // 3x #222831, the hsl-derived near-duplicate that similarity dedup
    // later drops, and the noise-filtered #ffffff and #000000 (the
    // latter from the rgba() inside the .hero box-shadow)
    assert_eq!(stats.total, 9);
    assert_eq!(stats.percentage, 33.3);
}

#[test]
fn renders_a_custom_property_block() {
    let result = extract_design_tokens(SAMPLE_STYLES, &ExtractOptions::default());

    let block = result.render_tokens();

    assert!(block.starts_with(":root {"));
    assert!(block.ends_with("}\n"));
    assert!(block.contains("--color-primary: #3366ff;"));
    assert!(block.contains("--font-primary: Custom Sans, sans-serif;"));
    assert!(block.contains("--spacing-1: 24px 32px;"));
    assert!(block.contains("--radius-1: 12px;"));
    assert!(block.contains("--shadow-1: 0 4px 12px rgba(0, 0, 0, 0.15);"));
}

#[test]
fn input_without_design_data_yields_the_empty_signal() {
    let result = extract_design_tokens(
        "main { display: grid; grid-template-columns: 1fr 1fr; }",
        &ExtractOptions::default(),
    );

    assert!(result.is_empty());
    assert_eq!(
        result.fonts.values,
        FALLBACK_FONTS
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
    );
}

#[test]
fn all_noise_colors_is_not_the_same_as_no_colors() {
    // Found some colors, but every one was filtered as noise: the
    // result has no color tokens, yet the page still counts as styled.
    let css = "body { color: #fff; background: #000; font-family: Lato; }";
    let result = extract_design_tokens(css, &ExtractOptions::default());

    assert!(result.colors.values.is_empty());
    assert!(!result.is_empty());
}

#[test]
fn custom_noise_list_replaces_the_default() {
    let options = ExtractOptions {
        noise_colors: vec!["#3366ff".to_string()],
        ..ExtractOptions::default()
    };

    let result = extract_design_tokens(SAMPLE_STYLES, &options);

    assert!(!result.colors.values.iter().any(|c| c == "#3366ff"));
    assert!(result.colors.values.iter().any(|c| c == "#ffffff"));
}
