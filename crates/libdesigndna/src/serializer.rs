//! Renders an extraction result as a `:root` custom-property block.

use crate::tokens::ExtractionResult;

/// One custom property per accepted token, in rank order. The first
/// color positions get semantic names, later ones are numbered; fonts
/// pick up a `sans-serif` fallback. Empty categories are omitted
/// entirely. Gradients are not serialized; they are exposed on the
/// result only.
pub fn render(result: &ExtractionResult) -> String {
    let mut css = String::new();

    css.push_str(":root {\n");

    if !result.colors.values.is_empty() {
        for (i, color) in result.colors.values.iter().enumerate() {
            css.push_str(&format!("  --color-{}: {};\n", color_name(i), color));
        }
        css.push('\n');
    }

    if !result.fonts.values.is_empty() {
        for (i, font) in result.fonts.values.iter().enumerate() {
            css.push_str(&format!(
                "  --font-{}: {}, sans-serif;\n",
                font_name(i),
                font
            ));
        }
        css.push('\n');
    }

    if !result.spacing.values.is_empty() {
        for (i, value) in result.spacing.values.iter().enumerate() {
            css.push_str(&format!("  --spacing-{}: {};\n", i + 1, value));
        }
        css.push('\n');
    }

    if !result.radii.is_empty() {
        for (i, value) in result.radii.iter().enumerate() {
            css.push_str(&format!("  --radius-{}: {};\n", i + 1, value));
        }
        css.push('\n');
    }

    if !result.shadows.is_empty() {
        for (i, value) in result.shadows.iter().enumerate() {
            css.push_str(&format!("  --shadow-{}: {};\n", i + 1, value));
        }
        css.push('\n');
    }

    // Drop the trailing blank line from the last emitted section
    if css.ends_with("\n\n") {
        css.pop();
    }

    css.push_str("}\n");

    css
}

fn color_name(position: usize) -> String {
    match position {
        0 => "primary".to_string(),
        1 => "secondary".to_string(),
        2 => "accent".to_string(),
        n => format!("{}", n + 1),
    }
}

fn font_name(position: usize) -> String {
    match position {
        0 => "primary".to_string(),
        1 => "secondary".to_string(),
        n => format!("{}", n + 1),
    }
}
