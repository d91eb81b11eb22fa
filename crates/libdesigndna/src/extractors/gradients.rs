use regex::Regex;

const MAX_GRADIENTS: usize = 8;

// Trivial matches below this are noise, and anything above it is almost
// certainly a truncated or malformed fragment.
const MIN_GRADIENT_LEN: usize = 20;
const MAX_GRADIENT_LEN: usize = 300;

lazy_static! {
    static ref GRADIENT_START_REGEX: Regex =
        Regex::new(r"(?:repeating-linear|repeating-radial|linear|radial|conic)-gradient\(")
            .unwrap();
}

/// Collect distinct gradient expressions in discovery order.
///
/// The regex only finds the function prefix. Gradient arguments nest
/// function calls of their own (`rgba(...)` color stops and the like),
/// so a flat balanced-delimiter pattern cannot capture the full
/// expression; from the opening parenthesis we scan forward by hand,
/// tracking depth until it returns to zero. Expressions whose closing
/// parenthesis never arrives are dropped.
pub fn extract(text: &str) -> Vec<String> {
    let mut gradients: Vec<String> = Vec::new();

    for m in GRADIENT_START_REGEX.find_iter(text) {
        if gradients.len() >= MAX_GRADIENTS {
            break;
        }

        let Some(expression) = balanced_expression(text, m.start(), m.end()) else {
            continue;
        };

        if (MIN_GRADIENT_LEN..=MAX_GRADIENT_LEN).contains(&expression.len())
            && !gradients.iter().any(|g| g == &expression)
        {
            gradients.push(expression);
        }
    }

    gradients
}

/// Slice from `start` to the parenthesis that closes the one just before
/// `after_open`, scanning at depth 1.
fn balanced_expression(text: &str, start: usize, after_open: usize) -> Option<String> {
    let mut depth = 1usize;

    for (offset, c) in text[after_open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(text[start..after_open + offset + 1].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn captures_nested_function_calls_whole() {
        let css = "background: linear-gradient(to right, rgba(0,0,0,0.5), #fff);";

        let gradients = extract(css);

        assert_eq!(
            gradients,
            vec!["linear-gradient(to right, rgba(0,0,0,0.5), #fff)".to_string()]
        );
    }

    #[test]
    fn captures_repeating_variants_without_a_shadow_match() {
        let css = "background: repeating-linear-gradient(45deg, #111 0 10px, #222 10px 20px);";

        let gradients = extract(css);

        assert_eq!(gradients.len(), 1);
        assert!(gradients[0].starts_with("repeating-linear-gradient("));
    }

    #[test]
    fn deduplicates_exact_expressions() {
        let css = "a { background: linear-gradient(#ff0000, #0000ff); } \
                   b { background: linear-gradient(#ff0000, #0000ff); }";

        assert_eq!(extract(css).len(), 1);
    }

    #[test]
    fn drops_unterminated_expressions() {
        let gradients = extract("background: linear-gradient(to right, #fff, #000");

        assert!(gradients.is_empty());
    }

    #[test]
    fn drops_trivial_and_oversized_expressions() {
        let long_stop = "x".repeat(300);
        let css = format!(
            "a {{ background: radial-gradient(#fff, {}); }} b {{ background: conic-gradient(a) }}",
            long_stop
        );

        assert!(extract(&css).is_empty());
    }

    #[test]
    fn stops_after_the_gradient_cap() {
        let css: String = (0..12)
            .map(|i| format!("s{} {{ background: linear-gradient(#00000{}, #ffffff); }}\n", i, i))
            .collect();

        assert_eq!(extract(&css).len(), MAX_GRADIENTS);
    }
}
