/// Branching keywords counted per line. Trailing spaces and colons keep the
/// matches keyword-shaped without a tokenizer.
fn branch_keywords(extension: &str) -> &'static [&'static str] {
    match extension {
        ".py" => &["if ", "elif ", "else:", "for ", "while ", "except ", "with "],
        ".js" | ".ts" | ".jsx" | ".tsx" => {
            &["if ", "else ", "for ", "while ", "switch ", "case ", "catch "]
        }
        ".go" => &["if ", "else ", "for ", "switch ", "case ", "select "],
        ".rs" => &["if ", "else ", "for ", "while ", "match ", "loop "],
        ".java" => &["if ", "else ", "for ", "while ", "switch ", "case ", "catch "],
        ".c" => &["if ", "else ", "for ", "while ", "switch ", "case "],
        ".cpp" => &["if ", "else ", "for ", "while ", "switch ", "case ", "catch "],
        _ => &["if ", "for ", "while "],
    }
}

/// Heuristic complexity score in [0, 100], one decimal place.
///
/// Weighted blend of branching-keyword density (0.4), maximum indentation
/// depth in 4-space units capped at 10 levels (0.35), and a log-scaled
/// line-count factor saturating at 10,000 lines (0.25). The formula is a
/// deliberately simple, explainable proxy and must stay identical across
/// implementations for score comparability — it is not a cyclomatic
/// complexity analyzer.
pub fn complexity_score(content: &str, extension: &str) -> f64 {
    let lines: Vec<&str> = content.split('\n').collect();
    let total = lines.len();
    if total == 0 {
        return 0.0;
    }

    let keywords = branch_keywords(extension);
    let branch_count = lines
        .iter()
        .filter(|line| keywords.iter().any(|keyword| line.contains(keyword)))
        .count();

    let max_indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
        .max()
        .unwrap_or(0);

    let density = (branch_count as f64 / total.max(1) as f64).min(1.0);
    let nesting = (max_indent as f64 / 4.0).min(10.0) / 10.0;
    let length = ((total.max(1) as f64).log10() / 4.0).min(1.0);

    let score = ((density * 0.4 + nesting * 0.35 + length * 0.25) * 100.0).min(100.0);
    (score * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_content_scores_zero() {
        assert_eq!(complexity_score("", ".py"), 0.0);
    }

    #[test]
    fn flat_single_line_scores_zero() {
        // One line, no branches, no indentation, log10(1) == 0.
        assert_eq!(complexity_score("hello = 1", ".py"), 0.0);
    }

    #[test]
    fn pure_branch_line_scores_density_weight_only() {
        // density 1.0, nesting 0, length 0 → 0.4 * 100.
        assert_eq!(complexity_score("for i in range(3):", ".py"), 40.0);
    }

    #[test]
    fn known_value_for_small_branchy_python() {
        let source = "if x:\n    y = 1\nelse:\n    pass";
        // 4 lines, 2 branch lines, max indent 4, log10(4)/4 length factor.
        let density: f64 = 0.5;
        let nesting: f64 = 0.1;
        let length: f64 = 4f64.log10() / 4.0;
        let expected =
            (((density * 0.4 + nesting * 0.35 + length * 0.25) * 100.0) * 10.0).round() / 10.0;
        assert_eq!(complexity_score(source, ".py"), expected);
        assert_eq!(complexity_score(source, ".py"), 27.3);
    }

    #[test]
    fn score_is_always_bounded() {
        let deep = format!("{}if x {{}}", " ".repeat(400));
        let source = vec![deep; 20_000].join("\n");
        let score = complexity_score(&source, ".rs");
        assert!(score <= 100.0);
        assert!(score >= 0.0);
    }

    #[test]
    fn generic_fallback_keywords_apply_to_unlisted_languages() {
        // Ruby is scored with the {if, for, while} fallback.
        assert_eq!(complexity_score("if ready", ".rb"), 40.0);
    }
}
