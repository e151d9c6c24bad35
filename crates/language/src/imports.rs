use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).expect("valid import pattern"))
        .collect()
}

static PYTHON_PATTERNS: Lazy<Vec<Regex>> =
    Lazy::new(|| compile(&[r"(?m)^import\s+([\w.]+)", r"(?m)^from\s+([\w.]+)\s+import"]));

static JS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r#"import\s+.*?from\s+['"]([\w@/.~-]+)['"]"#,
        r#"require\s*\(\s*['"]([\w@/.~-]+)['"]\s*\)"#,
    ])
});

static GO_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| compile(&[r#"["']([\w./]+)["']"#]));

static RUST_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| compile(&[r"(?m)^use\s+([\w:]+)"]));

static JAVA_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| compile(&[r"(?m)^import\s+([\w.]+)"]));

static C_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| compile(&[r#"#include\s*[<"]([\w/.]+)[>"]"#]));

fn patterns_for(extension: &str) -> Option<&'static [Regex]> {
    let patterns: &'static Vec<Regex> = match extension {
        ".py" => &PYTHON_PATTERNS,
        ".js" | ".ts" | ".jsx" | ".tsx" => &JS_PATTERNS,
        ".go" => &GO_PATTERNS,
        ".rs" => &RUST_PATTERNS,
        ".java" => &JAVA_PATTERNS,
        ".c" | ".cpp" | ".h" | ".cu" => &C_PATTERNS,
        _ => return None,
    };
    Some(patterns.as_slice())
}

/// Pull raw import identifiers out of file text using the pattern set for
/// the given extension. Deduplicated and sorted for deterministic output.
/// Unknown extensions yield an empty set.
pub fn extract_imports(content: &str, extension: &str) -> Vec<String> {
    let Some(patterns) = patterns_for(extension) else {
        return Vec::new();
    };

    let mut imports = BTreeSet::new();
    for pattern in patterns {
        for captures in pattern.captures_iter(content) {
            if let Some(found) = captures.get(1) {
                imports.insert(found.as_str().to_string());
            }
        }
    }
    imports.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn python_import_and_from_forms() {
        let source = "import os\nimport main\nfrom utils.helpers import thing\nx = 1\n";
        assert_eq!(
            extract_imports(source, ".py"),
            vec!["main", "os", "utils.helpers"]
        );
    }

    #[test]
    fn python_imports_are_anchored_to_line_starts() {
        let source = "# import commented\n    value = \"from nothing import here\"\nimport real\n";
        assert_eq!(extract_imports(source, ".py"), vec!["real"]);
    }

    #[test]
    fn javascript_esm_and_require_forms() {
        let source = concat!(
            "import React from 'react';\n",
            "import { thing } from \"./lib/thing\";\n",
            "const fs = require('fs');\n",
        );
        let imports = extract_imports(source, ".js");
        assert_eq!(imports, vec!["./lib/thing", "fs", "react"]);
    }

    #[test]
    fn rust_use_paths() {
        let source = "use std::collections::HashMap;\nuse crate::scanner;\n";
        assert_eq!(
            extract_imports(source, ".rs"),
            vec!["crate::scanner", "std::collections::HashMap"]
        );
    }

    #[test]
    fn c_includes_both_quote_styles() {
        let source = "#include <stdio.h>\n#include \"util/helpers.h\"\n";
        assert_eq!(
            extract_imports(source, ".c"),
            vec!["stdio.h", "util/helpers.h"]
        );
    }

    #[test]
    fn go_quoted_import_paths() {
        let source = "import (\n\t\"fmt\"\n\t\"github.com/pkg/errors\"\n)\n";
        assert_eq!(
            extract_imports(source, ".go"),
            vec!["fmt", "github.com/pkg/errors"]
        );
    }

    #[test]
    fn duplicates_collapse_and_unknown_extensions_yield_nothing() {
        let source = "import os\nimport os\n";
        assert_eq!(extract_imports(source, ".py"), vec!["os"]);
        assert_eq!(extract_imports(source, ".md"), Vec::<String>::new());
        assert_eq!(extract_imports("", ".py"), Vec::<String>::new());
    }

    #[test]
    fn malformed_source_never_fails() {
        // Truncated statements and stray brackets just match less.
        let source = "x import\nfrom = 3\nrequire('unclosed\nimport { a } from 42\n";
        assert_eq!(extract_imports(source, ".py"), Vec::<String>::new());
        assert_eq!(extract_imports(source, ".js"), Vec::<String>::new());
    }
}
