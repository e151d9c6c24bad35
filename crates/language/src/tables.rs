/// Display metadata for a recognized language or manifest kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageInfo {
    pub name: &'static str,
    pub color: &'static str,
}

const fn info(name: &'static str, color: &'static str) -> LanguageInfo {
    LanguageInfo { name, color }
}

/// Classification for files whose name carries the signal instead of the
/// extension (build manifests, ignore files, compose files).
const SPECIAL_FILENAMES: &[(&str, LanguageInfo)] = &[
    ("Dockerfile", info("Dockerfile", "#384d54")),
    ("Makefile", info("Makefile", "#427819")),
    ("Procfile", info("Procfile", "#6e4a7e")),
    ("Vagrantfile", info("Vagrantfile", "#1563FF")),
    ("Gemfile", info("Gemfile", "#701516")),
    ("Rakefile", info("Rakefile", "#701516")),
    ("Justfile", info("Justfile", "#384d54")),
    (".gitignore", info("Gitignore", "#F05032")),
    (".dockerignore", info("Dockerignore", "#384d54")),
    ("requirements.txt", info("Requirements", "#3572A5")),
    ("package.json", info("Package JSON", "#f1e05a")),
    ("tsconfig.json", info("TS Config", "#3178c6")),
    ("Cargo.toml", info("Cargo Config", "#dea584")),
    ("go.mod", info("Go Module", "#00ADD8")),
    ("go.sum", info("Go Sum", "#00ADD8")),
    ("pyproject.toml", info("PyProject", "#3572A5")),
    ("setup.py", info("Setup Script", "#3572A5")),
    ("setup.cfg", info("Setup Config", "#3572A5")),
    ("docker-compose.yml", info("Docker Compose", "#384d54")),
    ("docker-compose.yaml", info("Docker Compose", "#384d54")),
    (".env.example", info("Env Example", "#ECD53F")),
];

/// Look up a language by lower-cased extension (leading dot included).
pub fn language_for_extension(extension: &str) -> Option<LanguageInfo> {
    let found = match extension {
        // Code
        ".py" => info("Python", "#3572A5"),
        ".js" => info("JavaScript", "#f1e05a"),
        ".ts" => info("TypeScript", "#3178c6"),
        ".jsx" => info("React JSX", "#61dafb"),
        ".tsx" => info("React TSX", "#3178c6"),
        ".c" => info("C", "#555555"),
        ".cpp" => info("C++", "#f34b7d"),
        ".h" => info("C/C++ Header", "#555555"),
        ".hpp" => info("C++ Header", "#f34b7d"),
        ".rs" => info("Rust", "#dea584"),
        ".go" => info("Go", "#00ADD8"),
        ".java" => info("Java", "#b07219"),
        ".kt" => info("Kotlin", "#A97BFF"),
        ".swift" => info("Swift", "#F05138"),
        ".rb" => info("Ruby", "#701516"),
        ".php" => info("PHP", "#4F5D95"),
        ".cs" => info("C#", "#178600"),
        ".cu" => info("CUDA", "#76b900"),
        ".cuh" => info("CUDA Header", "#76b900"),
        ".sh" => info("Shell", "#89e051"),
        ".bat" => info("Batch", "#C1F12E"),
        ".sql" => info("SQL", "#e38c00"),
        ".proto" => info("Protobuf", "#4285F4"),
        ".zig" => info("Zig", "#ec915c"),
        ".lua" => info("Lua", "#000080"),
        ".scala" => info("Scala", "#c22d40"),
        ".r" => info("R", "#198CE7"),
        ".dart" => info("Dart", "#00B4AB"),
        ".ex" => info("Elixir", "#6e4a7e"),
        ".exs" => info("Elixir Script", "#6e4a7e"),
        ".vue" => info("Vue", "#41b883"),
        ".svelte" => info("Svelte", "#ff3e00"),
        // Config & data
        ".json" => info("JSON", "#292929"),
        ".yaml" | ".yml" => info("YAML", "#cb171e"),
        ".toml" => info("TOML", "#9c4221"),
        ".xml" => info("XML", "#0060ac"),
        ".ini" => info("INI", "#d1dbe0"),
        ".cfg" => info("Config", "#d1dbe0"),
        ".env" => info("Env", "#ECD53F"),
        ".properties" => info("Properties", "#2A6277"),
        // Web
        ".html" | ".htm" => info("HTML", "#e34c26"),
        ".css" => info("CSS", "#563d7c"),
        ".scss" => info("SCSS", "#c6538c"),
        ".sass" => info("Sass", "#a53b70"),
        ".less" => info("Less", "#1d365d"),
        // Docs
        ".md" => info("Markdown", "#083fa1"),
        ".rst" => info("reStructuredText", "#141414"),
        ".txt" => info("Text", "#888888"),
        // Build & CI
        ".dockerfile" => info("Dockerfile", "#384d54"),
        ".makefile" => info("Makefile", "#427819"),
        ".cmake" => info("CMake", "#DA3434"),
        ".gradle" => info("Gradle", "#02303A"),
        ".tf" => info("Terraform", "#5C4EE5"),
        ".hcl" => info("HCL", "#5C4EE5"),
        // Data
        ".csv" => info("CSV", "#237346"),
        ".graphql" => info("GraphQL", "#e10098"),
        ".prisma" => info("Prisma", "#2D3748"),
        _ => return None,
    };
    Some(found)
}

/// Look up a file by its exact name, falling back to a generic config
/// classification for case-variants of known names.
pub fn special_filename(file_name: &str) -> Option<LanguageInfo> {
    if let Some((_, found)) = SPECIAL_FILENAMES
        .iter()
        .find(|(name, _)| *name == file_name)
    {
        return Some(*found);
    }
    if SPECIAL_FILENAMES
        .iter()
        .any(|(name, _)| name.eq_ignore_ascii_case(file_name))
    {
        return Some(info("Config", "#888"));
    }
    None
}

/// Classify a file. Extension match takes precedence; files with an
/// unrecognized extension fall back to the special-filename table.
pub fn classify(file_name: &str, extension: &str) -> Option<LanguageInfo> {
    language_for_extension(extension).or_else(|| special_filename(file_name))
}

/// A file is recognized iff either table matches.
pub fn is_recognized(file_name: &str, extension: &str) -> bool {
    classify(file_name, extension).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extension_match_takes_precedence() {
        // docker-compose.yml has a recognized extension, so the extension
        // table wins over the special-filename table.
        let found = classify("docker-compose.yml", ".yml").unwrap();
        assert_eq!(found.name, "YAML");

        let found = classify("main.py", ".py").unwrap();
        assert_eq!(found.name, "Python");
        assert_eq!(found.color, "#3572A5");
    }

    #[test]
    fn special_filenames_without_extension_are_recognized() {
        let found = classify("Dockerfile", "").unwrap();
        assert_eq!(found.name, "Dockerfile");

        let found = classify("go.mod", ".mod").unwrap();
        assert_eq!(found.name, "Go Module");

        assert!(is_recognized(".gitignore", ""));
    }

    #[test]
    fn case_variant_special_names_classify_as_generic_config() {
        let found = special_filename("makefile").unwrap();
        assert_eq!(found.name, "Config");
        assert_eq!(found.color, "#888");
    }

    #[test]
    fn unknown_files_are_unrecognized() {
        assert!(classify("binary.bin", ".bin").is_none());
        assert!(classify("LICENSE", "").is_none());
        assert!(!is_recognized("photo.png", ".png"));
    }
}
