use crate::scanner::{dotted_extension, IGNORED_DIRS};
use atlas_language as language;
use std::path::Path;

/// Render an indented directory listing, recognized files only.
///
/// Walks the tree independently of the scanner with its own depth limit:
/// directories at or beyond `depth` are pruned from further descent. The
/// output is plain text for embedding in the payload header, not JSON.
pub fn render_tree(root: impl AsRef<Path>, depth: usize) -> String {
    let mut lines = Vec::new();
    render_dir(root.as_ref(), 0, depth.max(1), &mut lines);
    lines.join("\n")
}

fn render_dir(dir: &Path, level: usize, depth: usize, lines: &mut Vec<String>) {
    if level >= depth {
        return;
    }

    let name = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string());
    let indent = "│   ".repeat(level);
    lines.push(format!("{indent}📂 {name}/"));

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::debug!("tree walk skipping {}: {err}", dir.display());
            return;
        }
    };

    let mut files = Vec::new();
    let mut dirs = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        match std::fs::metadata(&path) {
            Ok(metadata) if metadata.is_dir() => dirs.push(path),
            Ok(metadata) if metadata.is_file() => files.push(path),
            _ => {}
        }
    }
    files.sort();
    dirs.sort();

    let sub = "│   ".repeat(level + 1);
    for file in &files {
        let Some(file_name) = file.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if language::is_recognized(file_name, &dotted_extension(file)) {
            lines.push(format!("{sub}📄 {file_name}"));
        }
    }

    for sub_dir in &dirs {
        let Some(dir_name) = sub_dir.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if IGNORED_DIRS.iter().any(|ignored| *ignored == dir_name) {
            continue;
        }
        render_dir(sub_dir, level + 1, depth, lines);
    }
}
