use crate::error::{Result, ScanError};
use atlas_language as language;
use atlas_protocol::{FileRecord, ScanConfig, ScannedFile};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Files above this size are excluded entirely, never truncated-and-kept.
pub const MAX_FILE_SIZE_BYTES: u64 = 200_000;

/// Excerpt shape: files up to this many lines are kept whole.
const EXCERPT_FULL_LINES: usize = 200;
const EXCERPT_HEAD_LINES: usize = 120;
const EXCERPT_TAIL_LINES: usize = 50;

/// Directory names never descended into: build artifacts, dependency
/// caches, version-control and editor metadata.
pub(crate) const IGNORED_DIRS: &[&str] = &[
    // VCS / tooling
    ".git",
    ".vscode",
    ".idea",
    // Dependency caches / environments
    "node_modules",
    "__pycache__",
    "venv",
    ".venv",
    "env",
    "vendor",
    ".tox",
    ".mypy_cache",
    ".pytest_cache",
    "egg-info",
    // Build output
    "dist",
    "build",
    ".next",
    "target",
    "coverage",
    "bin",
    "obj",
    // Scratch
    "logs",
    "tmp",
    ".cache",
];

/// Walks a directory tree and assembles one [`ScannedFile`] per accepted
/// file: recognized, within the size ceiling, decodable (leniently) as
/// text, and within the global record cap.
pub struct Scanner {
    root: PathBuf,
    config: ScanConfig,
}

impl Scanner {
    pub fn new(root: impl AsRef<Path>, config: ScanConfig) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            config: config.clamped(),
        }
    }

    /// Scan the tree depth-first in sorted order. Per-entry traversal
    /// errors and per-file read errors are logged and skipped; only a
    /// missing or non-directory root is fatal.
    pub fn scan(&self) -> Result<Vec<ScannedFile>> {
        if !self.root.is_dir() {
            return Err(ScanError::InvalidRoot(self.root.display().to_string()));
        }

        let include_tests = self.config.include_tests;
        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| entry.depth() == 0 || !is_pruned_dir(entry, include_tests));

        let mut accepted = Vec::new();
        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("failed to read entry: {err}");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            // The cap stops new records; traversal itself continues
            // non-destructively.
            if accepted.len() >= self.config.max_files {
                continue;
            }
            if let Some(scanned) = self.read_file(entry.path()) {
                accepted.push(scanned);
            }
        }

        log::info!("accepted {} files under {}", accepted.len(), self.root.display());
        Ok(accepted)
    }

    fn read_file(&self, path: &Path) -> Option<ScannedFile> {
        let file_name = path.file_name()?.to_string_lossy().into_owned();
        let extension = dotted_extension(path);
        let info = language::classify(&file_name, &extension)?;

        let metadata = match path.metadata() {
            Ok(metadata) => metadata,
            Err(err) => {
                log::warn!("stat failed for {}: {err}", path.display());
                return None;
            }
        };
        if metadata.len() > MAX_FILE_SIZE_BYTES {
            log::debug!(
                "skipping large file {} ({} bytes > {})",
                path.display(),
                metadata.len(),
                MAX_FILE_SIZE_BYTES
            );
            return None;
        }

        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::error!("read error {}: {err}", path.display());
                return None;
            }
        };
        // Lenient decode: invalid sequences are replaced, never fatal.
        let content = String::from_utf8_lossy(&bytes);
        let lines: Vec<&str> = content.split('\n').collect();

        let relative_path = relative_slash_path(&self.root, path);
        let imports = language::extract_imports(&content, &extension);
        let complexity_score = language::complexity_score(&content, &extension);
        let last_modified = metadata
            .modified()
            .ok()
            .map(|time| DateTime::<Utc>::from(time).to_rfc3339())
            .unwrap_or_default();

        let record = FileRecord {
            path: path.to_path_buf(),
            relative_path: relative_path.clone(),
            size_bytes: metadata.len(),
            line_count: lines.len(),
            extension,
            language: info.name.to_string(),
            language_color: info.color.to_string(),
            last_modified,
            imports,
            complexity_score,
            has_tests: relative_path.to_lowercase().contains("test"),
        };

        let excerpt = render_excerpt(&record, &lines);
        Some(ScannedFile { record, excerpt })
    }
}

fn is_pruned_dir(entry: &DirEntry, include_tests: bool) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    if IGNORED_DIRS.iter().any(|ignored| *ignored == name) {
        return true;
    }
    if !include_tests {
        let lowered = name.to_lowercase();
        if lowered.contains("test") || lowered.contains("spec") {
            return true;
        }
    }
    false
}

pub(crate) fn dotted_extension(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default()
}

fn relative_slash_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Banner line plus the file text, pre-truncated to head + tail for long
/// files. This excerpt, not the full file, is what the budgeter trims.
fn render_excerpt(record: &FileRecord, lines: &[&str]) -> String {
    let body = if lines.len() <= EXCERPT_FULL_LINES {
        lines.join("\n")
    } else {
        let mut kept: Vec<&str> = lines[..EXCERPT_HEAD_LINES].to_vec();
        kept.push("...(truncated)...");
        kept.extend(&lines[lines.len() - EXCERPT_TAIL_LINES..]);
        kept.join("\n")
    };
    format!(
        "\n--- FILE: {} | {} | {} lines | complexity={:.1} ---\n{}\n",
        record.relative_path,
        record.language,
        lines.len(),
        record.complexity_score,
        body
    )
}
