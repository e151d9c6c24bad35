//! Shared data model for the repository scanning pipeline.
//!
//! Every stage of the pipeline (scan → resolve → aggregate → budget)
//! communicates through the types in this crate, so downstream consumers
//! can depend on the output contract without pulling in the engine.

use anyhow::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// One scanned, recognized file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FileRecord {
    /// Absolute path on disk.
    pub path: PathBuf,

    /// Path relative to the scan root, `/`-separated on all platforms.
    /// Stable identity and sort key within one scan.
    pub relative_path: String,

    pub size_bytes: u64,
    pub line_count: usize,

    /// Lower-cased extension including the leading dot (empty for files
    /// like `Makefile`).
    pub extension: String,

    pub language: String,
    pub language_color: String,

    /// Last-modified timestamp, RFC 3339.
    pub last_modified: String,

    /// Deduplicated raw import strings, sorted for determinism.
    #[serde(default)]
    pub imports: Vec<String>,

    /// Heuristic complexity in [0, 100], one decimal place.
    #[serde(default)]
    pub complexity_score: f64,

    /// True when the relative path contains "test" (case-insensitive).
    #[serde(default)]
    pub has_tests: bool,
}

/// Kind of relationship carried by a [`DependencyLink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Imports,
}

/// Directed edge between two scanned files, produced by import resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DependencyLink {
    /// Relative path of the importing file.
    pub source: String,

    /// Relative path of the imported file. Never equal to `source`.
    pub target: String,

    #[serde(rename = "type")]
    pub kind: LinkKind,

    /// The raw import token that produced this edge.
    pub raw: String,
}

/// One of the top files by complexity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Hotspot {
    pub file: String,
    pub complexity: f64,
    pub lines: usize,
    pub language: String,
}

/// One of the top files by dependency-link degree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConnectedFile {
    pub file: String,
    pub connections: usize,
}

/// Aggregate view over one scan. Recomputed fresh per scan, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Summary {
    pub name: String,
    pub total_files: usize,
    pub total_lines: usize,
    pub total_bytes: u64,

    /// Language name → total line count.
    pub languages: BTreeMap<String, usize>,

    pub dependency_links: Vec<DependencyLink>,

    /// Top files by complexity, descending, length ≤ 5.
    pub hotspots: Vec<Hotspot>,

    /// Top files by link degree, descending, length ≤ 5.
    pub most_connected: Vec<ConnectedFile>,

    /// Mean complexity across all records, one decimal; 0.0 when empty.
    pub avg_complexity: f64,
}

/// A file record paired with the code excerpt the budgeter ranks and trims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScannedFile {
    pub record: FileRecord,

    /// Banner line plus (possibly pre-truncated) file text.
    pub excerpt: String,
}

/// Full output contract of one scan invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScanOutput {
    /// The bounded context payload, ≤ the configured character ceiling
    /// (plus the final elision marker).
    pub payload: String,

    pub files: Vec<FileRecord>,
    pub summary: Summary,
}

/// Caller-supplied scan configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScanConfig {
    /// Global cap on accepted file records.
    pub max_files: usize,

    /// When false, directories whose name contains "test" or "spec" are
    /// pruned before descent.
    pub include_tests: bool,

    /// Directory depth limit for tree rendering.
    pub depth: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_files: 120,
            include_tests: false,
            depth: 6,
        }
    }
}

impl ScanConfig {
    /// Clamp fields into their accepted ranges.
    pub fn clamped(self) -> Self {
        Self {
            max_files: self.max_files.clamp(1, 500),
            include_tests: self.include_tests,
            depth: self.depth.clamp(1, 15),
        }
    }
}

/// Policy constants for payload budgeting. Tests construct small policies
/// so tier boundaries can be exercised without thousands of files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BudgetPolicy {
    /// Hard character ceiling for the assembled payload.
    pub max_payload_chars: usize,

    /// Number of top-ranked files in the largest budget tier.
    pub top_count: usize,

    /// Number of files in the middle tier, after the top tier.
    pub mid_count: usize,

    /// Per-file character cap for the top tier.
    pub top_file_chars: usize,

    /// Per-file character cap for the middle tier.
    pub mid_file_chars: usize,

    /// Per-file character cap for the remainder tier.
    pub tail_file_chars: usize,

    /// Remainder-tier excerpts are pre-truncated to this many lines.
    pub tail_head_lines: usize,
}

impl Default for BudgetPolicy {
    fn default() -> Self {
        Self {
            max_payload_chars: 300_000,
            top_count: 5,
            mid_count: 10,
            top_file_chars: 60_000,
            mid_file_chars: 10_000,
            tail_file_chars: 3_000,
            tail_head_lines: 80,
        }
    }
}

pub fn serialize_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(Into::into)
}
