use crate::error::{Result, ScanError};
use crate::scanner::Scanner;
use crate::tree::render_tree;
use atlas_protocol::{BudgetPolicy, FileRecord, ScanConfig, ScanOutput};
use std::path::Path;

/// Run the full scan → resolve → aggregate → budget pipeline with the
/// production budget policy.
pub fn scan_all(root: impl AsRef<Path>, config: ScanConfig) -> Result<ScanOutput> {
    scan_with_policy(root, config, &BudgetPolicy::default())
}

/// Pipeline entry with an explicit budget policy (tests use small
/// policies to exercise tier boundaries on small repositories).
///
/// Single-pass and synchronous: callers on an async runtime should run it
/// on a blocking worker so one large scan cannot stall concurrent work.
pub fn scan_with_policy(
    root: impl AsRef<Path>,
    config: ScanConfig,
    policy: &BudgetPolicy,
) -> Result<ScanOutput> {
    let root = root.as_ref().canonicalize()?;
    let config = config.clamped();

    let scanned = Scanner::new(&root, config).scan()?;
    if scanned.is_empty() {
        return Err(ScanError::EmptyScan);
    }

    let records: Vec<FileRecord> = scanned.iter().map(|entry| entry.record.clone()).collect();
    let links = atlas_graph::resolve_links(&records);

    let name = root
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("repository");
    let summary = atlas_graph::summarize(name, &records, links);

    let tree = render_tree(&root, config.depth);
    let payload = atlas_payload::build_payload(&summary, &tree, &scanned, policy)?;
    log::info!(
        "payload size: {} chars (~{} tokens)",
        payload.chars().count(),
        payload.chars().count() / 4
    );

    Ok(ScanOutput {
        payload,
        files: records,
        summary,
    })
}
