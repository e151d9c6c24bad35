use atlas_protocol::{DependencyLink, FileRecord, LinkKind};

/// Path-shaped candidates for a raw import string, in match-priority
/// order: dot-path forms first, then slash forms with common source
/// extensions, then the import with a single relative prefix stripped.
fn candidates(import: &str) -> Vec<String> {
    let dotted = import.replace('.', "/");
    let stripped = import
        .strip_prefix("./")
        .or_else(|| import.strip_prefix("../"))
        .unwrap_or(import);
    vec![
        dotted.clone(),
        format!("{dotted}.py"),
        import.to_string(),
        format!("{import}.js"),
        format!("{import}.ts"),
        format!("{import}.tsx"),
        format!("{import}.jsx"),
        stripped.to_string(),
    ]
}

/// Best-guess target for one import: the first record (in scan order)
/// whose relative path suffix-matches or contains the first viable
/// candidate. No ranking among multiple matches.
fn resolve_import<'a>(import: &str, records: &'a [FileRecord]) -> Option<&'a str> {
    for candidate in candidates(import) {
        for record in records {
            if record.relative_path.ends_with(&candidate)
                || record.relative_path.contains(&candidate)
            {
                return Some(&record.relative_path);
            }
        }
    }
    None
}

/// Map each record's raw imports onto dependency links within the scanned
/// set. Self-links are dropped; imports that resolve to no record are
/// external and produce no link.
pub fn resolve_links(records: &[FileRecord]) -> Vec<DependencyLink> {
    let mut links = Vec::new();
    for record in records {
        for import in &record.imports {
            let Some(target) = resolve_import(import, records) else {
                continue;
            };
            if target == record.relative_path {
                continue;
            }
            links.push(DependencyLink {
                source: record.relative_path.clone(),
                target: target.to_string(),
                kind: LinkKind::Imports,
                raw: import.clone(),
            });
        }
    }
    log::debug!("resolved {} dependency links", links.len());
    links
}
