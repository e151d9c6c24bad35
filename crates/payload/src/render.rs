use atlas_protocol::{DependencyLink, FileRecord, Summary};

/// Numbered one-line-per-file listing for briefing a downstream consumer.
pub fn render_file_list(files: &[FileRecord]) -> String {
    files
        .iter()
        .enumerate()
        .map(|(index, file)| {
            format!(
                "  {}. {} ({}, {} lines, complexity={:.1})",
                index + 1,
                file.relative_path,
                file.language,
                file.line_count,
                file.complexity_score
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line-per-edge dependency listing.
pub fn render_dep_list(links: &[DependencyLink]) -> String {
    links
        .iter()
        .map(|link| format!("  - {} → {} (imports {})", link.source, link.target, link.raw))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The briefing block prepended to the payload when a consumer wants an
/// explicit inventory: repository totals, the numbered file list, and the
/// resolved dependency list.
pub fn render_brief(summary: &Summary, files: &[FileRecord]) -> String {
    let deps = render_dep_list(&summary.dependency_links);
    let deps = if deps.is_empty() {
        "  (none detected statically)".to_string()
    } else {
        deps
    };
    format!(
        "REPOSITORY: {}\nTOTAL FILES: {} | TOTAL LINES: {}\n\nALL {} FILES (numbered):\n{}\n\nIMPORT DEPENDENCIES FOUND:\n{}\n\n",
        summary.name,
        files.len(),
        summary.total_lines,
        files.len(),
        render_file_list(files),
        deps
    )
}
