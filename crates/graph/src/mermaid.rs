use atlas_protocol::{DependencyLink, FileRecord};
use std::collections::HashMap;

/// Render the scanned set and its import links as a Mermaid `graph TD`
/// definition, one node per file in scan order.
pub fn to_mermaid(records: &[FileRecord], links: &[DependencyLink]) -> String {
    let mut lines = vec!["graph TD".to_string()];
    let mut ids: HashMap<&str, String> = HashMap::new();

    for (index, record) in records.iter().enumerate() {
        let id = format!("N{index}");
        lines.push(format!("    {id}[\"{}\"]", record.relative_path));
        ids.insert(record.relative_path.as_str(), id);
    }

    for link in links {
        if let (Some(source), Some(target)) =
            (ids.get(link.source.as_str()), ids.get(link.target.as_str()))
        {
            lines.push(format!("    {source} -->|imports| {target}"));
        }
    }

    lines.join("\n")
}
