use atlas_protocol::{ConnectedFile, DependencyLink, FileRecord, Hotspot, Summary};
use std::cmp::Ordering;
use std::collections::BTreeMap;

const TOP_COUNT: usize = 5;

/// Aggregate a scanned record set and its resolved links into a fresh
/// [`Summary`]. Pure function: no mutation of inputs, no I/O.
pub fn summarize(name: &str, records: &[FileRecord], links: Vec<DependencyLink>) -> Summary {
    let mut languages: BTreeMap<String, usize> = BTreeMap::new();
    let mut total_lines = 0usize;
    let mut total_bytes = 0u64;
    for record in records {
        *languages.entry(record.language.clone()).or_insert(0) += record.line_count;
        total_lines += record.line_count;
        total_bytes += record.size_bytes;
    }

    // Stable sort: complexity descending, scan order breaks ties.
    let mut by_complexity: Vec<&FileRecord> = records.iter().collect();
    by_complexity.sort_by(|a, b| {
        b.complexity_score
            .partial_cmp(&a.complexity_score)
            .unwrap_or(Ordering::Equal)
    });
    let hotspots = by_complexity
        .iter()
        .take(TOP_COUNT)
        .map(|record| Hotspot {
            file: record.relative_path.clone(),
            complexity: record.complexity_score,
            lines: record.line_count,
            language: record.language.clone(),
        })
        .collect();

    // Total degree: appearances as source or target.
    let mut degree: BTreeMap<&str, usize> = BTreeMap::new();
    for link in &links {
        *degree.entry(link.source.as_str()).or_insert(0) += 1;
        *degree.entry(link.target.as_str()).or_insert(0) += 1;
    }
    let mut ranked: Vec<(&str, usize)> = degree.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    let most_connected = ranked
        .into_iter()
        .take(TOP_COUNT)
        .map(|(file, connections)| ConnectedFile {
            file: file.to_string(),
            connections,
        })
        .collect();

    let avg_complexity = if records.is_empty() {
        0.0
    } else {
        let mean =
            records.iter().map(|r| r.complexity_score).sum::<f64>() / records.len() as f64;
        (mean * 10.0).round() / 10.0
    };

    Summary {
        name: name.to_string(),
        total_files: records.len(),
        total_lines,
        total_bytes,
        languages,
        dependency_links: links,
        hotspots,
        most_connected,
        avg_complexity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_protocol::LinkKind;
    use pretty_assertions::assert_eq;

    fn record(relative_path: &str, language: &str, lines: usize, complexity: f64) -> FileRecord {
        FileRecord {
            path: std::path::PathBuf::from(format!("/repo/{relative_path}")),
            relative_path: relative_path.to_string(),
            size_bytes: lines as u64 * 10,
            line_count: lines,
            extension: ".py".to_string(),
            language: language.to_string(),
            language_color: "#3572A5".to_string(),
            last_modified: String::new(),
            imports: Vec::new(),
            complexity_score: complexity,
            has_tests: false,
        }
    }

    fn link(source: &str, target: &str) -> DependencyLink {
        DependencyLink {
            source: source.to_string(),
            target: target.to_string(),
            kind: LinkKind::Imports,
            raw: target.trim_end_matches(".py").to_string(),
        }
    }

    #[test]
    fn builds_language_histogram_and_totals() {
        let records = vec![
            record("a.py", "Python", 30, 10.0),
            record("b.py", "Python", 20, 20.0),
            record("web.js", "JavaScript", 50, 30.0),
        ];
        let summary = summarize("demo", &records, Vec::new());

        assert_eq!(summary.name, "demo");
        assert_eq!(summary.total_files, 3);
        assert_eq!(summary.total_lines, 100);
        assert_eq!(summary.total_bytes, 1_000);
        assert_eq!(summary.languages["Python"], 50);
        assert_eq!(summary.languages["JavaScript"], 50);
        assert_eq!(summary.avg_complexity, 20.0);
    }

    #[test]
    fn hotspots_sorted_descending_with_scan_order_ties() {
        let records = vec![
            record("a.py", "Python", 10, 5.0),
            record("b.py", "Python", 10, 50.0),
            record("c.py", "Python", 10, 5.0),
            record("d.py", "Python", 10, 99.0),
            record("e.py", "Python", 10, 5.0),
            record("f.py", "Python", 10, 5.0),
            record("g.py", "Python", 10, 5.0),
        ];
        let summary = summarize("demo", &records, Vec::new());

        let files: Vec<&str> = summary.hotspots.iter().map(|h| h.file.as_str()).collect();
        assert_eq!(files, vec!["d.py", "b.py", "a.py", "c.py", "e.py"]);
        assert_eq!(summary.hotspots.len(), 5);
        assert!(summary
            .hotspots
            .windows(2)
            .all(|pair| pair[0].complexity >= pair[1].complexity));
    }

    #[test]
    fn most_connected_counts_total_degree() {
        let records = vec![
            record("hub.py", "Python", 10, 1.0),
            record("a.py", "Python", 10, 1.0),
            record("b.py", "Python", 10, 1.0),
        ];
        let links = vec![
            link("a.py", "hub.py"),
            link("b.py", "hub.py"),
            link("hub.py", "a.py"),
        ];
        let summary = summarize("demo", &records, links);

        assert_eq!(summary.most_connected[0].file, "hub.py");
        assert_eq!(summary.most_connected[0].connections, 3);
        assert_eq!(summary.most_connected[1].file, "a.py");
        assert_eq!(summary.most_connected[1].connections, 2);
        assert_eq!(summary.most_connected[2].file, "b.py");
    }

    #[test]
    fn empty_set_yields_zero_average() {
        let summary = summarize("empty", &[], Vec::new());
        assert_eq!(summary.avg_complexity, 0.0);
        assert_eq!(summary.total_files, 0);
        assert!(summary.hotspots.is_empty());
        assert!(summary.most_connected.is_empty());
    }

    #[test]
    fn average_is_rounded_to_one_decimal() {
        let records = vec![
            record("a.py", "Python", 10, 10.0),
            record("b.py", "Python", 10, 10.1),
            record("c.py", "Python", 10, 10.1),
        ];
        let summary = summarize("demo", &records, Vec::new());
        assert_eq!(summary.avg_complexity, 10.1);
    }
}
