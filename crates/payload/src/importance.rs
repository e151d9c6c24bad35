use atlas_protocol::ScannedFile;
use std::cmp::Ordering;

/// Path fragments that mark a file as a likely entry point.
pub const ENTRY_POINT_MARKERS: &[&str] = &["main", "app", "index", "server"];

/// Flat bonus added on top of the complexity score for entry points, large
/// enough to outrank any pure complexity score.
pub const ENTRY_POINT_BONUS: f64 = 100.0;

/// Importance used for budget allocation: complexity score plus the
/// entry-point bonus when the relative path (case-insensitive) contains
/// any marker.
pub fn importance_score(scanned: &ScannedFile) -> f64 {
    let lowered = scanned.record.relative_path.to_lowercase();
    let bonus = if ENTRY_POINT_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
    {
        ENTRY_POINT_BONUS
    } else {
        0.0
    };
    scanned.record.complexity_score + bonus
}

/// Order by importance descending. The sort is stable, so scan order
/// breaks ties — this ordering, not discovery order, drives allocation.
pub fn rank_by_importance(scanned: &[ScannedFile]) -> Vec<&ScannedFile> {
    let mut ranked: Vec<(f64, &ScannedFile)> = scanned
        .iter()
        .map(|entry| (importance_score(entry), entry))
        .collect();
    ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    ranked.into_iter().map(|(_, entry)| entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_protocol::FileRecord;
    use pretty_assertions::assert_eq;

    fn scanned(relative_path: &str, complexity: f64) -> ScannedFile {
        let record = FileRecord {
            path: std::path::PathBuf::from(format!("/repo/{relative_path}")),
            relative_path: relative_path.to_string(),
            size_bytes: 100,
            line_count: 10,
            extension: ".py".to_string(),
            language: "Python".to_string(),
            language_color: "#3572A5".to_string(),
            last_modified: String::new(),
            imports: Vec::new(),
            complexity_score: complexity,
            has_tests: false,
        };
        let excerpt = format!(
            "\n--- FILE: {relative_path} | Python | 10 lines | complexity={complexity:.1} ---\nbody\n"
        );
        ScannedFile { record, excerpt }
    }

    #[test]
    fn entry_points_outrank_higher_complexity_leaves() {
        let files = vec![scanned("lib/engine.py", 85.0), scanned("main.py", 2.5)];
        let ranked = rank_by_importance(&files);
        assert_eq!(ranked[0].record.relative_path, "main.py");
        assert_eq!(importance_score(&files[1]), 102.5);
        assert_eq!(importance_score(&files[0]), 85.0);
    }

    #[test]
    fn marker_match_is_case_insensitive_substring() {
        let files = vec![scanned("src/AppServer.py", 0.0)];
        assert_eq!(importance_score(&files[0]), 100.0);
    }

    #[test]
    fn ties_preserve_scan_order() {
        let files = vec![
            scanned("b.py", 10.0),
            scanned("a.py", 10.0),
            scanned("c.py", 10.0),
        ];
        let ranked = rank_by_importance(&files);
        let order: Vec<&str> = ranked
            .iter()
            .map(|entry| entry.record.relative_path.as_str())
            .collect();
        assert_eq!(order, vec!["b.py", "a.py", "c.py"]);
    }
}
