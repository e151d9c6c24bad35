use crate::error::Result;
use crate::importance::rank_by_importance;
use atlas_protocol::{BudgetPolicy, ScannedFile, Summary};

/// Appended wherever an excerpt was cut to fit its budget.
pub const TRUNCATION_MARKER: &str = "\n...(truncated)...\n";

/// Appended once when the assembled payload itself had to be cut to the
/// ceiling.
pub const FINAL_TRUNCATION_MARKER: &str = "\n\n...(payload truncated to fit context window)...";

/// Assemble the bounded payload: header first, then per-file excerpts in
/// importance order, tier-budgeted against the remaining character budget.
pub fn build_payload(
    summary: &Summary,
    tree: &str,
    scanned: &[ScannedFile],
    policy: &BudgetPolicy,
) -> Result<String> {
    let ceiling = policy.max_payload_chars as i64;

    let mut payload = format!(
        "REPOSITORY: {}\nLANGUAGES: {}\nFILES: {} | LINES: {}\nAVG COMPLEXITY: {:.1}/100\n\nSTRUCTURE:\n{}\n\nIMPORT DEPS:\n{}\n\n",
        summary.name,
        serde_json::to_string(&summary.languages)?,
        summary.total_files,
        summary.total_lines,
        summary.avg_complexity,
        tree,
        serde_json::to_string_pretty(&summary.dependency_links)?,
    );

    let mut remaining = ceiling - char_len(&payload);
    if remaining <= 0 {
        // The full header alone blew the ceiling: fall back to the minimal
        // header so some excerpt content can still fit.
        log::debug!(
            "header exceeds ceiling ({} > {ceiling} chars), using minimal header",
            char_len(&payload)
        );
        payload = format!(
            "REPOSITORY: {}\nFILES: {}\n\n",
            summary.name, summary.total_files
        );
        remaining = ceiling - char_len(&payload);
    }

    let ranked = rank_by_importance(scanned);
    let total_code: i64 = ranked.iter().map(|entry| char_len(&entry.excerpt)).sum();

    if total_code <= remaining {
        for entry in &ranked {
            payload.push_str(&entry.excerpt);
        }
    } else {
        for piece in tiered_parts(&ranked, remaining, policy) {
            payload.push_str(&piece);
        }
    }

    if char_len(&payload) > ceiling {
        log::debug!("payload exceeds ceiling after assembly, hard-truncating");
        payload = truncate_to_chars(&payload, policy.max_payload_chars);
        payload.push_str(FINAL_TRUNCATION_MARKER);
    }

    Ok(payload)
}

/// Greedy rank-then-tier allocation. Returns one emitted piece per ranked
/// file, consuming a running counter against `remaining`. Files whose
/// budget is exhausted still emit their banner line so their existence is
/// signaled.
fn tiered_parts(ranked: &[&ScannedFile], remaining: i64, policy: &BudgetPolicy) -> Vec<String> {
    let mut parts = Vec::with_capacity(ranked.len());
    let mut used: i64 = 0;

    for (rank, entry) in ranked.iter().enumerate() {
        let left = remaining - used;
        let (part, budget) = if rank < policy.top_count {
            let part = entry.excerpt.clone();
            let budget = char_len(&part).min(policy.top_file_chars as i64).min(left);
            (part, budget)
        } else if rank < policy.top_count + policy.mid_count {
            let part = entry.excerpt.clone();
            let budget = char_len(&part).min(policy.mid_file_chars as i64).min(left);
            (part, budget)
        } else {
            let lines: Vec<&str> = entry.excerpt.split('\n').collect();
            let mut trimmed = lines
                .iter()
                .take(policy.tail_head_lines)
                .copied()
                .collect::<Vec<_>>()
                .join("\n");
            if lines.len() > policy.tail_head_lines {
                trimmed.push_str(&format!(
                    "\n...(truncated to first {} lines)...\n",
                    policy.tail_head_lines
                ));
            }
            let budget = char_len(&trimmed)
                .min(policy.tail_file_chars as i64)
                .min(left);
            (trimmed, budget)
        };

        if budget <= 0 {
            let banner = banner_line(entry);
            used += char_len(&banner) + 1;
            parts.push(format!("{banner}\n"));
        } else {
            let mut piece = truncate_to_chars(&part, budget as usize);
            if char_len(&part) > budget {
                piece.push_str(TRUNCATION_MARKER);
            }
            used += char_len(&piece);
            parts.push(piece);
        }
    }

    parts
}

/// First non-empty line of the excerpt — the `--- FILE: … ---` banner.
fn banner_line(entry: &ScannedFile) -> String {
    entry
        .excerpt
        .lines()
        .find(|line| !line.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            format!(
                "--- FILE: {} (content omitted - token limit) ---",
                entry.record.relative_path
            )
        })
}

fn char_len(input: &str) -> i64 {
    input.chars().count() as i64
}

/// Cut on a character boundary, never inside a multi-byte code point.
fn truncate_to_chars(input: &str, max_chars: usize) -> String {
    let mut cut_byte = input.len();
    for (seen, (idx, _)) in input.char_indices().enumerate() {
        if seen == max_chars {
            cut_byte = idx;
            break;
        }
    }
    input[..cut_byte].to_string()
}
