//! # Atlas Payload
//!
//! Assembles the single bounded context payload: header metadata, the
//! rendered tree, the serialized dependency list, and as much per-file
//! excerpt content as fits, ranked and truncated by importance.
//!
//! ## Budgeting
//!
//! ```text
//! header (summary + tree + deps)
//!     │  falls back to a minimal header when it alone exceeds the ceiling
//!     ▼
//! excerpts ranked by importance (complexity + entry-point bonus)
//!     │  everything fits → emit verbatim, importance order
//!     ▼
//! tiered allocation against the remaining budget
//!     ├─ top tier: large per-file cap
//!     ├─ middle tier: medium per-file cap
//!     ├─ remainder: pre-trimmed to the first N lines, small cap
//!     └─ exhausted budget: banner line only, so the file stays visible
//!     ▼
//! hard ceiling + final elision marker
//! ```
//!
//! The allocation is greedy and deterministic; raising a file's importance
//! can only move it to an equal-or-larger tier.

mod budget;
mod error;
mod importance;
mod render;

pub use budget::{build_payload, FINAL_TRUNCATION_MARKER, TRUNCATION_MARKER};
pub use error::{PayloadError, Result};
pub use importance::{importance_score, rank_by_importance, ENTRY_POINT_BONUS, ENTRY_POINT_MARKERS};
pub use render::{render_brief, render_dep_list, render_file_list};
