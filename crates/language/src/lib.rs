//! # Atlas Language
//!
//! Per-language capability tables for the scanning pipeline: file
//! classification, heuristic import extraction, and complexity scoring.
//!
//! All three concerns are configuration data keyed by extension, not
//! branching logic — adding a language means adding table entries, never
//! touching algorithm code. Extraction is deliberate text matching, not
//! parsing: it tolerates malformed or partial source and simply yields
//! fewer matches.

mod complexity;
mod imports;
mod tables;

pub use complexity::complexity_score;
pub use imports::extract_imports;
pub use tables::{classify, is_recognized, language_for_extension, special_filename, LanguageInfo};
