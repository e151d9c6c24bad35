//! # Atlas Scanner
//!
//! Repository scanning and the pipeline entry point.
//!
//! ## Pipeline
//!
//! ```text
//! Directory
//!     │
//!     ├──> Scanner (deny-list + size + recognition filters)
//!     │      └─> FileRecord + excerpt per accepted file
//!     │
//!     ├──> Dependency resolver (atlas-graph)
//!     │      └─> DependencyLink edges
//!     │
//!     ├──> Aggregator (atlas-graph)
//!     │      └─> Summary (histogram, hotspots, connectivity)
//!     │
//!     └──> Payload budgeter (atlas-payload)
//!            └─> Bounded context payload
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use atlas_protocol::ScanConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let output = atlas_scanner::scan_all("/path/to/project", ScanConfig::default())?;
//!     println!("{} files, {} payload chars", output.files.len(), output.payload.len());
//!     Ok(())
//! }
//! ```

mod error;
mod pipeline;
mod scanner;
mod tree;

pub use error::{Result, ScanError};
pub use pipeline::{scan_all, scan_with_policy};
pub use scanner::{Scanner, MAX_FILE_SIZE_BYTES};
pub use tree::render_tree;
