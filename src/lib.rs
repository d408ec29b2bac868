//! bedkit: sort, merge and pad BED interval files.
//!
//! This library transforms BED-format genomic interval records: it
//! sorts them into a canonical chromosome order, coalesces overlapping
//! or near-adjacent intervals that share a grouping key, and pads
//! interval boundaries while respecting chromosome lengths.
//!
//! # Example
//!
//! ```rust
//! use bedkit::bed::parse_lines;
//! use bedkit::commands::{MergeCommand, SortCommand};
//!
//! let lines =
//!     parse_lines("chr1\t100\t200\nchr1\t150\t250\nchr1\t300\t400\n", None, None).unwrap();
//!
//! let cmd = MergeCommand::new(0, SortCommand::lexicographic());
//! let merged = cmd.merge(lines);
//!
//! assert_eq!(merged.len(), 2);
//! assert_eq!(merged[0].start, 100);
//! assert_eq!(merged[0].stop, 250);
//! ```

pub mod bed;
pub mod chrom_order;
pub mod commands;
pub mod config;
pub mod genome;
pub mod record;

// Re-export commonly used types
pub use bed::{parse_lines, read_lines, write_lines, BedError, BedReader};
pub use genome::Genome;
pub use record::BedLine;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bed::{parse_lines, read_lines, write_lines, BedError, BedReader};
    pub use crate::chrom_order::{ChromRanks, HUMAN_CHROM_ORDER};
    pub use crate::commands::{
        MergeCommand, PadCommand, PaddingPolicy, PipelineCommand, SortCommand, SortType,
        SplitCommand,
    };
    pub use crate::genome::Genome;
    pub use crate::record::BedLine;
}
