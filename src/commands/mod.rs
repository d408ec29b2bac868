//! Command implementations for bedkit.

pub mod merge;
pub mod pad;
pub mod pipeline;
pub mod sort;
pub mod split;

pub use merge::MergeCommand;
pub use pad::{PadCommand, PaddingPolicy};
pub use pipeline::PipelineCommand;
pub use sort::{dedup_sorted, SortCommand, SortType};
pub use split::SplitCommand;
