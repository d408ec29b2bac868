//! Pad-then-merge pipeline.
//!
//! Padding runs first so any overlaps it creates are coalesced; the
//! merge step always runs (it sorts internally), so the pipeline accepts
//! unsorted input.

use crate::bed::Result;
use crate::commands::merge::MergeCommand;
use crate::commands::pad::PadCommand;
use crate::record::BedLine;

/// The full transformation: optional padding, then sort + merge.
#[derive(Debug, Clone, Default)]
pub struct PipelineCommand {
    pub pad: Option<PadCommand>,
    pub merge: MergeCommand,
}

impl PipelineCommand {
    pub fn new(pad: Option<PadCommand>, merge: MergeCommand) -> Self {
        Self { pad, merge }
    }

    /// Run the pipeline, consuming the input collection.
    ///
    /// Returns the transformed lines plus the missing-chromosome
    /// registry from the padding step (empty when padding is off).
    pub fn run(&self, lines: Vec<BedLine>) -> Result<(Vec<BedLine>, Vec<String>)> {
        let (lines, missing) = match &self.pad {
            Some(pad) if pad.padding != 0 => pad.pad(lines)?,
            _ => (lines, Vec::new()),
        };
        Ok((self.merge.merge(lines), missing))
    }
}
